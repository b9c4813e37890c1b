//! nudge desktop platform integration
//!
//! - **Cursor backend:** `enigo`-based input injection on X11, Wayland
//!   (libei), Windows and macOS
//! - **Session detection:** which display server the process runs under
//! - **Permissions:** capability checks and user guidance when input
//!   injection is denied

pub mod backend;
pub mod display;
pub mod permissions;

pub use backend::EnigoCursor;
pub use display::*;
