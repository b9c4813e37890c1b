//! nudge activity engine
//!
//! Turns the screen anchor into cursor motion:
//!
//! - **Pattern:** the fixed shaft / head / two-ball path as a lazy waypoint
//!   iterator
//! - **Glide:** eased interpolation between two cursor positions
//! - **Runner:** one full traversal against a [`CursorControl`] backend
//! - **Scheduler:** a traversal now, then one per period, until shutdown
//! - **Status:** progress lines for the user
//!
//! [`CursorControl`]: nudge_platform_core::CursorControl

pub mod glide;
pub mod pattern;
pub mod runner;
pub mod scheduler;
pub mod signal;
pub mod status;

pub use pattern::{Pattern, PatternGeometry, Phase, Waypoint};
pub use runner::{MotionTiming, PatternRunner, TraversalSummary};
pub use scheduler::{ActivityScheduler, SchedulerReport, SchedulerState};
pub use signal::{ShutdownReason, ShutdownSignal};
pub use status::{Status, StatusSink};
