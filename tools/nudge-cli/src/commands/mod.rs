pub mod keep_active;
pub mod once;
pub mod session;
