//! User-facing progress lines of a traversal.
//!
//! The runner and scheduler hand each [`Status`] to an optional sink set with
//! [`PatternRunner::with_status`]; the CLI prints them to stdout.
//!
//! [`PatternRunner::with_status`]: crate::runner::PatternRunner::with_status

use chrono::NaiveTime;
use nudge_platform_core::Point;

use crate::pattern::Phase;

/// One progress event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// A scheduled traversal is starting (local wall-clock time).
    Executing { at: NaiveTime },
    /// The cursor is heading to the anchor.
    Starting { anchor: Point },
    /// The first waypoint of a phase is next.
    Drawing(Phase),
    /// All waypoints visited, gliding back to the anchor.
    Returning,
    /// The traversal finished.
    Completed { failed_moves: usize },
}

/// Receiver of status events.
pub type StatusSink = Box<dyn FnMut(&Status)>;

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Executing { at } => write!(f, "Executing pattern at {}", at.format("%H:%M:%S")),
            Status::Starting { anchor } => write!(f, "Starting pattern at center: {anchor}"),
            Status::Drawing(phase) => write!(f, "Drawing {phase}..."),
            Status::Returning => f.write_str("Returning to center..."),
            Status::Completed { failed_moves: 0 } => f.write_str("Pattern completed!"),
            Status::Completed { failed_moves } => {
                write!(f, "Pattern completed ({failed_moves} moves rejected)")
            }
        }
    }
}
