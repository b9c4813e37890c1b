//! nudge platform core contracts.
//!
//! This crate contains the screen geometry types and the cursor-control
//! trait used by the activity crate without coupling to a concrete OS
//! backend.

pub mod recording;

use nudge_common::error::NudgeResult;
use serde::{Deserialize, Serialize};

pub use recording::RecordingCursor;

/// An absolute screen coordinate in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a pixel offset.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Resolution of the main display in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Screen center, rounded down. This is the pattern anchor.
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for cursor-control backends.
///
/// Backends are driven from a single task and need not be `Send`.
pub trait CursorControl {
    /// Resolution of the main display.
    fn screen_size(&self) -> NudgeResult<ScreenSize>;

    /// Current cursor position.
    fn position(&self) -> NudgeResult<Point>;

    /// Warp the cursor to an absolute position.
    fn move_to(&mut self, point: Point) -> NudgeResult<()>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

impl<C: CursorControl + ?Sized> CursorControl for Box<C> {
    fn screen_size(&self) -> NudgeResult<ScreenSize> {
        (**self).screen_size()
    }

    fn position(&self) -> NudgeResult<Point> {
        (**self).position()
    }

    fn move_to(&mut self, point: Point) -> NudgeResult<()> {
        (**self).move_to(point)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Screen size and anchor, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLayout {
    pub screen: ScreenSize,
    pub anchor: Point,
}

impl DisplayLayout {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            anchor: screen.center(),
        }
    }

    /// Query the backend for the screen size and derive the anchor.
    pub fn detect(cursor: &dyn CursorControl) -> NudgeResult<Self> {
        let screen = cursor.screen_size()?;
        tracing::debug!(backend = cursor.name(), %screen, "Detected main display");
        Ok(Self::new(screen))
    }
}
