//! `enigo`-backed cursor control.

use enigo::{Coordinate, Enigo, Mouse, Settings};
use nudge_common::error::{NudgeError, NudgeResult};
use nudge_platform_core::{CursorControl, Point, ScreenSize};

use crate::display::{detect_display_server, DisplayServer};
use crate::permissions::denial_hint;

/// Cursor control through the host's input-injection API.
pub struct EnigoCursor {
    enigo: Enigo,
    server: DisplayServer,
}

impl EnigoCursor {
    /// Connect to the input-injection API of the current session.
    ///
    /// Fails with [`NudgeError::CursorUnavailable`] when the OS refuses
    /// access (missing permission, no display session).
    pub fn connect() -> NudgeResult<Self> {
        let server = detect_display_server();
        tracing::debug!(%server, "Connecting enigo backend");

        let enigo = Enigo::new(&Settings::default()).map_err(|e| {
            let hint = denial_hint(server);
            if hint.is_empty() {
                NudgeError::cursor_unavailable(e.to_string())
            } else {
                NudgeError::cursor_unavailable(format!("{e}. {hint}"))
            }
        })?;

        Ok(Self { enigo, server })
    }

    /// Display server detected at connect time.
    pub fn display_server(&self) -> DisplayServer {
        self.server
    }
}

impl CursorControl for EnigoCursor {
    fn screen_size(&self) -> NudgeResult<ScreenSize> {
        let (width, height) = self
            .enigo
            .main_display()
            .map_err(|e| NudgeError::platform(format!("Failed to query display size: {e}")))?;
        if width <= 0 || height <= 0 {
            return Err(NudgeError::platform(format!(
                "Display reported an empty size: {width}x{height}"
            )));
        }
        Ok(ScreenSize::new(width as u32, height as u32))
    }

    fn position(&self) -> NudgeResult<Point> {
        self.enigo
            .location()
            .map(Point::from)
            .map_err(|e| NudgeError::platform(format!("Failed to query cursor position: {e}")))
    }

    fn move_to(&mut self, point: Point) -> NudgeResult<()> {
        self.enigo
            .move_mouse(point.x, point.y, Coordinate::Abs)
            .map_err(|e| NudgeError::movement(format!("move to {point}: {e}")))
    }

    fn name(&self) -> &str {
        "enigo"
    }
}
