//! In-memory cursor backend that records every move.

use nudge_common::error::{NudgeError, NudgeResult};

use crate::{CursorControl, Point, ScreenSize};

/// Backend for tests: reports a fixed screen and records every `move_to`.
#[derive(Debug, Clone)]
pub struct RecordingCursor {
    screen: ScreenSize,
    position: Point,
    moves: Vec<Point>,
    fail_moves: bool,
}

impl RecordingCursor {
    /// Create a recorder with the cursor at the top-left corner.
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            position: Point::default(),
            moves: Vec::new(),
            fail_moves: false,
        }
    }

    /// A recorder whose every `move_to` fails.
    pub fn failing(screen: ScreenSize) -> Self {
        Self {
            fail_moves: true,
            ..Self::new(screen)
        }
    }

    /// Every point passed to `move_to`, in call order.
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }
}

impl CursorControl for RecordingCursor {
    fn screen_size(&self) -> NudgeResult<ScreenSize> {
        Ok(self.screen)
    }

    fn position(&self) -> NudgeResult<Point> {
        Ok(self.position)
    }

    fn move_to(&mut self, point: Point) -> NudgeResult<()> {
        if self.fail_moves {
            return Err(NudgeError::movement(format!("recording backend rejects {point}")));
        }
        self.position = point;
        self.moves.push(point);
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_moves_and_tracks_position() {
        let mut cursor = RecordingCursor::new(ScreenSize::new(800, 600));
        cursor.move_to(Point::new(1, 2)).unwrap();
        cursor.move_to(Point::new(3, 4)).unwrap();

        assert_eq!(cursor.moves(), &[Point::new(1, 2), Point::new(3, 4)]);
        assert_eq!(cursor.position().unwrap(), Point::new(3, 4));
    }

    #[test]
    fn failing_recorder_keeps_position() {
        let mut cursor = RecordingCursor::failing(ScreenSize::new(800, 600));
        assert!(cursor.move_to(Point::new(1, 2)).is_err());
        assert_eq!(cursor.position().unwrap(), Point::default());
        assert!(cursor.moves().is_empty());
    }
}
