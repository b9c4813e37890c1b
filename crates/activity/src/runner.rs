//! Executes one traversal of the pattern against a cursor backend.

use std::time::Duration;

use nudge_common::config::MotionConfig;
use nudge_platform_core::{CursorControl, Point};
use tokio::time::Instant;

use crate::glide::{Curve, Glide};
use crate::pattern::{Pattern, Phase};
use crate::status::{Status, StatusSink};

/// Timing of one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionTiming {
    /// Pause after each waypoint.
    pub step_delay: Duration,
    /// Glide duration between consecutive waypoints.
    pub step_glide: Duration,
    /// Glide duration to and from the anchor.
    pub anchor_glide: Duration,
    /// Pause at the anchor before the shaft starts.
    pub settle: Duration,
}

impl MotionTiming {
    /// No glides, no pauses.
    pub const fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            step_glide: Duration::ZERO,
            anchor_glide: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

impl Default for MotionTiming {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

impl From<&MotionConfig> for MotionTiming {
    fn from(config: &MotionConfig) -> Self {
        Self {
            step_delay: Duration::from_millis(config.step_delay_ms),
            step_glide: Duration::from_millis(config.step_glide_ms),
            anchor_glide: Duration::from_millis(config.anchor_glide_ms),
            settle: Duration::from_millis(config.settle_ms),
        }
    }
}

/// Outcome of one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalSummary {
    /// Pattern waypoints visited (anchor moves excluded).
    pub waypoints: usize,
    /// Moves the backend rejected.
    pub failed_moves: usize,
    /// Time the traversal took.
    pub elapsed: Duration,
}

/// Drives a [`Pattern`] through a [`CursorControl`] backend.
pub struct PatternRunner<C> {
    cursor: C,
    pattern: Pattern,
    timing: MotionTiming,
    status: Option<StatusSink>,
}

impl<C: CursorControl> PatternRunner<C> {
    pub fn new(cursor: C, pattern: Pattern, timing: MotionTiming) -> Self {
        Self {
            cursor,
            pattern,
            timing,
            status: None,
        }
    }

    /// Send progress events to `sink`.
    pub fn with_status(mut self, sink: impl FnMut(&Status) + 'static) -> Self {
        self.status = Some(Box::new(sink));
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Run one full traversal: anchor, settle, all waypoints, back to anchor.
    ///
    /// Move failures are logged and skipped; the traversal always runs to
    /// the end.
    pub async fn execute(&mut self) -> TraversalSummary {
        let started = Instant::now();
        let anchor = self.pattern.anchor();
        let mut failed_moves = 0;
        let mut waypoints = 0;

        tracing::debug!(backend = self.cursor.name(), %anchor, "Traversal started");
        self.report(Status::Starting { anchor });

        failed_moves += self.glide_to(anchor, self.timing.anchor_glide).await;
        pause(self.timing.settle).await;

        let mut phase: Option<Phase> = None;
        for waypoint in self.pattern.waypoints() {
            if phase != Some(waypoint.phase) {
                self.report(Status::Drawing(waypoint.phase));
                phase = Some(waypoint.phase);
            }
            failed_moves += self.glide_to(waypoint.point, self.timing.step_glide).await;
            pause(self.timing.step_delay).await;
            waypoints += 1;
        }

        self.report(Status::Returning);
        failed_moves += self.glide_to(anchor, self.timing.anchor_glide).await;

        let summary = TraversalSummary {
            waypoints,
            failed_moves,
            elapsed: started.elapsed(),
        };
        if failed_moves > 0 {
            tracing::warn!(failed_moves, "Pattern completed with rejected moves");
        }
        tracing::debug!(elapsed_ms = summary.elapsed.as_millis() as u64, "Traversal finished");
        self.report(Status::Completed { failed_moves });
        summary
    }

    pub(crate) fn report(&mut self, status: Status) {
        tracing::debug!(%status, "status");
        if let Some(sink) = self.status.as_mut() {
            sink(&status);
        }
    }

    /// Glide to `target`; returns the number of rejected moves (0 or 1).
    async fn glide_to(&mut self, target: Point, duration: Duration) -> usize {
        let glide = match self.cursor.position() {
            Ok(from) => Glide::plan(from, target, duration, Curve::EaseInOut),
            Err(e) => {
                tracing::debug!(error = %e, "Cursor position unknown, jumping");
                Glide::jump(target)
            }
        };

        let last = glide.frames.len().saturating_sub(1);
        for (i, frame) in glide.frames.into_iter().enumerate() {
            if let Err(e) = self.cursor.move_to(frame) {
                tracing::warn!(error = %e, "Cursor move rejected");
                return 1;
            }
            if i < last {
                pause(glide.frame_delay).await;
            }
        }
        0
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
