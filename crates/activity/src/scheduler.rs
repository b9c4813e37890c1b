//! Periodic traversal scheduling.
//!
//! One traversal runs as soon as the scheduler starts, then one per period
//! until the shutdown future resolves. Traversals run to completion inside
//! the select loop, so a tick can never interrupt one and shutdown is only
//! observed between traversals.

use std::future::Future;
use std::time::Duration;

use nudge_common::error::{NudgeError, NudgeResult};
use nudge_platform_core::CursorControl;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::runner::{PatternRunner, TraversalSummary};
use crate::status::Status;

/// Longest accepted period: one week.
pub const MAX_PERIOD: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Lifecycle of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the next tick or the shutdown request.
    Running,
    /// Shutdown observed; terminal.
    Stopped,
}

/// Totals reported when the scheduler stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchedulerReport {
    pub traversals: u64,
    pub failed_moves: u64,
}

/// Runs a [`PatternRunner`] on a fixed period.
pub struct ActivityScheduler<C> {
    runner: PatternRunner<C>,
    period: Duration,
    state: SchedulerState,
    report: SchedulerReport,
}

impl<C: CursorControl> ActivityScheduler<C> {
    /// `period` must be non-zero and at most [`MAX_PERIOD`].
    pub fn new(runner: PatternRunner<C>, period: Duration) -> NudgeResult<Self> {
        if period.is_zero() || period > MAX_PERIOD {
            return Err(NudgeError::config(format!(
                "scheduler period must be between 1s and {}s, got {period:?}",
                MAX_PERIOD.as_secs()
            )));
        }
        Ok(Self {
            runner,
            period,
            state: SchedulerState::Running,
            report: SchedulerReport::default(),
        })
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn runner(&self) -> &PatternRunner<C> {
        &self.runner
    }

    /// Run until `shutdown` resolves; returns its output and the totals.
    ///
    /// Ticks are aligned to the start instant. A tick missed while a
    /// traversal overran fires once, right after it, then the original
    /// alignment resumes. When a tick and shutdown are ready together,
    /// shutdown wins.
    pub async fn run<F>(&mut self, shutdown: F) -> (F::Output, SchedulerReport)
    where
        F: Future,
    {
        self.state = SchedulerState::Running;

        let start = Instant::now();
        // The period is bounded in `new`; fall back to an immediate tick anyway.
        let first_tick = start.checked_add(self.period).unwrap_or(start);
        let mut ticker = interval_at(first_tick, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::debug!(period_secs = self.period.as_secs(), "Scheduler started");

        tokio::pin!(shutdown);

        self.traverse().await;

        let reason = loop {
            tokio::select! {
                biased;
                reason = &mut shutdown => break reason,
                _ = ticker.tick() => {
                    self.traverse().await;
                }
            }
        };

        self.state = SchedulerState::Stopped;
        tracing::info!(
            traversals = self.report.traversals,
            failed_moves = self.report.failed_moves,
            "Scheduler stopped"
        );
        (reason, self.report)
    }

    async fn traverse(&mut self) -> TraversalSummary {
        self.runner.report(Status::Executing {
            at: chrono::Local::now().time(),
        });
        let summary = self.runner.execute().await;
        self.report.traversals += 1;
        self.report.failed_moves += summary.failed_moves as u64;

        let next = chrono::Local::now()
            + chrono::Duration::from_std(self.period).unwrap_or(chrono::Duration::zero());
        tracing::debug!(next = %next.format("%H:%M:%S"), "Next traversal scheduled");
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use crate::runner::MotionTiming;
    use nudge_platform_core::{Point, RecordingCursor, ScreenSize};

    fn scheduler(period: Duration, timing: MotionTiming) -> ActivityScheduler<RecordingCursor> {
        let cursor = RecordingCursor::new(ScreenSize::new(1920, 1080));
        let runner = PatternRunner::new(cursor, Pattern::new(Point::new(960, 540)), timing);
        ActivityScheduler::new(runner, period).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn ready_shutdown_still_runs_the_initial_traversal() {
        let mut scheduler = scheduler(Duration::from_secs(180), MotionTiming::instant());
        let ((), report) = scheduler.run(std::future::ready(())).await;

        assert_eq!(report.traversals, 1);
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
        assert_eq!(scheduler.runner().cursor().moves().len(), 313);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_every_period_until_shutdown() {
        let period = Duration::from_secs(180);
        let mut scheduler = scheduler(period, MotionTiming::instant());

        let shutdown = tokio::time::sleep(period * 2 + Duration::from_secs(1));
        let ((), report) = scheduler.run(shutdown).await;

        // t = 0, t = 3 min, t = 6 min
        assert_eq!(report.traversals, 3);
    }

    fn runner() -> PatternRunner<RecordingCursor> {
        let cursor = RecordingCursor::new(ScreenSize::new(1920, 1080));
        PatternRunner::new(cursor, Pattern::new(Point::new(960, 540)), MotionTiming::instant())
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = ActivityScheduler::new(runner(), Duration::ZERO).err().unwrap();
        assert!(matches!(err, NudgeError::Config { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn period_beyond_a_week_is_rejected() {
        assert!(ActivityScheduler::new(runner(), Duration::from_secs(u64::MAX)).is_err());
        assert!(ActivityScheduler::new(runner(), MAX_PERIOD + Duration::from_secs(1)).is_err());

        let mut scheduler = ActivityScheduler::new(runner(), MAX_PERIOD).unwrap();
        let ((), report) = scheduler
            .run(tokio::time::sleep(Duration::from_secs(60)))
            .await;
        assert_eq!(report.traversals, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn each_traversal_is_announced() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let executing = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&executing);
        let runner = runner().with_status(move |status| {
            if matches!(status, Status::Executing { .. }) {
                *counter.borrow_mut() += 1;
            }
        });
        let mut scheduler = ActivityScheduler::new(runner, Duration::from_secs(180)).unwrap();
        let ((), report) = scheduler
            .run(tokio::time::sleep(Duration::from_secs(181)))
            .await;

        assert_eq!(report.traversals, 2);
        assert_eq!(*executing.borrow(), 2);
    }
}
