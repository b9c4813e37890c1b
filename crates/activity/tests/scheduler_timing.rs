use std::time::Duration;

use nudge_activity::{ActivityScheduler, MotionTiming, Pattern, PatternRunner, SchedulerState};
use nudge_platform_core::{Point, RecordingCursor, ScreenSize};

/// 311 waypoints at 10 ms each: every traversal takes exactly 3.11 s.
fn stepped_timing() -> MotionTiming {
    MotionTiming {
        step_delay: Duration::from_millis(10),
        ..MotionTiming::instant()
    }
}

fn scheduler(period: Duration) -> ActivityScheduler<RecordingCursor> {
    let cursor = RecordingCursor::new(ScreenSize::new(1920, 1080));
    let runner = PatternRunner::new(cursor, Pattern::new(Point::new(960, 540)), stepped_timing());
    ActivityScheduler::new(runner, period).unwrap()
}

#[tokio::test(start_paused = true)]
async fn shutdown_during_traversal_waits_for_it_to_finish() {
    let mut scheduler = scheduler(Duration::from_secs(180));

    // Fires 100 ms into the first traversal.
    let shutdown = tokio::time::sleep(Duration::from_millis(100));
    let ((), report) = scheduler.run(shutdown).await;

    assert_eq!(report.traversals, 1);
    assert_eq!(scheduler.state(), SchedulerState::Stopped);
    // The traversal was not cut short: anchor + 311 waypoints + anchor.
    assert_eq!(scheduler.runner().cursor().moves().len(), 313);
}

#[tokio::test(start_paused = true)]
async fn missed_ticks_do_not_stack_up() {
    // Period shorter than a traversal: three ticks are missed during the
    // first one, but only one catch-up traversal follows.
    let mut scheduler = scheduler(Duration::from_secs(1));

    let shutdown = tokio::time::sleep(Duration::from_secs(4));
    let ((), report) = scheduler.run(shutdown).await;

    assert_eq!(report.traversals, 2);
    assert_eq!(scheduler.runner().cursor().moves().len(), 2 * 313);
}

#[tokio::test(start_paused = true)]
async fn shutdown_output_is_returned() {
    let mut scheduler = scheduler(Duration::from_secs(180));
    let (reason, report) = scheduler
        .run(async {
            tokio::time::sleep(Duration::from_secs(200)).await;
            "stop"
        })
        .await;

    assert_eq!(reason, "stop");
    assert_eq!(report.traversals, 2);
    assert_eq!(report.failed_moves, 0);
}
