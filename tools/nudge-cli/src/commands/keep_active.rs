//! Run the pattern periodically until interrupted.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use nudge_activity::{
    ActivityScheduler, PatternRunner, SchedulerReport, ShutdownReason, ShutdownSignal,
};
use nudge_platform_core::CursorControl;

pub async fn run<C: CursorControl>(runner: PatternRunner<C>, period: Duration) -> anyhow::Result<()> {
    // Register before the first traversal so Ctrl+C is never lost.
    let mut signal = ShutdownSignal::install().context("Failed to install signal handlers")?;
    run_until(runner, period, signal.recv()).await?;
    Ok(())
}

/// Run the scheduler until `shutdown` resolves.
pub async fn run_until<C, F>(
    runner: PatternRunner<C>,
    period: Duration,
    shutdown: F,
) -> anyhow::Result<SchedulerReport>
where
    C: CursorControl,
    F: Future<Output = ShutdownReason>,
{
    let mut scheduler = ActivityScheduler::new(runner, period).context("Invalid schedule")?;

    println!("Starting mouse activity simulation...");
    println!("Mouse will move every {} minutes", period.as_secs() / 60);
    println!("Press Ctrl+C to stop");
    println!();

    let (reason, report) = scheduler.run(shutdown).await;

    println!();
    println!("Received signal: {reason}");
    println!(
        "Stopping mouse movement ({} traversals completed)",
        report.traversals
    );
    Ok(report)
}
