//! Run the pattern a single time.

use nudge_activity::PatternRunner;
use nudge_platform_core::CursorControl;

pub async fn run<C: CursorControl>(runner: &mut PatternRunner<C>) -> anyhow::Result<()> {
    println!("Running pattern once...");

    let summary = runner.execute().await;

    println!(
        "{} waypoints in {:.1}s",
        summary.waypoints,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
