//! Acquire cursor control and print the system banner.

use anyhow::Context;
use nudge_activity::{MotionTiming, Pattern, PatternRunner};
use nudge_common::config::AppConfig;
use nudge_platform_core::{CursorControl, DisplayLayout};
use nudge_platform_desktop::permissions::{
    all_required_available, check_capabilities, injection_grant_hint, print_capability_report,
};
use nudge_platform_desktop::EnigoCursor;

/// Connect to the desktop, detect the anchor, and build the runner.
///
/// Failing to acquire cursor control is fatal.
pub fn connect(config: &AppConfig) -> anyhow::Result<PatternRunner<EnigoCursor>> {
    let cursor = EnigoCursor::connect().context("Cannot control the mouse cursor")?;
    let layout = DisplayLayout::detect(&cursor).context("Cannot read the screen size")?;

    println!("=== nudge ===");
    println!("Display server: {}", cursor.display_server());
    println!("Screen size: {}", layout.screen);
    match cursor.position() {
        Ok(pos) => println!("Current mouse position: {pos}"),
        Err(e) => tracing::debug!(error = %e, "Cursor position unavailable"),
    }
    let capabilities = check_capabilities(cursor.display_server());
    if !all_required_available(&capabilities) {
        print_capability_report(&capabilities);
    }
    if let Some(hint) = injection_grant_hint(cursor.display_server()) {
        println!("Note: {hint}");
    }
    println!("{}", "=".repeat(30));

    let pattern = Pattern::new(layout.anchor);
    let runner = PatternRunner::new(cursor, pattern, MotionTiming::from(&config.motion))
        .with_status(|status| println!("{status}"));
    Ok(runner)
}
