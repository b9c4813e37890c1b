//! nudge CLI — keep the session active by moving the mouse cursor.
//!
//! Usage:
//!   nudge              Move the cursor now, then every 3 minutes until Ctrl+C
//!   nudge once         Move the cursor through the pattern once and exit

use clap::Parser;
use nudge_common::config::{config_file_path, AppConfig, LoggingConfig, MAX_INTERVAL_MINUTES};

mod commands;

#[derive(Parser)]
#[command(
    name = "nudge",
    about = "Keep your session active by periodically moving the mouse",
    version,
    author
)]
struct Cli {
    /// "once" runs a single traversal; anything else runs continuously
    mode: Option<String>,

    /// Minutes between traversals in continuous mode
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL_MINUTES))]
    interval_minutes: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// What the positional argument asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Once,
    Continuous,
}

impl Mode {
    fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("once") => Mode::Once,
            _ => Mode::Continuous,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Read the file before logging exists, report its problems after.
    let loaded = AppConfig::load();
    let logging = match &loaded {
        Ok(config) => config.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    nudge_common::logging::init_logging(&logging.with_verbose(cli.verbose));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!(path = ?config_file_path(), error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(minutes) = cli.interval_minutes {
        config.schedule.interval_minutes = minutes;
    }

    let mode = Mode::from_arg(cli.mode.as_deref());
    tracing::debug!(?mode, ?config, "Starting nudge");

    let mut runner = commands::session::connect(&config)?;

    match mode {
        Mode::Once => commands::once::run(&mut runner).await,
        Mode::Continuous => commands::keep_active::run(runner, config.schedule.interval()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_once_selects_single_run() {
        assert_eq!(Mode::from_arg(Some("once")), Mode::Once);
        assert_eq!(Mode::from_arg(Some("ONCE")), Mode::Continuous);
        assert_eq!(Mode::from_arg(Some("forever")), Mode::Continuous);
        assert_eq!(Mode::from_arg(None), Mode::Continuous);
    }

    #[test]
    fn cli_accepts_any_positional_value() {
        let cli = Cli::try_parse_from(["nudge", "whatever"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("whatever"));

        let cli = Cli::try_parse_from(["nudge"]).unwrap();
        assert!(cli.mode.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn out_of_range_interval_flag_is_rejected() {
        assert!(Cli::try_parse_from(["nudge", "--interval-minutes", "0"]).is_err());
        assert!(Cli::try_parse_from(["nudge", "--interval-minutes", "10081"]).is_err());
        let max = MAX_INTERVAL_MINUTES.to_string();
        assert!(Cli::try_parse_from(["nudge", "--interval-minutes", max.as_str()]).is_ok());
        let cli = Cli::try_parse_from(["nudge", "--interval-minutes", "5", "-v"]).unwrap();
        assert_eq!(cli.interval_minutes, Some(5));
        assert!(cli.verbose);
    }
}
