//! Logging and tracing initialization.
//!
//! Status lines for the user are printed to stdout by the CLI. Tracing
//! output goes to stderr.

use crate::config::LoggingConfig;

impl LoggingConfig {
    /// Force the `debug` filter when verbose output was requested.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = "debug".to_string();
        }
        self
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `false` when a
/// subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    installed.is_ok()
}
