//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{NudgeError, NudgeResult};

/// Longest accepted period between traversals: one week.
pub const MAX_INTERVAL_MINUTES: u64 = 7 * 24 * 60;

/// Longest accepted value for any single motion duration.
pub const MAX_MOTION_MS: u64 = 60_000;

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Periodic schedule settings.
    pub schedule: ScheduleConfig,

    /// Cursor motion timing.
    pub motion: MotionConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// How often a traversal is started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Minutes between traversals.
    pub interval_minutes: u64,
}

/// Timing of a single traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Pause after each waypoint (ms).
    pub step_delay_ms: u64,

    /// Glide duration from one waypoint to the next (ms).
    pub step_glide_ms: u64,

    /// Glide duration to and from the anchor (ms).
    pub anchor_glide_ms: u64,

    /// Pause after reaching the anchor, before the shaft starts (ms).
    pub settle_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "nudge_activity=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 3,
        }
    }
}

impl ScheduleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.saturating_mul(60))
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 20,
            step_glide_ms: 20,
            anchor_glide_ms: 500,
            settle_ms: 500,
        }
    }
}

impl MotionConfig {
    /// Zero-length timing, for tests and dry runs.
    pub fn instant() -> Self {
        Self {
            step_delay_ms: 0,
            step_glide_ms: 0,
            anchor_glide_ms: 0,
            settle_ms: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location.
    ///
    /// A missing file yields the defaults. An unreadable or invalid file is
    /// an error; the caller decides whether to fall back.
    pub fn load() -> NudgeResult<Self> {
        Self::load_or_default(&config_file_path())
    }

    /// Like [`AppConfig::load_from`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> NudgeResult<Self> {
        if !path.exists() {
            tracing::debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> NudgeResult<Self> {
        if !path.exists() {
            return Err(NudgeError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scheduler cannot run with.
    pub fn validate(&self) -> NudgeResult<()> {
        let minutes = self.schedule.interval_minutes;
        if minutes == 0 || minutes > MAX_INTERVAL_MINUTES {
            return Err(NudgeError::config(format!(
                "schedule.interval_minutes must be in 1..={MAX_INTERVAL_MINUTES}, got {minutes}"
            )));
        }

        let motion = [
            ("step_delay_ms", self.motion.step_delay_ms),
            ("step_glide_ms", self.motion.step_glide_ms),
            ("anchor_glide_ms", self.motion.anchor_glide_ms),
            ("settle_ms", self.motion.settle_ms),
        ];
        for (name, value) in motion {
            if value > MAX_MOTION_MS {
                return Err(NudgeError::config(format!(
                    "motion.{name} must be at most {MAX_MOTION_MS}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("nudge").join("config.json")
}
