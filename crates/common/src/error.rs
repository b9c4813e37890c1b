//! Error types shared across nudge crates.

use std::path::PathBuf;

/// Top-level error type for nudge operations.
#[derive(Debug, thiserror::Error)]
pub enum NudgeError {
    #[error("Cursor control unavailable: {message}")]
    CursorUnavailable { message: String },

    #[error("Cursor movement failed: {message}")]
    Movement { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using NudgeError.
pub type NudgeResult<T> = Result<T, NudgeError>;

impl NudgeError {
    pub fn cursor_unavailable(msg: impl Into<String>) -> Self {
        Self::CursorUnavailable {
            message: msg.into(),
        }
    }

    pub fn movement(msg: impl Into<String>) -> Self {
        Self::Movement {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
