//! Error types shared across GraceNav crates.

use std::path::PathBuf;

/// Top-level error type for GraceNav operations.
#[derive(Debug, thiserror::Error)]
pub enum GracenavError {
    #[error("Motion tracking error: {message}")]
    Tracking { message: String },

    #[error("Coordination error: {message}")]
    Coordination { message: String },

    #[error("Event source error: {message}")]
    Source { message: String },

    #[error("Marker surface error: {message}")]
    Surface { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using GracenavError.
pub type GracenavResult<T> = Result<T, GracenavError>;

impl GracenavError {
    pub fn tracking(msg: impl Into<String>) -> Self {
        Self::Tracking {
            message: msg.into(),
        }
    }

    pub fn coordination(msg: impl Into<String>) -> Self {
        Self::Coordination {
            message: msg.into(),
        }
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
        }
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
