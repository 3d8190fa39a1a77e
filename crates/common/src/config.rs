//! Menu engine options and normalization.
//!
//! Invalid option values are never a runtime fault: anything non-finite or
//! non-positive falls back to the documented default during normalization,
//! before the engine ever sees it.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GracenavError, GracenavResult};

/// Default activation/deactivation delay in milliseconds.
pub const DEFAULT_DELAY_MS: f64 = 500.0;

/// Default marker applied to the active trigger item.
pub const DEFAULT_ACTIVE_MARKER: &str = "open";

/// Default bound on the motion history length.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default axis sensitivity.
pub const DEFAULT_SENSITIVITY: f64 = 1.0;

/// Default cadence for aging out the oldest motion sample, in milliseconds.
pub const DEFAULT_DECAY_INTERVAL_MS: f64 = 60.0;

/// Options for a hover-intent menu coordinator and its motion tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuOptions {
    /// Grace delay before a queued activation or scheduled deactivation
    /// check fires (milliseconds).
    pub delay_ms: f64,

    /// Marker attribute toggled on the active trigger item.
    pub active_marker: String,

    /// Maximum number of retained pointer samples.
    pub history_limit: usize,

    /// Weight applied to horizontal motion when classifying direction.
    pub horizontal_sensitivity: f64,

    /// Weight applied to vertical motion when classifying direction.
    pub vertical_sensitivity: f64,

    /// Interval between history-decay ticks (milliseconds).
    pub decay_interval_ms: f64,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            active_marker: DEFAULT_ACTIVE_MARKER.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            horizontal_sensitivity: DEFAULT_SENSITIVITY,
            vertical_sensitivity: DEFAULT_SENSITIVITY,
            decay_interval_ms: DEFAULT_DECAY_INTERVAL_MS,
        }
    }
}

impl MenuOptions {
    /// Replace invalid values with their documented defaults.
    ///
    /// Non-finite or non-positive delays, sensitivities, and decay
    /// intervals, a zero history limit, and an empty marker name all
    /// normalize to defaults.
    pub fn normalized(mut self) -> Self {
        if !self.delay_ms.is_finite() || self.delay_ms <= 0.0 {
            self.delay_ms = DEFAULT_DELAY_MS;
        }
        if self.active_marker.is_empty() {
            self.active_marker = DEFAULT_ACTIVE_MARKER.to_string();
        }
        if self.history_limit == 0 {
            self.history_limit = DEFAULT_HISTORY_LIMIT;
        }
        if !self.horizontal_sensitivity.is_finite() || self.horizontal_sensitivity <= 0.0 {
            self.horizontal_sensitivity = DEFAULT_SENSITIVITY;
        }
        if !self.vertical_sensitivity.is_finite() || self.vertical_sensitivity <= 0.0 {
            self.vertical_sensitivity = DEFAULT_SENSITIVITY;
        }
        if !self.decay_interval_ms.is_finite() || self.decay_interval_ms <= 0.0 {
            self.decay_interval_ms = DEFAULT_DECAY_INTERVAL_MS;
        }
        self
    }

    /// Grace delay in nanoseconds.
    pub fn delay_ns(&self) -> u64 {
        (self.delay_ms * 1_000_000.0) as u64
    }

    /// Decay interval in nanoseconds.
    pub fn decay_interval_ns(&self) -> u64 {
        (self.decay_interval_ms * 1_000_000.0) as u64
    }

    /// Load options from a JSON file, normalizing after parse.
    pub fn load(path: &Path) -> GracenavResult<Self> {
        if !path.exists() {
            return Err(GracenavError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&content)?;
        Ok(options.normalized())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gracenav=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
