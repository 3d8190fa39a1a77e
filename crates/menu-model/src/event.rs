//! Menu event types for the GraceNav event stream.
//!
//! Events are recorded in append-only JSONL format. Pointer coordinates are
//! absolute page coordinates as delivered by the embedding UI layer.

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in nanoseconds since session start.
pub type TimestampNs = u64;

/// Identity of a trigger item within the watched set.
///
/// The embedding UI layer assigns ids when it binds its elements; the
/// engine only ever compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(pub u64);

impl std::fmt::Display for TriggerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "trigger#{}", self.0)
    }
}

/// A single recorded menu event with timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEvent {
    /// Monotonic nanoseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// The event payload.
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Discriminated union of menu event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Continuous pointer position update over the tracked surface.
    PointerMove {
        /// Absolute page X coordinate.
        x: f64,
        /// Absolute page Y coordinate.
        y: f64,
    },

    /// Pointer entered a trigger item.
    TriggerEnter {
        /// The item the pointer entered.
        item: TriggerId,
    },

    /// Pointer left a trigger item.
    TriggerLeave {
        /// The item the pointer left.
        item: TriggerId,
    },
}

/// Stream of events with session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at session start (ISO 8601).
    pub epoch_wall: String,
}

impl EventStreamHeader {
    /// Header for a freshly captured session.
    pub fn now() -> Self {
        Self {
            schema_version: "1.0".to_string(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl MenuEvent {
    /// Create a pointer-move event.
    pub fn pointer_move(timestamp_ns: TimestampNs, x: f64, y: f64) -> Self {
        Self {
            timestamp_ns,
            kind: EventKind::PointerMove { x, y },
        }
    }

    /// Create a trigger-enter event.
    pub fn enter(timestamp_ns: TimestampNs, item: TriggerId) -> Self {
        Self {
            timestamp_ns,
            kind: EventKind::TriggerEnter { item },
        }
    }

    /// Create a trigger-leave event.
    pub fn leave(timestamp_ns: TimestampNs, item: TriggerId) -> Self {
        Self {
            timestamp_ns,
            kind: EventKind::TriggerLeave { item },
        }
    }

    /// Timestamp as fractional seconds since session start.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ns as f64 / 1_000_000_000.0
    }

    /// Extract the pointer position if this event carries one.
    pub fn pointer_position(&self) -> Option<(f64, f64)> {
        match &self.kind {
            EventKind::PointerMove { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    /// Extract the trigger item if this event references one.
    pub fn trigger_item(&self) -> Option<TriggerId> {
        match &self.kind {
            EventKind::TriggerEnter { item } | EventKind::TriggerLeave { item } => Some(*item),
            EventKind::PointerMove { .. } => None,
        }
    }
}

/// Parse events from JSONL content (one JSON object per line).
pub fn parse_events(jsonl: &str) -> Result<Vec<MenuEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize events to JSONL format, prefixed with a header comment line.
pub fn serialize_events(
    header: &EventStreamHeader,
    events: &[MenuEvent],
) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    output.push_str("# ");
    output.push_str(&serde_json::to_string(header)?);
    output.push('\n');
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}
