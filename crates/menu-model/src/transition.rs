//! Marker transitions produced by the activation coordinator.

use serde::{Deserialize, Serialize};

use crate::event::{TimestampNs, TriggerId};

/// Direction of a marker change on a trigger item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerOp {
    /// The item became active and received the marker.
    Apply,
    /// The marker was removed from the item.
    Clear,
}

/// A marker change on a specific trigger item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerChange {
    /// The affected item.
    pub item: TriggerId,
    /// Whether the marker was applied or cleared.
    pub op: MarkerOp,
}

impl MarkerChange {
    pub fn apply(item: TriggerId) -> Self {
        Self {
            item,
            op: MarkerOp::Apply,
        }
    }

    pub fn clear(item: TriggerId) -> Self {
        Self {
            item,
            op: MarkerOp::Clear,
        }
    }
}

/// A timestamped marker change, as produced by deterministic replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// When the change became visible (ns since session start).
    pub timestamp_ns: TimestampNs,
    /// The affected item.
    pub item: TriggerId,
    /// Whether the marker was applied or cleared.
    pub op: MarkerOp,
}

impl Transition {
    /// Attach a timestamp to a marker change.
    pub fn at(timestamp_ns: TimestampNs, change: MarkerChange) -> Self {
        Self {
            timestamp_ns,
            item: change.item,
            op: change.op,
        }
    }
}
