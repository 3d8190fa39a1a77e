//! Pointer sample value type.

use serde::{Deserialize, Serialize};

/// One observed pointer position in absolute page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    /// Create a sample from page coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Delta from `older` to this sample: `(self.x - older.x, self.y - older.y)`.
    ///
    /// Screen convention: positive dy is downward travel.
    pub fn delta_from(&self, older: &PointerSample) -> (f64, f64) {
        (self.x - older.x, self.y - older.y)
    }
}
