//! Marker surface implementations.
//!
//! A surface is where activation state becomes visible: a DOM-like widget
//! tree in a real embedding, a log stream or an in-memory transition list
//! here.

use std::sync::{Arc, Mutex};

use gracenav_common::error::GracenavResult;
use gracenav_menu_model::event::{TimestampNs, TriggerId};
use gracenav_menu_model::transition::{MarkerChange, Transition};

use crate::MarkerSurface;

/// Surface that logs marker changes via tracing. Useful as a default when
/// no real widget tree is attached.
pub struct LogSurface;

impl MarkerSurface for LogSurface {
    fn apply_marker(
        &mut self,
        now_ns: TimestampNs,
        item: TriggerId,
        marker: &str,
    ) -> GracenavResult<()> {
        tracing::info!(t_ns = now_ns, item = %item, marker = %marker, "marker applied");
        Ok(())
    }

    fn clear_marker(
        &mut self,
        now_ns: TimestampNs,
        item: TriggerId,
        marker: &str,
    ) -> GracenavResult<()> {
        tracing::info!(t_ns = now_ns, item = %item, marker = %marker, "marker cleared");
        Ok(())
    }
}

/// Surface that records every transition into a shared log.
///
/// Tests hold a [`TransitionLog`] handle and inspect it after driving the
/// loop; the driver owns the surface itself.
pub struct RecordingSurface {
    log: TransitionLog,
}

/// Shared handle onto the transitions a [`RecordingSurface`] has seen.
#[derive(Clone, Default)]
pub struct TransitionLog {
    entries: Arc<Mutex<Vec<Transition>>>,
}

impl TransitionLog {
    /// Snapshot of all recorded transitions.
    pub fn snapshot(&self) -> Vec<Transition> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, transition: Transition) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(transition);
        }
    }
}

impl RecordingSurface {
    /// Create a recording surface and the log handle to inspect it with.
    pub fn new() -> (TransitionLog, Self) {
        let log = TransitionLog::default();
        (log.clone(), Self { log })
    }
}

impl MarkerSurface for RecordingSurface {
    fn apply_marker(
        &mut self,
        now_ns: TimestampNs,
        item: TriggerId,
        _marker: &str,
    ) -> GracenavResult<()> {
        self.log
            .push(Transition::at(now_ns, MarkerChange::apply(item)));
        Ok(())
    }

    fn clear_marker(
        &mut self,
        now_ns: TimestampNs,
        item: TriggerId,
        _marker: &str,
    ) -> GracenavResult<()> {
        self.log
            .push(Transition::at(now_ns, MarkerChange::clear(item)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gracenav_menu_model::transition::MarkerOp;

    #[test]
    fn test_recording_surface_captures_both_ops() {
        let (log, mut surface) = RecordingSurface::new();
        surface.apply_marker(100, TriggerId(1), "open").unwrap();
        surface.clear_marker(200, TriggerId(1), "open").unwrap();

        let transitions = log.snapshot();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].op, MarkerOp::Apply);
        assert_eq!(transitions[0].timestamp_ns, 100);
        assert_eq!(transitions[1].op, MarkerOp::Clear);
        assert_eq!(transitions[1].item, TriggerId(1));
    }

    #[test]
    fn test_log_handle_is_shared() {
        let (log, mut surface) = RecordingSurface::new();
        assert!(log.is_empty());
        surface.apply_marker(0, TriggerId(2), "open").unwrap();
        assert_eq!(log.len(), 1);
    }
}
