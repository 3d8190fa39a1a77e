//! Trigger binding — the subscribe/unsubscribe seam toward the embedding.
//!
//! When the watched trigger set is replaced, the driver unbinds the old
//! handle and binds the new set in one step, so the embedding never
//! observes a half-updated subscription.

use gracenav_common::error::GracenavResult;
use gracenav_menu_model::event::TriggerId;

/// Opaque token for an active trigger subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingHandle(u64);

/// Attaches enter/leave delivery for a set of trigger items in the
/// embedding (event listeners on menu nodes, or nothing at all for
/// replayed streams).
pub trait TriggerBinding: Send {
    /// Subscribe to enter/leave events for the given items.
    fn bind(&mut self, items: &[TriggerId]) -> GracenavResult<BindingHandle>;

    /// Tear down a previous subscription.
    fn unbind(&mut self, handle: BindingHandle) -> GracenavResult<()>;
}

/// In-memory binding for tests — tracks which items are currently bound.
#[derive(Default)]
pub struct FakeBinding {
    bound: Vec<(BindingHandle, Vec<TriggerId>)>,
    next_handle: u64,
}

impl FakeBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items covered by live subscriptions.
    pub fn bound_items(&self) -> Vec<TriggerId> {
        self.bound
            .iter()
            .flat_map(|(_, items)| items.iter().copied())
            .collect()
    }

    /// Number of live subscriptions.
    pub fn active_bindings(&self) -> usize {
        self.bound.len()
    }
}

impl TriggerBinding for FakeBinding {
    fn bind(&mut self, items: &[TriggerId]) -> GracenavResult<BindingHandle> {
        let handle = BindingHandle(self.next_handle);
        self.next_handle += 1;
        self.bound.push((handle, items.to_vec()));
        Ok(handle)
    }

    fn unbind(&mut self, handle: BindingHandle) -> GracenavResult<()> {
        self.bound.retain(|(h, _)| *h != handle);
        Ok(())
    }
}
