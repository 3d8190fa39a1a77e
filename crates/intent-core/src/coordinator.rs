//! Activation-delay coordination.
//!
//! The coordinator owns a [`MotionTracker`] and decides open/close
//! transitions for a watched set of trigger items, guaranteeing at most one
//! active item at a time.
//!
//! # Grace semantics
//!
//! Entering a trigger while another item is open and the pointer is
//! travelling rightward (toward the open submenu) does not switch
//! immediately: the entered item is pushed onto a FIFO pending queue and an
//! activation check is scheduled one grace delay later. Every enter during
//! the window schedules its own check; at fire time a check pops the queue
//! head as the authoritative target and aborts silently while the queue is
//! still non-empty, so only the final drain performs a visible transition.
//! The grace is deliberately rightward-only — leftward, vertical, or
//! ambiguous motion always switches immediately.
//!
//! Leaving the active item schedules a deactivation check that re-validates
//! at fire time: the item must still be active and the pending queue empty.
//! Scheduled checks are never cancelled; superseded ones become no-ops
//! through these re-checks.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use gracenav_common::config::MenuOptions;
use gracenav_menu_model::event::{EventKind, MenuEvent, TimestampNs, TriggerId};
use gracenav_menu_model::transition::MarkerChange;

use crate::tracker::MotionTracker;

/// A scheduled activation or deactivation check.
///
/// Ordered by `(deadline, seq)` so checks registered earlier fire first
/// when deadlines are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ScheduledCheck {
    deadline_ns: TimestampNs,
    seq: u64,
    kind: CheckKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CheckKind {
    /// Drain one queue entry; `fallback` is used only if the queue is
    /// already empty by fire time.
    Activation { fallback: TriggerId },
    /// Close `item` if it is still active and nothing is pending.
    Deactivation { item: TriggerId },
}

/// Decides open/close transitions for trigger items with grace-period
/// semantics, ensuring at most one active item.
#[derive(Debug)]
pub struct ActivationCoordinator {
    options: MenuOptions,
    tracker: MotionTracker,
    watched: HashSet<TriggerId>,
    queue: VecDeque<TriggerId>,
    current: Option<TriggerId>,
    checks: BinaryHeap<Reverse<ScheduledCheck>>,
    next_seq: u64,
}

impl ActivationCoordinator {
    /// Create a coordinator; options are normalized before use.
    pub fn new(options: MenuOptions) -> Self {
        let options = options.normalized();
        let tracker = MotionTracker::new(&options);
        Self {
            options,
            tracker,
            watched: HashSet::new(),
            queue: VecDeque::new(),
            current: None,
            checks: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create a coordinator with default options.
    pub fn with_defaults() -> Self {
        Self::new(MenuOptions::default())
    }

    /// The normalized options this coordinator runs with.
    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// Replace the watched trigger set wholesale.
    ///
    /// Events for items outside the watched set are ignored, so the swap is
    /// atomic from the coordinator's perspective. An empty set is valid.
    pub fn set_trigger_items(&mut self, items: impl IntoIterator<Item = TriggerId>) {
        self.watched = items.into_iter().collect();
        tracing::debug!(watched = self.watched.len(), "Trigger set replaced");
    }

    /// The currently active item, if any.
    pub fn active_item(&self) -> Option<TriggerId> {
        self.current
    }

    /// Number of entries awaiting activation.
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    /// Earliest scheduled check deadline, if any check is outstanding.
    pub fn next_deadline(&self) -> Option<TimestampNs> {
        self.checks.peek().map(|Reverse(check)| check.deadline_ns)
    }

    /// Read access to the owned motion tracker.
    pub fn tracker(&self) -> &MotionTracker {
        &self.tracker
    }

    /// Age out the oldest motion sample. Driven on the decay cadence.
    pub fn decay_tick(&mut self) {
        self.tracker.decay_tick();
    }

    /// Feed one collaborator event into the coordinator.
    ///
    /// Pointer moves update the motion tracker; enter/leave signals drive
    /// the activation state machine. Returns the marker changes that became
    /// visible immediately (delayed checks surface later via
    /// [`poll_due`](Self::poll_due)).
    pub fn handle_event(&mut self, event: &MenuEvent) -> Vec<MarkerChange> {
        match event.kind {
            EventKind::PointerMove { x, y } => {
                self.tracker.record_sample(x, y);
                Vec::new()
            }
            EventKind::TriggerEnter { item } => {
                if !self.watched.contains(&item) {
                    return Vec::new();
                }
                self.on_enter(item, event.timestamp_ns)
            }
            EventKind::TriggerLeave { item } => {
                if self.watched.contains(&item) {
                    self.on_leave(item, event.timestamp_ns);
                }
                Vec::new()
            }
        }
    }

    /// Fire every scheduled check whose deadline has passed, in
    /// `(deadline, schedule-order)` order. Returns visible marker changes.
    pub fn poll_due(&mut self, now_ns: TimestampNs) -> Vec<MarkerChange> {
        let mut changes = Vec::new();
        while let Some(Reverse(check)) = self.checks.peek().copied() {
            if check.deadline_ns > now_ns {
                break;
            }
            self.checks.pop();
            match check.kind {
                CheckKind::Activation { fallback } => {
                    changes.extend(self.activate(fallback));
                }
                CheckKind::Deactivation { item } => {
                    if self.current == Some(item) && self.queue.is_empty() {
                        changes.extend(self.deactivate(Some(item)));
                    }
                }
            }
        }
        changes
    }

    /// Remove the marker from the given item (or the current one) and
    /// reset the active item to none. No-op when already idle.
    pub fn deactivate(&mut self, item: Option<TriggerId>) -> Vec<MarkerChange> {
        let target = item.or(self.current);
        self.current = None;
        match target {
            Some(item) => {
                tracing::debug!(%item, "Trigger deactivated");
                vec![MarkerChange::clear(item)]
            }
            None => Vec::new(),
        }
    }

    fn on_enter(&mut self, item: TriggerId, now_ns: TimestampNs) -> Vec<MarkerChange> {
        if self.current.is_some() && self.tracker.is_going_right() {
            self.queue.push_back(item);
            self.schedule(
                now_ns + self.options.delay_ns(),
                CheckKind::Activation { fallback: item },
            );
            tracing::debug!(%item, pending = self.queue.len(), "Activation deferred");
            Vec::new()
        } else {
            self.activate(item)
        }
    }

    fn on_leave(&mut self, item: TriggerId, now_ns: TimestampNs) {
        if self.current == Some(item) {
            self.schedule(
                now_ns + self.options.delay_ns(),
                CheckKind::Deactivation { item },
            );
            tracing::debug!(%item, "Deactivation scheduled");
        }
    }

    /// Shared activation routine for the immediate and delayed paths.
    fn activate(&mut self, candidate: TriggerId) -> Vec<MarkerChange> {
        // The queue head is authoritative; a delayed check's captured item
        // only matters when nothing is pending.
        let target = self.queue.pop_front().unwrap_or(candidate);
        if !self.queue.is_empty() {
            return Vec::new();
        }

        let mut changes = Vec::new();
        if let Some(previous) = self.current.take() {
            changes.push(MarkerChange::clear(previous));
        }
        self.current = Some(target);
        changes.push(MarkerChange::apply(target));
        tracing::debug!(item = %target, "Trigger activated");
        changes
    }

    fn schedule(&mut self, deadline_ns: TimestampNs, kind: CheckKind) {
        self.checks.push(Reverse(ScheduledCheck {
            deadline_ns,
            seq: self.next_seq,
            kind,
        }));
        self.next_seq += 1;
    }
}
