//! Deterministic replay of recorded menu sessions.
//!
//! Steps a coordinator through an event stream in virtual time: history
//! decay ticks and scheduled activation/deactivation checks fire at their
//! exact virtual deadlines, interleaved in timestamp order with the
//! events themselves. After the last event, outstanding checks are drained
//! so every grace window resolves. The same stream and options always
//! produce the same transitions.

use std::collections::BTreeSet;

use gracenav_common::config::MenuOptions;
use gracenav_menu_model::event::{MenuEvent, TimestampNs, TriggerId};
use gracenav_menu_model::transition::Transition;

use crate::coordinator::ActivationCoordinator;

/// Replay an event stream, watching every trigger item the stream mentions.
pub fn replay(events: &[MenuEvent], options: &MenuOptions) -> Vec<Transition> {
    let items: BTreeSet<TriggerId> = events.iter().filter_map(|e| e.trigger_item()).collect();
    replay_with_items(events, options, items)
}

/// Replay an event stream against an explicit watched trigger set.
pub fn replay_with_items(
    events: &[MenuEvent],
    options: &MenuOptions,
    items: impl IntoIterator<Item = TriggerId>,
) -> Vec<Transition> {
    let mut coordinator = ActivationCoordinator::new(options.clone());
    coordinator.set_trigger_items(items);

    let decay_ns = coordinator.options().decay_interval_ns();
    let mut next_decay_ns = decay_ns;
    let mut transitions = Vec::new();

    for event in events {
        advance(
            &mut coordinator,
            event.timestamp_ns,
            &mut next_decay_ns,
            decay_ns,
            &mut transitions,
        );
        for change in coordinator.handle_event(event) {
            transitions.push(Transition::at(event.timestamp_ns, change));
        }
    }

    // Drain checks still outstanding after the stream ends.
    while let Some(deadline) = coordinator.next_deadline() {
        advance(
            &mut coordinator,
            deadline,
            &mut next_decay_ns,
            decay_ns,
            &mut transitions,
        );
    }

    transitions
}

/// Advance virtual time to `target_ns`, firing decay ticks and due checks
/// in deadline order. Decay wins ties, matching an interval registered
/// before any check was scheduled.
fn advance(
    coordinator: &mut ActivationCoordinator,
    target_ns: TimestampNs,
    next_decay_ns: &mut TimestampNs,
    decay_ns: u64,
    transitions: &mut Vec<Transition>,
) {
    loop {
        let check_due = coordinator.next_deadline().filter(|d| *d <= target_ns);
        let decay_due = (*next_decay_ns <= target_ns).then_some(*next_decay_ns);

        match (decay_due, check_due) {
            (Some(decay_at), check) if check.map_or(true, |c| decay_at <= c) => {
                coordinator.decay_tick();
                *next_decay_ns += decay_ns;
            }
            (_, Some(deadline)) => {
                for change in coordinator.poll_due(deadline) {
                    transitions.push(Transition::at(deadline, change));
                }
            }
            // `(Some(_), None)` always matches the first arm (its guard is
            // true when `check` is `None`), so only `(None, None)` reaches
            // this wildcard.
            _ => break,
        }
    }
}
