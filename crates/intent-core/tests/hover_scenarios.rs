//! End-to-end hover-intent scenarios run through the deterministic replayer.

use gracenav_common::config::MenuOptions;
use gracenav_intent_core::replay::replay;
use gracenav_menu_model::event::{MenuEvent, TriggerId};
use gracenav_menu_model::transition::{MarkerChange, MarkerOp, Transition};

const MS: u64 = 1_000_000;

const A: TriggerId = TriggerId(1);
const B: TriggerId = TriggerId(2);
const C: TriggerId = TriggerId(3);
const D: TriggerId = TriggerId(4);

/// A pair of pointer moves sweeping right just before `t`.
fn rightward_sweep(events: &mut Vec<MenuEvent>, t: u64) {
    events.push(MenuEvent::pointer_move(t.saturating_sub(2 * MS), 0.0, 0.0));
    events.push(MenuEvent::pointer_move(t.saturating_sub(MS), 200.0, 0.0));
}

/// Items that ever carried the marker, in order of activation.
fn activations(transitions: &[Transition]) -> Vec<TriggerId> {
    transitions
        .iter()
        .filter(|t| t.op == MarkerOp::Apply)
        .map(|t| t.item)
        .collect()
}

#[test]
fn crossing_adjacent_triggers_rightward_keeps_the_open_item_until_the_grace_elapses() {
    let mut events = vec![MenuEvent::enter(10 * MS, A)];
    rightward_sweep(&mut events, 50 * MS);
    events.push(MenuEvent::enter(50 * MS, B));

    let transitions = replay(&events, &MenuOptions::default());

    assert_eq!(
        transitions,
        vec![
            Transition::at(10 * MS, MarkerChange::apply(A)),
            Transition::at(550 * MS, MarkerChange::clear(A)),
            Transition::at(550 * MS, MarkerChange::apply(B)),
        ]
    );
}

#[test]
fn rapid_rightward_crossing_over_three_triggers_lands_on_the_last_one() {
    let mut events = vec![MenuEvent::enter(10 * MS, A)];
    rightward_sweep(&mut events, 42 * MS);
    events.push(MenuEvent::enter(42 * MS, B));
    events.push(MenuEvent::enter(44 * MS, C));
    events.push(MenuEvent::enter(46 * MS, D));

    let transitions = replay(&events, &MenuOptions::default());

    // Three checks fire; the first two drain B and C silently. Only the
    // final drain is visible and it activates the last-enqueued item.
    assert_eq!(activations(&transitions), vec![A, D]);
    assert_eq!(
        transitions.last(),
        Some(&Transition::at(546 * MS, MarkerChange::apply(D)))
    );
}

#[test]
fn ambiguous_motion_switches_immediately() {
    // A perfectly balanced diagonal classifies as no direction at all.
    let events = vec![
        MenuEvent::enter(10 * MS, A),
        MenuEvent::pointer_move(48 * MS, 0.0, 0.0),
        MenuEvent::pointer_move(49 * MS, 120.0, 120.0),
        MenuEvent::enter(50 * MS, B),
    ];

    let transitions = replay(&events, &MenuOptions::default());

    assert_eq!(
        &transitions[1..],
        &[
            Transition::at(50 * MS, MarkerChange::clear(A)),
            Transition::at(50 * MS, MarkerChange::apply(B)),
        ]
    );
}

#[test]
fn reentering_the_same_item_does_not_cancel_the_scheduled_close() {
    let events = vec![
        MenuEvent::enter(10 * MS, A),
        MenuEvent::leave(100 * MS, A),
        // Re-entering A resolves immediately to A again, but the check
        // scheduled by the leave still finds A active with an empty queue
        // at fire time and closes it. Only a non-empty pending queue
        // suppresses a scheduled deactivation.
        MenuEvent::enter(200 * MS, A),
        MenuEvent::leave(900 * MS, A),
    ];

    let transitions = replay(&events, &MenuOptions::default());

    assert_eq!(activations(&transitions), vec![A, A]);
    assert_eq!(
        transitions.last(),
        Some(&Transition::at(600 * MS, MarkerChange::clear(A)))
    );

    // A is already closed by the time the second leave arrives, so that
    // leave schedules nothing.
    assert_eq!(transitions.len(), 4);
}

#[test]
fn queued_activation_suppresses_a_scheduled_deactivation() {
    let mut events = vec![
        MenuEvent::enter(10 * MS, A),
        MenuEvent::leave(100 * MS, A),
    ];
    rightward_sweep(&mut events, 550 * MS);
    events.push(MenuEvent::enter(550 * MS, B));

    let transitions = replay(&events, &MenuOptions::default());

    // The deactivation check at 600ms finds B pending and does nothing;
    // the activation check at 1050ms performs the swap instead. At no
    // point is the menu left with nothing open.
    assert_eq!(
        transitions,
        vec![
            Transition::at(10 * MS, MarkerChange::apply(A)),
            Transition::at(1050 * MS, MarkerChange::clear(A)),
            Transition::at(1050 * MS, MarkerChange::apply(B)),
        ]
    );
}

#[test]
fn at_most_one_item_is_active_at_all_times() {
    let mut events = vec![MenuEvent::enter(10 * MS, A)];
    rightward_sweep(&mut events, 50 * MS);
    events.push(MenuEvent::enter(50 * MS, B));
    events.push(MenuEvent::leave(60 * MS, A));
    events.push(MenuEvent::enter(600 * MS, C));
    events.push(MenuEvent::leave(800 * MS, C));

    let transitions = replay(&events, &MenuOptions::default());

    let mut open: Option<TriggerId> = None;
    for transition in &transitions {
        match transition.op {
            MarkerOp::Apply => {
                assert!(open.is_none(), "two items open at once: {transitions:?}");
                open = Some(transition.item);
            }
            MarkerOp::Clear => {
                open = None;
            }
        }
    }
}

#[test]
fn custom_delay_shifts_every_deadline() {
    let options = MenuOptions {
        delay_ms: 100.0,
        ..Default::default()
    }
    .normalized();

    let mut events = vec![MenuEvent::enter(10 * MS, A)];
    rightward_sweep(&mut events, 50 * MS);
    events.push(MenuEvent::enter(50 * MS, B));

    let transitions = replay(&events, &options);

    assert_eq!(
        transitions.last(),
        Some(&Transition::at(150 * MS, MarkerChange::apply(B)))
    );
}
