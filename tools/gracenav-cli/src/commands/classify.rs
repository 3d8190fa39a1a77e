//! Classify pointer motion direction sample by sample.

use std::path::PathBuf;

use gracenav_common::config::MenuOptions;
use gracenav_intent_core::MotionTracker;
use gracenav_menu_model::event::parse_events;

pub fn run(path: PathBuf, options: MenuOptions) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Events file not found: {}", path.display()))?;
    let events =
        parse_events(&content).map_err(|e| anyhow::anyhow!("Failed to parse events: {e}"))?;

    let mut tracker = MotionTracker::new(&options);
    let decay_ns = options.decay_interval_ns();
    let mut next_decay_ns = decay_ns;
    let mut counts = [0u64; 5]; // right, left, up, down, none

    println!("Classifying pointer motion from: {}", path.display());

    for event in &events {
        while next_decay_ns <= event.timestamp_ns {
            tracker.decay_tick();
            next_decay_ns += decay_ns;
        }

        let Some((x, y)) = event.pointer_position() else {
            continue;
        };
        tracker.record_sample(x, y);

        let (dx, dy) = tracker.direction_delta();
        let label = if tracker.is_going_right() {
            counts[0] += 1;
            "right"
        } else if tracker.is_going_left() {
            counts[1] += 1;
            "left"
        } else if tracker.is_going_up() {
            counts[2] += 1;
            "up"
        } else if tracker.is_going_down() {
            counts[3] += 1;
            "down"
        } else {
            counts[4] += 1;
            "none"
        };

        println!(
            "  {:>10.3}s  ({x:>8.1}, {y:>8.1})  d=({dx:>7.1}, {dy:>7.1})  {label}",
            event.timestamp_secs()
        );
    }

    println!(
        "\nright={} left={} up={} down={} none={}",
        counts[0], counts[1], counts[2], counts[3], counts[4]
    );

    Ok(())
}
