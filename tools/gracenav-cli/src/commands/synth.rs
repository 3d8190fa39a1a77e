//! Write a synthetic rightward-crossing session.
//!
//! The generated stream sweeps the pointer rightward across `items`
//! horizontally adjacent triggers, entering each in turn. Replaying it
//! shows the grace window in action: every intermediate trigger is
//! queued and skipped, and only the last one opens.

use std::path::PathBuf;

use gracenav_menu_model::event::{
    serialize_events, EventStreamHeader, MenuEvent, TriggerId,
};

const MS: u64 = 1_000_000;
const ITEM_WIDTH: f64 = 120.0;

pub fn run(path: PathBuf, items: u64, spacing_ms: u64) -> anyhow::Result<()> {
    if items == 0 {
        return Err(anyhow::anyhow!("need at least one trigger item"));
    }
    if spacing_ms == 0 {
        return Err(anyhow::anyhow!("spacing must be at least 1ms"));
    }

    let mut events = Vec::new();
    for i in 0..items {
        let t = (i + 1) * spacing_ms * MS;
        // A pointer sample just before each enter keeps the motion
        // history reading as rightward travel.
        events.push(MenuEvent::pointer_move(t - MS, (i as f64) * ITEM_WIDTH, 40.0));
        events.push(MenuEvent::enter(t, TriggerId(i + 1)));
    }
    let last = items * spacing_ms * MS;
    events.push(MenuEvent::leave(last + 200 * MS, TriggerId(items)));

    let jsonl = serialize_events(&EventStreamHeader::now(), &events)
        .map_err(|e| anyhow::anyhow!("Failed to serialize events: {e}"))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, jsonl)?;

    println!(
        "Wrote {} events ({items} triggers, {spacing_ms}ms spacing) to: {}",
        events.len(),
        path.display()
    );

    Ok(())
}
