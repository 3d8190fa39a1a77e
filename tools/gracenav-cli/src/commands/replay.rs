//! Replay a recorded session through the engine.

use std::path::PathBuf;

use gracenav_common::config::MenuOptions;
use gracenav_intent_core::replay::replay;
use gracenav_menu_model::event::parse_events;
use gracenav_menu_model::transition::MarkerOp;

pub fn run(path: PathBuf, json: bool, options: MenuOptions) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Events file not found: {}", path.display()))?;
    let events =
        parse_events(&content).map_err(|e| anyhow::anyhow!("Failed to parse events: {e}"))?;

    println!("Replaying {} events from: {}", events.len(), path.display());

    let transitions = replay(&events, &options);

    if json {
        for transition in &transitions {
            println!("{}", serde_json::to_string(transition)?);
        }
    } else {
        for transition in &transitions {
            let verb = match transition.op {
                MarkerOp::Apply => "open ",
                MarkerOp::Clear => "close",
            };
            println!(
                "  {:>10.3}s  {verb}  {}",
                transition.timestamp_ns as f64 / 1_000_000_000.0,
                transition.item
            );
        }
    }

    let opens = transitions
        .iter()
        .filter(|t| t.op == MarkerOp::Apply)
        .count();
    println!(
        "\n{} transitions ({} opens, {} closes), marker \"{}\", delay {}ms",
        transitions.len(),
        opens,
        transitions.len() - opens,
        options.active_marker,
        options.delay_ms
    );

    Ok(())
}
