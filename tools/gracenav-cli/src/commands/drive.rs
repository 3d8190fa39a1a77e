//! Play a recorded session through the live menu driver.
//!
//! Unlike `replay`, which steps the engine in virtual time, this feeds
//! events to a running `MenuDriver` at their recorded wall-clock offsets
//! and logs marker changes as they happen.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

use gracenav_common::config::MenuOptions;
use gracenav_intent_runtime::source::ChannelSource;
use gracenav_intent_runtime::surface::LogSurface;
use gracenav_intent_runtime::MenuDriver;
use gracenav_menu_model::event::{parse_events, TriggerId};

pub async fn run(path: PathBuf, options: MenuOptions) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Events file not found: {}", path.display()))?;
    let events =
        parse_events(&content).map_err(|e| anyhow::anyhow!("Failed to parse events: {e}"))?;
    let items: BTreeSet<TriggerId> = events.iter().filter_map(|e| e.trigger_item()).collect();

    println!(
        "Driving {} events across {} triggers from: {}",
        events.len(),
        items.len(),
        path.display()
    );

    let grace_ms = options.delay_ms as u64;
    let (sender, source) = ChannelSource::new();
    let mut driver = MenuDriver::new(options, Box::new(source), Box::new(LogSurface));
    driver
        .set_trigger_items(items.into_iter().collect())
        .map_err(|e| anyhow::anyhow!("Failed to watch triggers: {e}"))?;
    let stop = driver.stop_flag();

    let producer = tokio::spawn(async move {
        let start = tokio::time::Instant::now();
        for event in events {
            let at = start + tokio::time::Duration::from_nanos(event.timestamp_ns);
            tokio::time::sleep_until(at).await;
            if sender.send(event).is_err() {
                break;
            }
        }
    });

    let driver_task = tokio::spawn(async move {
        let handled = driver.run().await;
        (handled, driver)
    });

    producer.await?;

    // Let the trailing grace windows resolve before stopping.
    tokio::time::sleep(tokio::time::Duration::from_millis(grace_ms + 50)).await;
    stop.store(true, Ordering::SeqCst);

    let (handled, driver) = driver_task.await?;
    let handled = handled.map_err(|e| anyhow::anyhow!("Driver failed: {e}"))?;

    println!(
        "\nHandled {handled} events, {} marker changes; final active item: {}",
        driver.transitions_applied(),
        driver
            .active_item()
            .map(|item| item.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    Ok(())
}
