//! Event source implementations.
//!
//! Each source provides a different way to feed pointer and trigger events
//! into the menu driver.

use std::collections::VecDeque;

use gracenav_common::error::GracenavResult;
use gracenav_menu_model::event::MenuEvent;

use crate::EventSource;

/// Source backed by a tokio channel.
///
/// The UI layer (or whatever owns the real pointer) holds the sender and
/// pushes events as they happen; the driver drains the receiver without
/// blocking its loop.
pub struct ChannelSource {
    receiver: tokio::sync::mpsc::UnboundedReceiver<MenuEvent>,
}

impl ChannelSource {
    /// Create a channel source, returning the sender half for the producer.
    pub fn new() -> (tokio::sync::mpsc::UnboundedSender<MenuEvent>, Self) {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (sender, Self { receiver })
    }
}

impl EventSource for ChannelSource {
    fn poll(&mut self) -> GracenavResult<Option<MenuEvent>> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(tokio::sync::mpsc::error::TryRecvError::Empty) => Ok(None),
            // A closed channel just means the producer is done; the driver
            // keeps running until its stop flag is set so outstanding
            // grace windows can still resolve.
            Err(tokio::sync::mpsc::error::TryRecvError::Disconnected) => Ok(None),
        }
    }

    fn name(&self) -> &str {
        "channel"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Stub source for testing — replays pre-loaded events.
pub struct StubSource {
    events: VecDeque<MenuEvent>,
}

impl StubSource {
    /// Create a stub source with pre-loaded events.
    pub fn new(events: Vec<MenuEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Create an empty stub that never produces events.
    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Whether every pre-loaded event has been drained.
    pub fn is_drained(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for StubSource {
    fn poll(&mut self) -> GracenavResult<Option<MenuEvent>> {
        Ok(self.events.pop_front())
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gracenav_menu_model::event::TriggerId;

    #[test]
    fn test_stub_source_drains_in_order() {
        let mut source = StubSource::new(vec![
            MenuEvent::pointer_move(0, 1.0, 2.0),
            MenuEvent::enter(1, TriggerId(7)),
        ]);
        assert!(!source.is_drained());

        let first = source.poll().unwrap().unwrap();
        assert_eq!(first.pointer_position(), Some((1.0, 2.0)));
        let second = source.poll().unwrap().unwrap();
        assert_eq!(second.trigger_item(), Some(TriggerId(7)));

        assert!(source.poll().unwrap().is_none());
        assert!(source.is_drained());
    }

    #[test]
    fn test_channel_source_delivers_and_survives_disconnect() {
        let (sender, mut source) = ChannelSource::new();
        sender.send(MenuEvent::enter(5, TriggerId(1))).unwrap();
        drop(sender);

        assert!(source.poll().unwrap().is_some());
        assert!(source.poll().unwrap().is_none());
        assert!(source.poll().unwrap().is_none());
    }
}
