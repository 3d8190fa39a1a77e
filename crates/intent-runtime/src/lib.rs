//! GraceNav Intent Runtime
//!
//! Drives the hover-intent engine against live input. Uses pluggable
//! seams so the same driver works in any embedding:
//!
//! - **Source:** where pointer and trigger events come from
//! - **Surface:** where marker changes become visible
//! - **Binding:** how trigger subscriptions attach to the embedding
//!
//! The driver loop polls the source, feeds the coordinator, fires due
//! activation/deactivation checks, and ages out motion history on the
//! decay cadence.

pub mod binding;
pub mod source;
pub mod surface;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gracenav_common::clock::{DecayCadence, SessionClock};
use gracenav_common::config::MenuOptions;
use gracenav_common::error::GracenavResult;
use gracenav_intent_core::ActivationCoordinator;
use gracenav_menu_model::event::{MenuEvent, TimestampNs, TriggerId};
use gracenav_menu_model::transition::{MarkerChange, MarkerOp};

use binding::{BindingHandle, TriggerBinding};

/// Trait for menu event sources.
pub trait EventSource: Send {
    /// Poll for the next event. Returns `None` if no event is available.
    fn poll(&mut self) -> GracenavResult<Option<MenuEvent>>;

    /// Source name for logging.
    fn name(&self) -> &str;

    /// Check if the source can deliver events in this embedding.
    fn is_available(&self) -> bool;
}

/// Trait for surfaces that realize marker changes.
pub trait MarkerSurface: Send {
    /// Make the marker visible on an item.
    fn apply_marker(
        &mut self,
        now_ns: TimestampNs,
        item: TriggerId,
        marker: &str,
    ) -> GracenavResult<()>;

    /// Remove the marker from an item.
    fn clear_marker(
        &mut self,
        now_ns: TimestampNs,
        item: TriggerId,
        marker: &str,
    ) -> GracenavResult<()>;
}

/// The menu driver that couples a coordinator to a source and a surface.
pub struct MenuDriver {
    coordinator: ActivationCoordinator,
    source: Box<dyn EventSource>,
    surface: Box<dyn MarkerSurface>,
    binding: Option<Box<dyn TriggerBinding>>,
    binding_handle: Option<BindingHandle>,
    clock: SessionClock,
    cadence: DecayCadence,
    stop_flag: Arc<AtomicBool>,
    events_handled: u64,
    transitions_applied: u64,
}

impl MenuDriver {
    /// Create a driver with no trigger binding (sources that deliver
    /// enter/leave events themselves).
    pub fn new(
        options: MenuOptions,
        source: Box<dyn EventSource>,
        surface: Box<dyn MarkerSurface>,
    ) -> Self {
        let coordinator = ActivationCoordinator::new(options);
        let cadence = DecayCadence::from_interval_ns(coordinator.options().decay_interval_ns());
        Self {
            coordinator,
            source,
            surface,
            binding: None,
            binding_handle: None,
            clock: SessionClock::start(),
            cadence,
            stop_flag: Arc::new(AtomicBool::new(false)),
            events_handled: 0,
            transitions_applied: 0,
        }
    }

    /// Attach a trigger binding. Subsequent `set_trigger_items` calls
    /// rebind subscriptions through it.
    pub fn with_binding(mut self, binding: Box<dyn TriggerBinding>) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Replace the watched trigger set wholesale.
    ///
    /// The old subscription is torn down before the new one is attached,
    /// and the coordinator stops honoring events for dropped items at the
    /// same moment.
    pub fn set_trigger_items(&mut self, items: Vec<TriggerId>) -> GracenavResult<()> {
        if let Some(binding) = self.binding.as_mut() {
            if let Some(handle) = self.binding_handle.take() {
                binding.unbind(handle)?;
            }
            self.binding_handle = Some(binding.bind(&items)?);
        }
        self.coordinator.set_trigger_items(items);
        Ok(())
    }

    /// Run the driver loop until the stop flag is set.
    pub async fn run(&mut self) -> GracenavResult<u64> {
        tracing::info!(
            source = %self.source.name(),
            marker = %self.coordinator.options().active_marker,
            "Menu driver started"
        );

        while !self.stop_flag.load(Ordering::Relaxed) {
            let did_work = self.step(self.clock.elapsed_ns())?;
            if !did_work {
                // No event available, yield briefly
                tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
            }
        }

        tracing::info!(
            events = self.events_handled,
            transitions = self.transitions_applied,
            "Menu driver stopped"
        );
        Ok(self.events_handled)
    }

    /// One pass of the driver loop at the given session time. Returns
    /// whether an event was consumed.
    pub fn step(&mut self, now_ns: TimestampNs) -> GracenavResult<bool> {
        if self.cadence.should_tick(now_ns) {
            self.coordinator.decay_tick();
        }

        let consumed = match self.source.poll() {
            Ok(Some(event)) => {
                let at = event.timestamp_ns;
                let changes = self.coordinator.handle_event(&event);
                self.events_handled += 1;
                self.realize(at, changes)?;
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, source = %self.source.name(), "Event source error");
                false
            }
        };

        let due = self.coordinator.poll_due(now_ns);
        self.realize(now_ns, due)?;

        Ok(consumed)
    }

    /// Set the stop flag.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Get the stop flag for external coordination.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// The currently active item, if any.
    pub fn active_item(&self) -> Option<TriggerId> {
        self.coordinator.active_item()
    }

    /// Number of events handled so far.
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    /// Number of marker changes pushed to the surface so far.
    pub fn transitions_applied(&self) -> u64 {
        self.transitions_applied
    }

    fn realize(&mut self, now_ns: TimestampNs, changes: Vec<MarkerChange>) -> GracenavResult<()> {
        for change in changes {
            let marker = self.coordinator.options().active_marker.clone();
            match change.op {
                MarkerOp::Apply => self.surface.apply_marker(now_ns, change.item, &marker)?,
                MarkerOp::Clear => self.surface.clear_marker(now_ns, change.item, &marker)?,
            }
            self.transitions_applied += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::FakeBinding;
    use crate::source::StubSource;
    use crate::surface::RecordingSurface;
    use gracenav_menu_model::transition::MarkerOp;

    const MS: u64 = 1_000_000;

    const A: TriggerId = TriggerId(1);
    const B: TriggerId = TriggerId(2);

    fn driver_with(events: Vec<MenuEvent>) -> (surface::TransitionLog, MenuDriver) {
        let (log, surface) = RecordingSurface::new();
        let driver = MenuDriver::new(
            MenuOptions::default(),
            Box::new(StubSource::new(events)),
            Box::new(surface),
        );
        (log, driver)
    }

    #[test]
    fn test_step_feeds_events_and_fires_due_checks() {
        let (log, mut driver) = driver_with(vec![
            MenuEvent::pointer_move(5 * MS, 0.0, 0.0),
            MenuEvent::pointer_move(10 * MS, 100.0, 0.0),
            MenuEvent::enter(20 * MS, A),
            MenuEvent::enter(30 * MS, B),
        ]);
        driver.set_trigger_items(vec![A, B]).unwrap();

        // Consume the whole stub stream.
        for now in [5 * MS, 10 * MS, 20 * MS, 30 * MS] {
            assert!(driver.step(now).unwrap());
        }
        assert_eq!(driver.active_item(), Some(A));
        assert_eq!(driver.events_handled(), 4);

        // B was queued behind rightward motion; its check is due at 530ms.
        assert!(!driver.step(520 * MS).unwrap());
        assert_eq!(driver.active_item(), Some(A));
        driver.step(530 * MS).unwrap();
        assert_eq!(driver.active_item(), Some(B));

        let transitions = log.snapshot();
        let ops: Vec<(MarkerOp, TriggerId)> =
            transitions.iter().map(|t| (t.op, t.item)).collect();
        assert_eq!(
            ops,
            vec![
                (MarkerOp::Apply, A),
                (MarkerOp::Clear, A),
                (MarkerOp::Apply, B),
            ]
        );
        assert_eq!(driver.transitions_applied(), 3);
    }

    #[test]
    fn test_unwatched_events_do_not_reach_the_surface() {
        let (log, mut driver) = driver_with(vec![MenuEvent::enter(0, A)]);
        driver.set_trigger_items(vec![B]).unwrap();

        driver.step(0).unwrap();
        assert!(log.is_empty());
        assert_eq!(driver.active_item(), None);
    }

    #[test]
    fn test_set_trigger_items_rebinds_atomically() {
        let (_, surface) = RecordingSurface::new();
        let mut driver = MenuDriver::new(
            MenuOptions::default(),
            Box::new(StubSource::empty()),
            Box::new(surface),
        )
        .with_binding(Box::new(FakeBinding::new()));

        driver.set_trigger_items(vec![A, B]).unwrap();
        driver.set_trigger_items(vec![B]).unwrap();

        // Only the latest subscription survives.
        assert!(driver.binding_handle.is_some());
    }

    #[tokio::test]
    async fn test_run_stops_on_flag() {
        let (log, mut driver) = driver_with(vec![MenuEvent::enter(0, A)]);
        driver.set_trigger_items(vec![A]).unwrap();

        let stop = driver.stop_flag();
        let handle = tokio::spawn(async move {
            let events = driver.run().await.unwrap();
            (events, driver)
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        stop.store(true, Ordering::SeqCst);
        let (events, driver) = handle.await.unwrap();

        assert_eq!(events, 1);
        assert_eq!(driver.active_item(), Some(A));
        assert_eq!(log.snapshot().len(), 1);
    }
}
