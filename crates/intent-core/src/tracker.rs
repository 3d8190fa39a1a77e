//! Motion direction tracking.
//!
//! Maintains a bounded newest-first history of pointer samples and
//! classifies the dominant direction of recent travel from the delta
//! between the newest and oldest retained sample.
//!
//! # Classification rule
//!
//! A direction along an axis is reported only when the raw delta has the
//! correct sign AND the magnitude of that delta, scaled by its axis
//! sensitivity, strictly exceeds the scaled magnitude of the other axis's
//! delta. The rule is symmetric across axes, so at most one of the four
//! directions is true at a time; a perfectly balanced diagonal satisfies
//! none of them. Screen convention: increasing y is downward.
//!
//! History ages out two ways: truncation on insert (keep the newest N) and
//! a periodic decay tick that drops the oldest sample regardless of
//! activity. An idle pointer therefore degrades to "no data" — with fewer
//! than two samples every direction query returns false.

use std::collections::VecDeque;

use gracenav_common::config::MenuOptions;
use gracenav_menu_model::PointerSample;

/// Tracks recent pointer motion and classifies its dominant direction.
#[derive(Debug)]
pub struct MotionTracker {
    /// Newest-first sample history, bounded to `history_limit`.
    history: VecDeque<PointerSample>,
    history_limit: usize,
    horizontal_sensitivity: f64,
    vertical_sensitivity: f64,
}

impl MotionTracker {
    /// Create a tracker from (normalized) menu options.
    pub fn new(options: &MenuOptions) -> Self {
        Self {
            history: VecDeque::with_capacity(options.history_limit),
            history_limit: options.history_limit,
            horizontal_sensitivity: options.horizontal_sensitivity,
            vertical_sensitivity: options.vertical_sensitivity,
        }
    }

    /// Create a tracker with default options.
    pub fn with_defaults() -> Self {
        Self::new(&MenuOptions::default())
    }

    /// Record a new pointer sample at the front of the history, then
    /// truncate to the history limit. Accepts any f64 input.
    pub fn record_sample(&mut self, x: f64, y: f64) {
        self.history.push_front(PointerSample::new(x, y));
        self.history.truncate(self.history_limit);
    }

    /// Drop the oldest retained sample, if any.
    ///
    /// Driven on a fixed cadence by the caller, independent of sampling.
    pub fn decay_tick(&mut self) {
        self.history.pop_back();
    }

    /// Delta between the newest and oldest retained sample:
    /// `(dx, dy)` with `(0.0, 0.0)` when fewer than two samples exist.
    pub fn direction_delta(&self) -> (f64, f64) {
        if self.history.len() < 2 {
            return (0.0, 0.0);
        }
        // Length checked above; front/back are distinct samples.
        let newest = self.history.front().unwrap();
        let oldest = self.history.back().unwrap();
        newest.delta_from(oldest)
    }

    /// Recent travel is dominantly rightward.
    pub fn is_going_right(&self) -> bool {
        let (dx, dy) = self.direction_delta();
        dx > 0.0 && self.horizontal_weight(dx) > self.vertical_weight(dy)
    }

    /// Recent travel is dominantly leftward.
    pub fn is_going_left(&self) -> bool {
        let (dx, dy) = self.direction_delta();
        dx < 0.0 && self.horizontal_weight(dx) > self.vertical_weight(dy)
    }

    /// Recent travel is dominantly upward (decreasing y).
    pub fn is_going_up(&self) -> bool {
        let (dx, dy) = self.direction_delta();
        dy < 0.0 && self.vertical_weight(dy) > self.horizontal_weight(dx)
    }

    /// Recent travel is dominantly downward (increasing y).
    pub fn is_going_down(&self) -> bool {
        let (dx, dy) = self.direction_delta();
        dy > 0.0 && self.vertical_weight(dy) > self.horizontal_weight(dx)
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// The most recent sample, if any.
    pub fn newest(&self) -> Option<PointerSample> {
        self.history.front().copied()
    }

    fn horizontal_weight(&self, dx: f64) -> f64 {
        dx.abs() * self.horizontal_sensitivity
    }

    fn vertical_weight(&self, dy: f64) -> f64 {
        dy.abs() * self.vertical_sensitivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker_with_limit(limit: usize) -> MotionTracker {
        MotionTracker::new(
            &MenuOptions {
                history_limit: limit,
                ..Default::default()
            }
            .normalized(),
        )
    }

    #[test]
    fn test_history_bounded_and_newest_first() {
        let mut tracker = tracker_with_limit(3);
        for i in 0..10 {
            tracker.record_sample(i as f64, 0.0);
        }
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.newest(), Some(PointerSample::new(9.0, 0.0)));
    }

    #[test]
    fn test_fewer_than_two_samples_yields_no_direction() {
        let mut tracker = MotionTracker::with_defaults();
        assert_eq!(tracker.direction_delta(), (0.0, 0.0));
        assert!(!tracker.is_going_right());
        assert!(!tracker.is_going_left());
        assert!(!tracker.is_going_up());
        assert!(!tracker.is_going_down());

        tracker.record_sample(100.0, 50.0);
        assert_eq!(tracker.direction_delta(), (0.0, 0.0));
        assert!(!tracker.is_going_right());
        assert!(!tracker.is_going_left());
        assert!(!tracker.is_going_up());
        assert!(!tracker.is_going_down());
    }

    #[test]
    fn test_rightward_sweep() {
        let mut tracker = MotionTracker::with_defaults();
        tracker.record_sample(0.0, 0.0);
        tracker.record_sample(100.0, 0.0);
        assert_eq!(tracker.direction_delta(), (100.0, 0.0));
        assert!(tracker.is_going_right());
        assert!(!tracker.is_going_left());
        assert!(!tracker.is_going_up());
        assert!(!tracker.is_going_down());
    }

    #[test]
    fn test_leftward_sweep() {
        let mut tracker = MotionTracker::with_defaults();
        tracker.record_sample(100.0, 0.0);
        tracker.record_sample(0.0, 0.0);
        assert!(tracker.is_going_left());
        assert!(!tracker.is_going_right());
    }

    #[test]
    fn test_vertical_sign_convention() {
        let mut tracker = MotionTracker::with_defaults();
        tracker.record_sample(0.0, 0.0);
        tracker.record_sample(0.0, 80.0); // y grows downward
        assert!(tracker.is_going_down());
        assert!(!tracker.is_going_up());

        let mut tracker = MotionTracker::with_defaults();
        tracker.record_sample(0.0, 80.0);
        tracker.record_sample(0.0, 0.0);
        assert!(tracker.is_going_up());
        assert!(!tracker.is_going_down());
    }

    #[test]
    fn test_balanced_diagonal_satisfies_no_direction() {
        let mut tracker = MotionTracker::with_defaults();
        tracker.record_sample(0.0, 0.0);
        tracker.record_sample(50.0, 50.0);
        assert!(!tracker.is_going_right());
        assert!(!tracker.is_going_left());
        assert!(!tracker.is_going_up());
        assert!(!tracker.is_going_down());
    }

    #[test]
    fn test_sensitivity_tips_the_balance() {
        let options = MenuOptions {
            horizontal_sensitivity: 2.0,
            ..Default::default()
        }
        .normalized();
        let mut tracker = MotionTracker::new(&options);
        tracker.record_sample(0.0, 0.0);
        tracker.record_sample(50.0, 50.0);
        // 50 * 2.0 > 50 * 1.0, so the diagonal now reads as rightward.
        assert!(tracker.is_going_right());
        assert!(!tracker.is_going_down());
    }

    #[test]
    fn test_decay_empties_history_and_disables_classification() {
        let mut tracker = MotionTracker::with_defaults();
        tracker.record_sample(0.0, 0.0);
        tracker.record_sample(100.0, 0.0);
        assert!(tracker.is_going_right());

        tracker.decay_tick();
        assert_eq!(tracker.len(), 1);
        assert!(!tracker.is_going_right());

        tracker.decay_tick();
        assert!(tracker.is_empty());
        tracker.decay_tick(); // no-op on empty history
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_non_finite_samples_never_classify() {
        let mut tracker = MotionTracker::with_defaults();
        tracker.record_sample(f64::NAN, 0.0);
        tracker.record_sample(100.0, f64::NAN);
        assert!(!tracker.is_going_right());
        assert!(!tracker.is_going_left());
        assert!(!tracker.is_going_up());
        assert!(!tracker.is_going_down());
    }

    proptest! {
        #[test]
        fn prop_history_never_exceeds_limit(
            samples in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..64),
            limit in 1usize..16,
        ) {
            let mut tracker = tracker_with_limit(limit);
            for (x, y) in samples {
                tracker.record_sample(x, y);
                prop_assert!(tracker.len() <= limit);
            }
        }

        #[test]
        fn prop_at_most_one_direction(
            samples in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..32),
        ) {
            let mut tracker = MotionTracker::with_defaults();
            for (x, y) in samples {
                tracker.record_sample(x, y);
                let truths = [
                    tracker.is_going_right(),
                    tracker.is_going_left(),
                    tracker.is_going_up(),
                    tracker.is_going_down(),
                ];
                prop_assert!(truths.iter().filter(|t| **t).count() <= 1);
            }
        }
    }
}
