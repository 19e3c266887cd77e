// SPDX-License-Identifier: MPL-2.0
//! Metric count-up animation for solution cards.

use crate::config::COUNTER_DURATION_MS;
use std::time::{Duration, Instant};

/// Counts from zero up to a target value with an ease-out curve.
///
/// The counter is pure state: the view reads `value_at(now)` on every tick
/// and renders the current number, so there is nothing to cancel when the
/// card loses hover; the counter is simply dropped.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    target: u32,
    started_at: Instant,
    duration: Duration,
}

impl AnimatedCounter {
    #[must_use]
    pub fn new(target: u32, now: Instant) -> Self {
        Self {
            target,
            started_at: now,
            duration: Duration::from_millis(COUNTER_DURATION_MS),
        }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Current displayed value. Reaches the target exactly at the end of the
    /// animation and stays there.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        #[allow(clippy::cast_sign_loss)]
        let value = (self.target as f32 * eased).round() as u32;
        value.min(self.target)
    }

    /// Whether the animation still needs ticks.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < self.duration
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let now = Instant::now();
        let counter = AnimatedCounter::new(400, now);
        assert_eq!(counter.value_at(now), 0);
        assert!(counter.is_animating(now));
    }

    #[test]
    fn reaches_target_at_end() {
        let now = Instant::now();
        let counter = AnimatedCounter::new(400, now);
        let end = now + Duration::from_millis(COUNTER_DURATION_MS);
        assert_eq!(counter.value_at(end), 400);
        assert!(!counter.is_animating(end));
    }

    #[test]
    fn holds_target_after_end() {
        let now = Instant::now();
        let counter = AnimatedCounter::new(250, now);
        let later = now + Duration::from_secs(10);
        assert_eq!(counter.value_at(later), 250);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let now = Instant::now();
        let counter = AnimatedCounter::new(1000, now);
        let halfway = now + Duration::from_millis(COUNTER_DURATION_MS / 2);
        // Ease-out passes the linear midpoint well before half time.
        assert!(counter.value_at(halfway) > 500);
    }

    #[test]
    fn value_is_monotonic() {
        let now = Instant::now();
        let counter = AnimatedCounter::new(400, now);
        let mut last = 0;
        for ms in (0..=COUNTER_DURATION_MS).step_by(50) {
            let value = counter.value_at(now + Duration::from_millis(ms));
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 400);
    }
}
