// SPDX-License-Identifier: MPL-2.0
//! Animated scalar values.
//!
//! The reconciler drives toast offsets through the [`Animator`] trait instead
//! of talking to a rendering library directly. [`Timeline`] is the built-in
//! implementation: a deterministic, virtual-time animator that only moves when
//! it is advanced, so the same sequence of calls always yields the same frames.
//!
//! Cancelled animations never report completion. Only an animation that runs
//! to its end shows up in the list returned by [`Animator::advance_to`].

mod spring;

pub use spring::SpringConfig;

use std::collections::HashMap;
use std::time::Duration;

/// Handle to an animatable value owned by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueId(u64);

/// Handle to one running animation, reported back when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// Animation capability consumed by the reconciler.
pub trait Animator {
    /// Creates a value at rest.
    fn create(&mut self, initial: f32) -> ValueId;

    /// Current value, or `None` if the value was removed.
    fn value(&self, id: ValueId) -> Option<f32>;

    /// Jumps to `value`, cancelling any running animation on it.
    fn set_value(&mut self, id: ValueId, value: f32);

    /// Eases from the current value to `to` over `duration`.
    fn timing(&mut self, id: ValueId, to: f32, duration: Duration) -> AnimationHandle;

    /// Springs from the current value to `to`.
    fn spring(&mut self, id: ValueId, to: f32, config: SpringConfig) -> AnimationHandle;

    /// Stops any running animation on `id`, leaving the value where it is.
    fn cancel(&mut self, id: ValueId);

    /// Drops the value and anything running on it.
    fn remove(&mut self, id: ValueId);

    /// Moves time forward and returns the animations that finished, in
    /// completion order.
    fn advance_to(&mut self, now: Duration) -> Vec<AnimationHandle>;

    /// Earliest pending completion, if any animation is running.
    fn next_deadline(&self) -> Option<Duration>;

    /// Current virtual time.
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
enum Curve {
    EaseInOut,
    Spring(SpringConfig),
}

#[derive(Debug, Clone, Copy)]
struct Running {
    handle: AnimationHandle,
    from: f32,
    to: f32,
    start: Duration,
    end: Duration,
    curve: Curve,
}

impl Running {
    fn sample(&self, now: Duration) -> f32 {
        if now >= self.end {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.start);
        match self.curve {
            Curve::EaseInOut => {
                let total = (self.end - self.start).as_secs_f32();
                let progress = if total > 0.0 {
                    (elapsed.as_secs_f32() / total).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                self.from + (self.to - self.from) * ease_in_out(progress)
            }
            Curve::Spring(config) => self.to + config.displacement(self.from - self.to, elapsed),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Track {
    value: f32,
    running: Option<Running>,
}

/// Deterministic virtual-time [`Animator`].
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_value: u64,
    next_handle: u64,
    tracks: HashMap<ValueId, Track>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether any value is currently animating.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.tracks.values().any(|track| track.running.is_some())
    }

    /// Returns the number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn start(&mut self, id: ValueId, to: f32, duration: Duration, curve: Curve) -> AnimationHandle {
        self.next_handle += 1;
        let handle = AnimationHandle(self.next_handle);
        let now = self.now;
        if let Some(track) = self.tracks.get_mut(&id) {
            track.running = Some(Running {
                handle,
                from: track.value,
                to,
                start: now,
                end: now + duration,
                curve,
            });
        }
        handle
    }
}

impl Animator for Timeline {
    fn create(&mut self, initial: f32) -> ValueId {
        self.next_value += 1;
        let id = ValueId(self.next_value);
        self.tracks.insert(
            id,
            Track {
                value: initial,
                running: None,
            },
        );
        id
    }

    fn value(&self, id: ValueId) -> Option<f32> {
        self.tracks.get(&id).map(|track| track.value)
    }

    fn set_value(&mut self, id: ValueId, value: f32) {
        if let Some(track) = self.tracks.get_mut(&id) {
            track.value = value;
            track.running = None;
        }
    }

    fn timing(&mut self, id: ValueId, to: f32, duration: Duration) -> AnimationHandle {
        self.start(id, to, duration, Curve::EaseInOut)
    }

    fn spring(&mut self, id: ValueId, to: f32, config: SpringConfig) -> AnimationHandle {
        let from = self.value(id).unwrap_or(to);
        let settle = config.settle_time(from - to);
        self.start(id, to, settle, Curve::Spring(config))
    }

    fn cancel(&mut self, id: ValueId) {
        if let Some(track) = self.tracks.get_mut(&id) {
            track.running = None;
        }
    }

    fn remove(&mut self, id: ValueId) {
        self.tracks.remove(&id);
    }

    fn advance_to(&mut self, now: Duration) -> Vec<AnimationHandle> {
        if now < self.now {
            return Vec::new();
        }
        self.now = now;

        let mut finished: Vec<(Duration, AnimationHandle)> = Vec::new();
        for track in self.tracks.values_mut() {
            let Some(running) = track.running else {
                continue;
            };
            track.value = running.sample(now);
            if running.end <= now {
                track.running = None;
                finished.push((running.end, running.handle));
            }
        }
        finished.sort_by_key(|(end, handle)| (*end, handle.0));
        finished.into_iter().map(|(_, handle)| handle).collect()
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.tracks
            .values()
            .filter_map(|track| track.running.map(|running| running.end))
            .min()
    }

    fn now(&self) -> Duration {
        self.now
    }
}

/// Cubic ease-in-out on `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timing_interpolates_and_completes() {
        let mut timeline = Timeline::new();
        let x = timeline.create(390.0);
        let handle = timeline.timing(x, 0.0, ms(200));

        assert!(timeline.advance_to(ms(100)).is_empty());
        assert_abs_diff_eq!(timeline.value(x).unwrap_or(f32::NAN), 195.0, epsilon = 0.01);

        assert_eq!(timeline.advance_to(ms(200)), vec![handle]);
        assert_abs_diff_eq!(timeline.value(x).unwrap_or(f32::NAN), 0.0, epsilon = F32_EPSILON);
        assert!(!timeline.is_busy());
    }

    #[test]
    fn easing_is_symmetric() {
        assert_abs_diff_eq!(ease_in_out(0.0), 0.0);
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5);
        assert_abs_diff_eq!(ease_in_out(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out(0.25) + ease_in_out(0.75), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn cancelled_animation_never_completes() {
        let mut timeline = Timeline::new();
        let x = timeline.create(0.0);
        let _ = timeline.timing(x, 100.0, ms(200));
        timeline.advance_to(ms(50));
        let frozen = timeline.value(x);

        timeline.cancel(x);
        assert!(timeline.advance_to(ms(500)).is_empty());
        assert_eq!(timeline.value(x), frozen);
        assert_eq!(timeline.next_deadline(), None);
    }

    #[test]
    fn retargeting_replaces_running_animation() {
        let mut timeline = Timeline::new();
        let y = timeline.create(0.0);
        let first = timeline.timing(y, 100.0, ms(200));
        timeline.advance_to(ms(100));
        let second = timeline.timing(y, 0.0, ms(200));

        let done = timeline.advance_to(ms(300));
        assert_eq!(done, vec![second]);
        assert!(!done.contains(&first));
    }

    #[test]
    fn completions_are_reported_in_order() {
        let mut timeline = Timeline::new();
        let a = timeline.create(0.0);
        let b = timeline.create(0.0);
        let slow = timeline.timing(a, 1.0, ms(300));
        let fast = timeline.timing(b, 1.0, ms(100));

        assert_eq!(timeline.next_deadline(), Some(ms(100)));
        assert_eq!(timeline.advance_to(ms(400)), vec![fast, slow]);
    }

    #[test]
    fn spring_returns_to_target() {
        let mut timeline = Timeline::new();
        let x = timeline.create(80.0);
        let handle = timeline.spring(x, 0.0, SpringConfig::default());
        let deadline = timeline.next_deadline().unwrap_or_default();
        assert!(deadline > Duration::ZERO);

        assert_eq!(timeline.advance_to(deadline), vec![handle]);
        assert_abs_diff_eq!(timeline.value(x).unwrap_or(f32::NAN), 0.0);
    }

    #[test]
    fn removed_value_is_gone() {
        let mut timeline = Timeline::new();
        let x = timeline.create(1.0);
        let _ = timeline.timing(x, 0.0, ms(10));
        timeline.remove(x);
        assert_eq!(timeline.value(x), None);
        assert!(timeline.is_empty());
        assert!(timeline.advance_to(ms(20)).is_empty());
    }

    #[test]
    fn time_never_goes_backwards() {
        let mut timeline = Timeline::new();
        timeline.advance_to(ms(100));
        timeline.advance_to(ms(50));
        assert_eq!(timeline.now(), ms(100));
    }
}
