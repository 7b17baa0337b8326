// SPDX-License-Identifier: MPL-2.0
//! Damped harmonic spring used for the swipe spring-back.
//!
//! The spring always starts at rest and is kept underdamped, so its motion
//! has a closed form and a finite settle time that can be scheduled like any
//! other deadline.

use std::time::Duration;

/// Displacement (in logical pixels) under which the spring counts as settled.
const REST_DISPLACEMENT: f64 = 0.01;

const MIN_DAMPING_RATIO: f32 = 0.05;
const MAX_DAMPING_RATIO: f32 = 0.95;

/// Physical parameters of a spring animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    damping_ratio: f32,
    angular_frequency: f32,
}

impl SpringConfig {
    /// Builds a spring from the designer-facing knobs.
    ///
    /// `bounciness` 0 is nearly critically damped; higher values overshoot
    /// more. `speed` scales how fast the spring reaches its target.
    #[must_use]
    pub fn new(bounciness: f32, speed: f32) -> Self {
        let bounciness = bounciness.max(0.0);
        Self {
            damping_ratio: (1.0 / (1.0 + bounciness * 0.1))
                .clamp(MIN_DAMPING_RATIO, MAX_DAMPING_RATIO),
            angular_frequency: speed.max(1.0) * 1.5,
        }
    }

    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    #[must_use]
    pub fn angular_frequency(&self) -> f32 {
        self.angular_frequency
    }

    /// Displacement from the target after `elapsed`, for an initial displacement `d0`.
    #[must_use]
    pub fn displacement(&self, d0: f32, elapsed: Duration) -> f32 {
        let zeta = f64::from(self.damping_ratio);
        let omega = f64::from(self.angular_frequency);
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let t = elapsed.as_secs_f64();
        let d0 = f64::from(d0);

        let envelope = (-zeta * omega * t).exp();
        let d = envelope * (d0 * (damped * t).cos() + (zeta * omega * d0 / damped) * (damped * t).sin());
        d as f32
    }

    /// Time after which the displacement stays below the rest threshold.
    #[must_use]
    pub fn settle_time(&self, d0: f32) -> Duration {
        let zeta = f64::from(self.damping_ratio);
        let omega = f64::from(self.angular_frequency);
        // Peak of the oscillation envelope relative to |d0|.
        let amplitude = f64::from(d0.abs()) / (1.0 - zeta * zeta).sqrt();
        if amplitude <= REST_DISPLACEMENT {
            return Duration::ZERO;
        }
        Duration::from_secs_f64((amplitude / REST_DISPLACEMENT).ln() / (zeta * omega))
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_SPRING_BOUNCINESS,
            crate::config::DEFAULT_SPRING_SPEED,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn starts_at_initial_displacement() {
        let spring = SpringConfig::default();
        assert_abs_diff_eq!(spring.displacement(100.0, Duration::ZERO), 100.0, epsilon = 1e-4);
    }

    #[test]
    fn bouncy_spring_overshoots() {
        let spring = SpringConfig::new(20.0, 12.0);
        let min = (1..200)
            .map(|ms| spring.displacement(100.0, Duration::from_millis(ms * 5)))
            .fold(f32::MAX, f32::min);
        assert!(min < 0.0, "expected overshoot past the target, min was {min}");
    }

    #[test]
    fn settled_after_settle_time() {
        let spring = SpringConfig::default();
        let settle = spring.settle_time(120.0);
        assert!(settle > Duration::ZERO);
        for extra in [0, 10, 100, 1000] {
            let d = spring.displacement(120.0, settle + Duration::from_millis(extra));
            assert!(d.abs() <= 0.011, "displacement {d} after settle");
        }
    }

    #[test]
    fn zero_displacement_settles_immediately() {
        assert_eq!(SpringConfig::default().settle_time(0.0), Duration::ZERO);
    }

    #[test]
    fn damping_ratio_is_clamped() {
        assert!(SpringConfig::new(0.0, 12.0).damping_ratio() <= MAX_DAMPING_RATIO);
        assert!(SpringConfig::new(10_000.0, 12.0).damping_ratio() >= MIN_DAMPING_RATIO);
        assert!(SpringConfig::new(-5.0, 0.0).angular_frequency() >= 1.5);
    }
}
