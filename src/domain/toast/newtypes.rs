// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Dismiss Timeout Bounds
// =============================================================================

/// Per-toast timeout override bounds (0.5 to 120 seconds).
pub mod dismiss_timeout_bounds {
    /// Minimum timeout in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum timeout in milliseconds.
    pub const MAX_MS: u64 = 120_000;
}

// =============================================================================
// DismissTimeout
// =============================================================================

/// Auto-dismiss override for a single toast.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms – 120 s). A zero or absurdly
/// long override would either flash the toast or pin it forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissTimeout(u64);

impl DismissTimeout {
    /// Creates a new timeout, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(
            dismiss_timeout_bounds::MIN_MS,
            dismiss_timeout_bounds::MAX_MS,
        ))
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns whether the timeout is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= dismiss_timeout_bounds::MIN_MS
    }

    /// Returns whether the timeout is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= dismiss_timeout_bounds::MAX_MS
    }
}

impl From<Duration> for DismissTimeout {
    fn from(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::from_millis(millis)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_DISMISS_TIMEOUT_MS, MIN_DISMISS_TIMEOUT_MS};

    // Verify domain bounds match config constants
    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(dismiss_timeout_bounds::MIN_MS, MIN_DISMISS_TIMEOUT_MS);
        assert_eq!(dismiss_timeout_bounds::MAX_MS, MAX_DISMISS_TIMEOUT_MS);
    }

    #[test]
    fn from_millis_clamps_to_valid_range() {
        assert_eq!(DismissTimeout::from_millis(0).as_millis(), 500);
        assert_eq!(DismissTimeout::from_millis(1_000_000).as_millis(), 120_000);
        assert!(DismissTimeout::from_millis(0).is_min());
        assert!(DismissTimeout::from_millis(u64::MAX).is_max());
    }

    #[test]
    fn from_millis_accepts_valid_values() {
        let timeout = DismissTimeout::from_millis(3_000);
        assert_eq!(timeout.as_duration(), Duration::from_secs(3));
        assert!(!timeout.is_min());
        assert!(!timeout.is_max());
    }

    #[test]
    fn from_duration_goes_through_clamp() {
        assert_eq!(DismissTimeout::from(Duration::from_secs(2)).as_millis(), 2_000);
        assert_eq!(DismissTimeout::from(Duration::from_secs(3600)).as_millis(), 120_000);
    }
}
