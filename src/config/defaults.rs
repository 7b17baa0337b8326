// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Toast stack insets, gaps and placeholder height
//! - **Swipe**: Swipe-to-dismiss threshold
//! - **Animation**: Transition duration and spring tuning
//! - **Timeouts**: Per-category auto-dismiss durations and override bounds
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Offset of the first toast from the top of the overlay (in logical pixels).
pub const DEFAULT_TOP_INSET: f32 = 8.0;

/// Vertical gap inserted after every toast in the stack.
pub const DEFAULT_TOAST_GAP: f32 = 8.0;

/// Height assumed for a toast until the presentation layer reports a measurement.
pub const DEFAULT_TOAST_HEIGHT: f32 = 64.0;

/// Screen width used before the host reports the real one.
pub const DEFAULT_SCREEN_WIDTH: f32 = 390.0;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Fraction of the screen width a release must cover to dismiss a toast.
pub const DEFAULT_SWIPE_DISMISS_FRACTION: f32 = 0.3;

/// Minimum allowed swipe fraction.
pub const MIN_SWIPE_DISMISS_FRACTION: f32 = 0.05;

/// Maximum allowed swipe fraction.
pub const MAX_SWIPE_DISMISS_FRACTION: f32 = 0.95;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of enter, reposition and exit transitions (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Spring bounciness used when a released swipe snaps back.
pub const DEFAULT_SPRING_BOUNCINESS: f32 = 20.0;

/// Spring speed used when a released swipe snaps back.
pub const DEFAULT_SPRING_SPEED: f32 = 12.0;

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Auto-dismiss timeout for success toasts (in milliseconds).
pub const DEFAULT_SUCCESS_TIMEOUT_MS: u64 = 5_000;

/// Auto-dismiss timeout for error toasts (in milliseconds).
pub const DEFAULT_ERROR_TIMEOUT_MS: u64 = 15_000;

/// Auto-dismiss timeout for warning toasts (in milliseconds).
pub const DEFAULT_WARNING_TIMEOUT_MS: u64 = 10_000;

/// Auto-dismiss timeout for info toasts (in milliseconds).
pub const DEFAULT_INFO_TIMEOUT_MS: u64 = 10_000;

/// Shortest accepted per-toast timeout override (in milliseconds).
pub const MIN_DISMISS_TIMEOUT_MS: u64 = 500;

/// Longest accepted per-toast timeout override (in milliseconds).
pub const MAX_DISMISS_TIMEOUT_MS: u64 = 120_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Layout validation
    assert!(DEFAULT_TOP_INSET >= 0.0);
    assert!(DEFAULT_TOAST_GAP >= 0.0);
    assert!(DEFAULT_TOAST_HEIGHT > 0.0);
    assert!(DEFAULT_SCREEN_WIDTH > 0.0);

    // Swipe validation
    assert!(MIN_SWIPE_DISMISS_FRACTION > 0.0);
    assert!(MAX_SWIPE_DISMISS_FRACTION < 1.0);
    assert!(DEFAULT_SWIPE_DISMISS_FRACTION >= MIN_SWIPE_DISMISS_FRACTION);
    assert!(DEFAULT_SWIPE_DISMISS_FRACTION <= MAX_SWIPE_DISMISS_FRACTION);

    // Animation validation
    assert!(DEFAULT_TRANSITION_MS > 0);
    assert!(DEFAULT_SPRING_BOUNCINESS >= 0.0);
    assert!(DEFAULT_SPRING_SPEED > 0.0);

    // Timeout validation
    assert!(MIN_DISMISS_TIMEOUT_MS > 0);
    assert!(MAX_DISMISS_TIMEOUT_MS > MIN_DISMISS_TIMEOUT_MS);
    assert!(DEFAULT_SUCCESS_TIMEOUT_MS >= MIN_DISMISS_TIMEOUT_MS);
    assert!(DEFAULT_ERROR_TIMEOUT_MS <= MAX_DISMISS_TIMEOUT_MS);
    assert!(DEFAULT_WARNING_TIMEOUT_MS > DEFAULT_SUCCESS_TIMEOUT_MS);
    assert!(DEFAULT_ERROR_TIMEOUT_MS > DEFAULT_WARNING_TIMEOUT_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_timeouts_match_documented_values() {
        assert_eq!(DEFAULT_SUCCESS_TIMEOUT_MS, 5_000);
        assert_eq!(DEFAULT_WARNING_TIMEOUT_MS, 10_000);
        assert_eq!(DEFAULT_INFO_TIMEOUT_MS, 10_000);
        assert_eq!(DEFAULT_ERROR_TIMEOUT_MS, 15_000);
    }

    #[test]
    fn swipe_fraction_defaults_are_valid() {
        assert_eq!(DEFAULT_SWIPE_DISMISS_FRACTION, 0.3);
        assert!(DEFAULT_SWIPE_DISMISS_FRACTION >= MIN_SWIPE_DISMISS_FRACTION);
        assert!(DEFAULT_SWIPE_DISMISS_FRACTION <= MAX_SWIPE_DISMISS_FRACTION);
    }

    #[test]
    fn layout_defaults_are_valid() {
        assert_eq!(DEFAULT_TOP_INSET, 8.0);
        assert_eq!(DEFAULT_TOAST_GAP, 8.0);
        assert!(DEFAULT_TOAST_HEIGHT > DEFAULT_TOAST_GAP);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert_eq!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, 1000);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
