// SPDX-License-Identifier: MPL-2.0
//! Vertical stacking of toasts.

use crate::config::{
    DEFAULT_SCREEN_WIDTH, DEFAULT_SWIPE_DISMISS_FRACTION, DEFAULT_TOAST_GAP, DEFAULT_TOAST_HEIGHT,
    DEFAULT_TOP_INSET,
};

/// Geometry of the toast stack, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Offset of the first toast from the top of the overlay.
    pub top_inset: f32,
    /// Space between two consecutive toasts.
    pub gap: f32,
    /// Height assumed until a toast reports its measured height.
    pub default_height: f32,
    /// Width of the overlay; toasts enter from and exit to this distance.
    pub screen_width: f32,
    /// Fraction of `screen_width` a swipe must cover to dismiss.
    pub swipe_dismiss_fraction: f32,
}

impl Layout {
    /// Target vertical offsets for a stack of toasts with the given heights.
    ///
    /// `None` heights fall back to `default_height`.
    pub fn slots(&self, heights: impl IntoIterator<Item = Option<f32>>) -> Vec<f32> {
        let mut offset = self.top_inset;
        heights
            .into_iter()
            .map(|height| {
                let slot = offset;
                offset += height.unwrap_or(self.default_height) + self.gap;
                slot
            })
            .collect()
    }

    /// Minimum horizontal displacement that turns a swipe into a dismissal.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.screen_width * self.swipe_dismiss_fraction
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            top_inset: DEFAULT_TOP_INSET,
            gap: DEFAULT_TOAST_GAP,
            default_height: DEFAULT_TOAST_HEIGHT,
            screen_width: DEFAULT_SCREEN_WIDTH,
            swipe_dismiss_fraction: DEFAULT_SWIPE_DISMISS_FRACTION,
        }
    }
}
