// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-dismiss state machine.
//!
//! Each tracked toast carries one [`SwipeState`]. Legal transitions:
//!
//! ```text
//! Idle ──start──▶ Dragging ──release (short)──▶ SpringingBack ──settled──▶ Idle
//!  ▲                 │                              │
//!  │                 └──release (far)──▶ Idle       └──start──▶ Dragging
//!  │
//!  any ──queue removal──▶ Exiting   (terminal, no drag may start)
//! ```
//!
//! A far release only decides the dismissal; the toast stays tracked until
//! the queue drops it and the exit animation completes.

use super::Layout;
use crate::animation::AnimationHandle;

/// Side a toast slides out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitDirection {
    Left,
    #[default]
    Right,
}

impl ExitDirection {
    /// Direction matching the sign of a horizontal displacement.
    #[must_use]
    pub fn from_displacement(dx: f32) -> Self {
        if dx < 0.0 {
            ExitDirection::Left
        } else {
            ExitDirection::Right
        }
    }

    /// Horizontal offset at which an exiting toast is fully off-screen.
    #[must_use]
    pub fn off_screen(self, screen_width: f32) -> f32 {
        match self {
            ExitDirection::Left => -screen_width,
            ExitDirection::Right => screen_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeState {
    #[default]
    Idle,
    /// The horizontal offset follows the pointer.
    Dragging,
    /// Returning to the resting position after a short swipe.
    SpringingBack(AnimationHandle),
    /// Sliding out after removal from the queue.
    Exiting(AnimationHandle),
}

impl SwipeState {
    #[must_use]
    pub fn can_start_drag(&self) -> bool {
        !self.is_exiting()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, SwipeState::Dragging)
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self, SwipeState::Exiting(_))
    }
}

/// What a released swipe should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Far enough: hide the toast and slide it out this way.
    Dismiss(ExitDirection),
    SpringBack,
}

/// Decides the outcome of a swipe that ended at horizontal displacement `dx`.
///
/// Persistent toasts always spring back.
#[must_use]
pub fn classify_release(dx: f32, is_persistent: bool, layout: &Layout) -> Release {
    if !is_persistent && dx.abs() >= layout.swipe_threshold() {
        Release::Dismiss(ExitDirection::from_displacement(dx))
    } else {
        Release::SpringBack
    }
}
