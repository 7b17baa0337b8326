// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a pointer drag on a single toast card and turns cursor movement into
//! the horizontal displacement the overlay session expects.

use crate::domain::toast::ToastId;
use iced::Point;

/// Manages press-and-drag state for one toast at a time
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Toast under the pointer when the drag started
    pub toast: Option<ToastId>,

    /// Position where the drag started
    pub start_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation on `toast`
    pub fn start(&mut self, toast: ToastId, position: Point) {
        self.toast = Some(toast);
        self.start_position = Some(position);
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.toast.is_some()
    }

    /// Stops the drag operation, returning the toast and its final displacement
    pub fn stop(&mut self, current_position: Point) -> Option<(ToastId, f32)> {
        let displacement = self.displacement(current_position);
        self.toast = None;
        self.start_position = None;
        displacement
    }

    /// Horizontal distance travelled since the drag started
    #[must_use]
    pub fn displacement(&self, current_position: Point) -> Option<(ToastId, f32)> {
        let toast = self.toast.clone()?;
        let start = self.start_position?;
        Some((toast, current_position.x - start.x))
    }
}
