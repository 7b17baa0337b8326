// SPDX-License-Identifier: MPL-2.0
//! UI state kept outside the overlay session.

pub mod drag;

pub use drag::DragState;
