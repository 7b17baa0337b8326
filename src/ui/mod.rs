// SPDX-License-Identifier: MPL-2.0
//! Iced presentation of the toast overlay.
//!
//! Follows the Elm-style "state down, messages up" pattern: the overlay
//! session publishes [`crate::reconciler::ToastView`]s, [`toast::Toast`] renders
//! them and emits [`toast::Message`]s for the host to route back.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`state`] - Pointer drag tracking for swipes
//! - [`toast`] - Toast card and overlay stack

pub mod design_tokens;
pub mod state;
pub mod toast;

pub use toast::{estimated_height, Message, Toast};
