// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification overlay for Iced applications.
//!
//! The engine is headless: a pure queue reducer, an auto-dismiss timer
//! controller and an animation-state reconciler, all driven by one
//! [`session::OverlaySession`] on a virtual clock. The [`ui`] module renders the
//! published snapshot with Iced and [`app`] is a small demo.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.3.0")]

pub mod action;
pub mod animation;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod queue;
pub mod reconciler;
pub mod session;
pub mod timer;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
