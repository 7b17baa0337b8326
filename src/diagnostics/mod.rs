// SPDX-License-Identifier: MPL-2.0
//! Bounded log of toast activity.
//!
//! The overlay session reports what happened to each toast through a
//! [`DiagnosticsHandle`]; the host owns the [`DiagnosticsCollector`], drains it
//! on its own schedule and can export the log as JSON.
//!
//! - [`CircularBuffer`]: ring buffer that evicts the oldest event
//! - [`DiagnosticEvent`]: timestamped toast event
//! - [`BufferCapacity`]: clamped buffer size

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason};
