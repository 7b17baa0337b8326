// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector and its sending handle.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DismissReason};
use crate::domain::toast::{Category, ToastId};

/// Events waiting in the channel before [`DiagnosticsCollector::process_pending`] runs.
const CHANNEL_CAPACITY: usize = 256;

/// Cloneable, non-blocking sender of diagnostic events.
///
/// Every `log_*` method drops the event when the channel is full or the
/// collector is gone; diagnostics never stall the overlay.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_shown(&self, id: &ToastId, category: Category) {
        self.send(DiagnosticEventKind::ToastShown {
            id: id.clone(),
            category,
        });
    }

    pub fn log_dismissed(&self, id: &ToastId, reason: DismissReason) {
        self.send(DiagnosticEventKind::ToastDismissed {
            id: id.clone(),
            reason,
        });
    }

    pub fn log_action_failed(&self, id: &ToastId, payload: String, message: String) {
        self.send(DiagnosticEventKind::ActionFailed {
            id: id.clone(),
            payload,
            message,
        });
    }

    /// Sends an event, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the channel is saturated and
    /// `TrySendError::Disconnected` when the collector was dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.try_log(kind);
    }
}

/// Owner of the diagnostics log.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the log. Call once per UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Serializes the log, oldest event first.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
