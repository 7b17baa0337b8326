// SPDX-License-Identifier: MPL-2.0
//! Toast diagnostic events.

use crate::domain::toast::{Category, ToastId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a toast left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// A caller dispatched a hide or replacing push.
    Manual,
    AutoDismiss,
    Swipe,
    HideAll,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Stamps `kind` with the current wall-clock time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A toast started its entrance.
    ToastShown { id: ToastId, category: Category },

    ToastDismissed { id: ToastId, reason: DismissReason },

    /// The action runner failed; the toast was closed anyway.
    ActionFailed {
        id: ToastId,
        /// Debug form of the payload.
        payload: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_type_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::ToastDismissed {
            id: ToastId::new("t1"),
            reason: DismissReason::AutoDismiss,
        });
        let json = serde_json::to_value(&event).expect("serialize event");

        assert_eq!(json["type"], "toast_dismissed");
        assert_eq!(json["id"], "t1");
        assert_eq!(json["reason"], "auto_dismiss");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn event_deserializes_back() {
        let json = r#"{
            "timestamp": "2025-01-01T00:00:00Z",
            "type": "toast_shown",
            "id": "t2",
            "category": "error"
        }"#;
        let event: DiagnosticEvent = serde_json::from_str(json).expect("parse event");
        assert_eq!(
            event.kind,
            DiagnosticEventKind::ToastShown {
                id: ToastId::new("t2"),
                category: Category::Error,
            }
        );
    }
}
