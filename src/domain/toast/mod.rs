// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! A toast is described by a [`Notification`]; callers build one through a
//! [`ToastDraft`] (everything but the id) and later amend it with a
//! [`NotificationPatch`].

mod newtypes;
mod notification;

pub use newtypes::{dismiss_timeout_bounds, DismissTimeout};
pub use notification::{Notification, NotificationPatch, ToastDraft};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identifier of a toast, unique within the active queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Category of a toast. Drives the default timeout and the accent styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Operation completed successfully (5s default timeout).
    Success,
    /// Error requiring attention (15s default timeout).
    Error,
    /// Warning that doesn't block operation (10s default timeout).
    Warning,
    /// Informational message (10s default timeout).
    #[default]
    Info,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Info,
    ];

    /// Returns the built-in auto-dismiss duration for this category.
    #[must_use]
    pub fn default_timeout(self) -> Duration {
        CategoryTimeouts::default().for_category(self)
    }

    /// Stable name used in test ids and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Success => "Success",
            Category::Error => "Error",
            Category::Warning => "Warning",
            Category::Info => "Info",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Auto-dismiss duration per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTimeouts {
    pub success: Duration,
    pub error: Duration,
    pub warning: Duration,
    pub info: Duration,
}

impl CategoryTimeouts {
    #[must_use]
    pub fn for_category(&self, category: Category) -> Duration {
        match category {
            Category::Success => self.success,
            Category::Error => self.error,
            Category::Warning => self.warning,
            Category::Info => self.info,
        }
    }
}

impl Default for CategoryTimeouts {
    fn default() -> Self {
        Self {
            success: Duration::from_secs(5),
            error: Duration::from_secs(15),
            warning: Duration::from_secs(10),
            info: Duration::from_secs(10),
        }
    }
}
