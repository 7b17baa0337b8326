// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! `A` is the caller-defined action payload. The overlay never looks inside
//! it; it is only handed to the action runner when the action button is
//! pressed.

use super::{Category, CategoryTimeouts, DismissTimeout, ToastId};
use std::time::Duration;

/// A toast as it lives in the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification<A = ()> {
    id: ToastId,
    message: String,
    category: Category,
    /// Persistent toasts cannot be swiped away.
    is_persistent: bool,
    is_auto_dismissible: bool,
    /// Overrides the category default when present.
    auto_dismiss_timeout: Option<DismissTimeout>,
    action: Option<A>,
    action_label: Option<String>,
    dismiss_label: Option<String>,
    test_id: Option<String>,
}

impl<A> Notification<A> {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.is_persistent
    }

    #[must_use]
    pub fn is_auto_dismissible(&self) -> bool {
        self.is_auto_dismissible
    }

    #[must_use]
    pub fn auto_dismiss_timeout(&self) -> Option<DismissTimeout> {
        self.auto_dismiss_timeout
    }

    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action_label.as_deref()
    }

    #[must_use]
    pub fn dismiss_label(&self) -> Option<&str> {
        self.dismiss_label.as_deref()
    }

    /// Returns the explicit test id, or `"<Category>ToastUI"`.
    #[must_use]
    pub fn test_id(&self) -> String {
        self.test_id
            .clone()
            .unwrap_or_else(|| format!("{}ToastUI", self.category.name()))
    }

    /// Effective auto-dismiss delay, or `None` when the toast stays until dismissed.
    #[must_use]
    pub fn dismiss_after(&self, timeouts: &CategoryTimeouts) -> Option<Duration> {
        if !self.is_auto_dismissible {
            return None;
        }
        Some(
            self.auto_dismiss_timeout
                .map(DismissTimeout::as_duration)
                .unwrap_or_else(|| timeouts.for_category(self.category)),
        )
    }
}

/// Everything a caller specifies when pushing a toast; the id is assigned on push.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDraft<A = ()> {
    message: String,
    category: Category,
    is_persistent: bool,
    is_auto_dismissible: bool,
    auto_dismiss_timeout: Option<DismissTimeout>,
    action: Option<A>,
    action_label: Option<String>,
    dismiss_label: Option<String>,
    test_id: Option<String>,
}

impl<A> ToastDraft<A> {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category,
            is_persistent: false,
            is_auto_dismissible: false,
            auto_dismiss_timeout: None,
            action: None,
            action_label: None,
            dismiss_label: None,
            test_id: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Category::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Category::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Category::Info, message)
    }

    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.is_persistent = true;
        self
    }

    /// Arms the auto-dismiss timer with the category default.
    #[must_use]
    pub fn auto_dismiss(mut self) -> Self {
        self.is_auto_dismissible = true;
        self
    }

    /// Arms the auto-dismiss timer with a custom duration.
    #[must_use]
    pub fn auto_dismiss_after(mut self, timeout: impl Into<DismissTimeout>) -> Self {
        self.is_auto_dismissible = true;
        self.auto_dismiss_timeout = Some(timeout.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, action: A) -> Self {
        self.action_label = Some(label.into());
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn with_dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attaches an id, producing the queued form of the toast.
    pub fn with_id(self, id: impl Into<ToastId>) -> Notification<A> {
        Notification {
            id: id.into(),
            message: self.message,
            category: self.category,
            is_persistent: self.is_persistent,
            is_auto_dismissible: self.is_auto_dismissible,
            auto_dismiss_timeout: self.auto_dismiss_timeout,
            action: self.action,
            action_label: self.action_label,
            dismiss_label: self.dismiss_label,
            test_id: self.test_id,
        }
    }
}

/// Partial update for `patch-by-id`. Unset fields keep their current value.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPatch<A = ()> {
    message: Option<String>,
    category: Option<Category>,
    is_persistent: Option<bool>,
    is_auto_dismissible: Option<bool>,
    auto_dismiss_timeout: Option<Option<DismissTimeout>>,
    action: Option<Option<A>>,
    action_label: Option<Option<String>>,
    dismiss_label: Option<Option<String>>,
}

impl<A> Default for NotificationPatch<A> {
    fn default() -> Self {
        Self {
            message: None,
            category: None,
            is_persistent: None,
            is_auto_dismissible: None,
            auto_dismiss_timeout: None,
            action: None,
            action_label: None,
            dismiss_label: None,
        }
    }
}

impl<A> NotificationPatch<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn persistent(mut self, is_persistent: bool) -> Self {
        self.is_persistent = Some(is_persistent);
        self
    }

    #[must_use]
    pub fn auto_dismissible(mut self, is_auto_dismissible: bool) -> Self {
        self.is_auto_dismissible = Some(is_auto_dismissible);
        self
    }

    #[must_use]
    pub fn auto_dismiss_timeout(mut self, timeout: Option<DismissTimeout>) -> Self {
        self.auto_dismiss_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn action(mut self, label: Option<String>, action: Option<A>) -> Self {
        self.action_label = Some(label);
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn dismiss_label(mut self, label: Option<String>) -> Self {
        self.dismiss_label = Some(label);
        self
    }

    /// Shallow-merges the set fields over `target`. The id never changes.
    pub fn apply_to(self, target: &mut Notification<A>) {
        if let Some(message) = self.message {
            target.message = message;
        }
        if let Some(category) = self.category {
            target.category = category;
        }
        if let Some(is_persistent) = self.is_persistent {
            target.is_persistent = is_persistent;
        }
        if let Some(is_auto_dismissible) = self.is_auto_dismissible {
            target.is_auto_dismissible = is_auto_dismissible;
        }
        if let Some(timeout) = self.auto_dismiss_timeout {
            target.auto_dismiss_timeout = timeout;
        }
        if let Some(action) = self.action {
            target.action = action;
        }
        if let Some(label) = self.action_label {
            target.action_label = label;
        }
        if let Some(label) = self.dismiss_label {
            target.dismiss_label = label;
        }
    }
}
