// SPDX-License-Identifier: MPL-2.0
//! Host application lifecycle.
//!
//! The host reports raw [`AppState`] values; [`LifecycleTracker`] folds them
//! into the two transitions the overlay cares about. Anything other than
//! [`AppState::Active`] counts as background.

/// State reported by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Active,
    /// Visible but not receiving input (e.g. the window lost focus).
    Inactive,
    Background,
}

impl AppState {
    #[must_use]
    pub fn is_foreground(self) -> bool {
        self == AppState::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    CameToForeground,
    WentToBackground,
}

#[derive(Debug, Clone, Default)]
pub struct LifecycleTracker {
    current: AppState,
}

impl LifecycleTracker {
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub fn current(&self) -> AppState {
        self.current
    }

    /// Records a new state, returning the transition it causes, if any.
    pub fn update(&mut self, next: AppState) -> Option<Transition> {
        let previous = std::mem::replace(&mut self.current, next);
        match (previous.is_foreground(), next.is_foreground()) {
            (false, true) => Some(Transition::CameToForeground),
            (true, false) => Some(Transition::WentToBackground),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_foreground() {
        assert!(LifecycleTracker::default().current().is_foreground());
    }

    #[test]
    fn reports_only_foreground_edges() {
        let mut tracker = LifecycleTracker::default();
        assert_eq!(tracker.update(AppState::Active), None);
        assert_eq!(tracker.update(AppState::Inactive), Some(Transition::WentToBackground));
        assert_eq!(tracker.update(AppState::Background), None);
        assert_eq!(tracker.update(AppState::Active), Some(Transition::CameToForeground));
    }

    #[test]
    fn inactive_to_active_counts_as_return() {
        let mut tracker = LifecycleTracker::new(AppState::Inactive);
        assert_eq!(tracker.update(AppState::Active), Some(Transition::CameToForeground));
    }
}
