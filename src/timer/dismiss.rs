// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss controller.
//!
//! Every visible auto-dismissible toast owns at most one deadline. Deadlines
//! only exist while the app is in the foreground: going to the background
//! cancels all of them and coming back arms each one again with its full
//! duration, so background time never counts toward a dismissal.

use super::{Scheduler, TimerQueue, TimerToken};
use crate::domain::toast::{CategoryTimeouts, Notification, ToastId};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct Armed {
    token: TimerToken,
    deadline: Duration,
}

#[derive(Debug)]
pub struct DismissTimers<S = TimerQueue> {
    scheduler: S,
    timeouts: CategoryTimeouts,
    /// Effective delay of each visible auto-dismissible toast.
    delays: HashMap<ToastId, Duration>,
    armed: HashMap<ToastId, Armed>,
    owners: HashMap<TimerToken, ToastId>,
    foreground: bool,
}

impl DismissTimers<TimerQueue> {
    #[must_use]
    pub fn new(timeouts: CategoryTimeouts) -> Self {
        Self::with_scheduler(TimerQueue::new(), timeouts)
    }
}

impl<S: Scheduler> DismissTimers<S> {
    #[must_use]
    pub fn with_scheduler(scheduler: S, timeouts: CategoryTimeouts) -> Self {
        Self {
            scheduler,
            timeouts,
            delays: HashMap::new(),
            armed: HashMap::new(),
            owners: HashMap::new(),
            foreground: true,
        }
    }

    #[must_use]
    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    #[must_use]
    pub fn is_armed(&self, id: &ToastId) -> bool {
        self.armed.contains_key(id)
    }

    /// Absolute time at which the toast will be dismissed, if armed.
    #[must_use]
    pub fn deadline(&self, id: &ToastId) -> Option<Duration> {
        self.armed.get(id).map(|armed| armed.deadline)
    }

    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Brings timers in line with the toasts currently on screen.
    ///
    /// Newcomers are armed; a toast whose effective delay changed (or which
    /// stopped being auto-dismissible) is re-armed or disarmed. Toasts not
    /// listed are left alone; use [`DismissTimers::retain`] to drop them.
    pub fn sync<'a, A: 'a>(
        &mut self,
        now: Duration,
        visible: impl IntoIterator<Item = &'a Notification<A>>,
    ) {
        for toast in visible {
            let id = toast.id();
            match toast.dismiss_after(&self.timeouts) {
                Some(delay) => {
                    let unchanged = self.delays.get(id) == Some(&delay);
                    self.delays.insert(id.clone(), delay);
                    if self.foreground && !(unchanged && self.armed.contains_key(id)) {
                        self.arm(id, now + delay);
                    }
                }
                None => {
                    self.delays.remove(id);
                    self.disarm(id);
                }
            }
        }
    }

    /// Re-evaluates the policy of toasts that already have a delay.
    ///
    /// Unlike [`DismissTimers::sync`] this never arms a toast it has not seen
    /// before, so it is safe to call while presentation is gated or a pass is
    /// still waiting on exits.
    pub fn refresh<'a, A: 'a>(
        &mut self,
        now: Duration,
        queue: impl IntoIterator<Item = &'a Notification<A>>,
    ) {
        let tracked: Vec<&Notification<A>> = queue
            .into_iter()
            .filter(|toast| self.delays.contains_key(toast.id()) || self.armed.contains_key(toast.id()))
            .collect();
        self.sync(now, tracked);
    }

    /// Forgets every toast for which `keep` returns `false`.
    pub fn retain(&mut self, mut keep: impl FnMut(&ToastId) -> bool) {
        let dropped: Vec<ToastId> = self
            .delays
            .keys()
            .chain(self.armed.keys())
            .filter(|id| !keep(*id))
            .cloned()
            .collect();
        for id in dropped {
            self.delays.remove(&id);
            self.disarm(&id);
        }
    }

    /// Records an app foreground/background change.
    pub fn set_foreground(&mut self, now: Duration, foreground: bool) {
        if self.foreground == foreground {
            return;
        }
        self.foreground = foreground;
        if foreground {
            let pending: Vec<(ToastId, Duration)> = self
                .delays
                .iter()
                .map(|(id, delay)| (id.clone(), *delay))
                .collect();
            for (id, delay) in pending {
                self.arm(&id, now + delay);
            }
            tracing::debug!(armed = self.armed.len(), "timers restarted on foreground");
        } else {
            let ids: Vec<ToastId> = self.armed.keys().cloned().collect();
            for id in &ids {
                self.disarm(id);
            }
            tracing::debug!(paused = ids.len(), "timers cancelled on background");
        }
    }

    /// Returns the toasts whose deadline passed, earliest first.
    pub fn fire_due(&mut self, now: Duration) -> Vec<ToastId> {
        self.scheduler
            .pop_due(now)
            .into_iter()
            .filter_map(|token| {
                let id = self.owners.remove(&token)?;
                self.armed.remove(&id);
                self.delays.remove(&id);
                Some(id)
            })
            .collect()
    }

    /// Cancels every deadline and forgets every toast.
    pub fn cancel_all(&mut self) {
        for (_, armed) in self.armed.drain() {
            self.scheduler.cancel(armed.token);
        }
        self.owners.clear();
        self.delays.clear();
    }

    fn arm(&mut self, id: &ToastId, deadline: Duration) {
        self.disarm(id);
        let token = self.scheduler.schedule(deadline);
        self.armed.insert(id.clone(), Armed { token, deadline });
        self.owners.insert(token, id.clone());
    }

    fn disarm(&mut self, id: &ToastId) {
        if let Some(armed) = self.armed.remove(id) {
            self.scheduler.cancel(armed.token);
            self.owners.remove(&armed.token);
        }
    }
}
