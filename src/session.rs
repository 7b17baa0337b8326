// SPDX-License-Identifier: MPL-2.0
//! The overlay session: single mutation surface of the toast overlay.
//!
//! An [`OverlaySession`] is created when the overlay mounts and torn down when
//! it unmounts. It owns the queue and the allowance flag, and drives the
//! reconciler and the auto-dismiss timers from one clock. Callers only
//! dispatch [`Action`]s and report host events (time, lifecycle, gestures,
//! measured heights); nothing else mutates the queue.
//!
//! After [`OverlaySession::teardown`] every method returns
//! [`Error::SessionClosed`].
//!
//! # Example
//!
//! ```
//! use iced_toasts::config::Config;
//! use iced_toasts::domain::toast::ToastDraft;
//! use iced_toasts::queue::Action;
//! use iced_toasts::session::OverlaySession;
//! use std::time::Duration;
//!
//! let mut session: OverlaySession = OverlaySession::new(&Config::default());
//! session.set_allowed(true)?;
//! session.dispatch(Action::Push(ToastDraft::success("Saved").auto_dismiss()))?;
//! assert_eq!(session.queue()?.len(), 1);
//!
//! session.advance_to(Duration::from_secs(6))?;
//! assert!(session.queue()?.is_empty());
//! # Ok::<(), iced_toasts::error::Error>(())
//! ```

use crate::action::{run_guarded, ActionRunner, ActionTask};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, DismissReason};
use crate::domain::toast::{Notification, ToastId};
use crate::error::{Error, Result};
use crate::lifecycle::{AppState, LifecycleTracker, Transition};
use crate::queue::{reduce, Action, IdGenerator, UuidIds};
use crate::reconciler::{PassOutcome, Reconciler, Release, ToastView};
use crate::timer::DismissTimers;
use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

pub struct OverlaySession<A = ()> {
    queue: Vec<Notification<A>>,
    allowed: bool,
    ids: Box<dyn IdGenerator>,
    reconciler: Reconciler<A>,
    timers: DismissTimers,
    lifecycle: LifecycleTracker,
    clock: Duration,
    on_new_error: Option<Box<dyn FnMut()>>,
    runner: Option<Arc<dyn ActionRunner<A>>>,
    diagnostics: Option<DiagnosticsHandle>,
    closed: bool,
}

impl<A: Clone> OverlaySession<A> {
    /// Creates an empty session. Presentation starts gated unless
    /// `overlay.allowed_by_default` is set.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            queue: Vec::new(),
            allowed: config.allowed_by_default(),
            ids: Box::new(UuidIds),
            reconciler: Reconciler::with_layout(
                config.layout(),
                config.transition(),
                config.spring(),
            ),
            timers: DismissTimers::new(config.category_timeouts()),
            lifecycle: LifecycleTracker::default(),
            clock: Duration::ZERO,
            on_new_error: None,
            runner: None,
            diagnostics: None,
            closed: false,
        }
    }

    /// Replaces the id source.
    #[must_use]
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    #[must_use]
    pub fn with_action_runner(mut self, runner: Arc<dyn ActionRunner<A>>) -> Self {
        self.runner = Some(runner);
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Hook called once per reconciliation pass that brings in at least one error toast.
    #[must_use]
    pub fn on_new_error(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_new_error = Some(Box::new(hook));
        self
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The logical queue, newest first.
    pub fn queue(&self) -> Result<&[Notification<A>]> {
        self.ensure_open()?;
        Ok(&self.queue)
    }

    pub fn is_allowed(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.allowed)
    }

    /// Rendered toasts with their current offsets.
    pub fn views(&self) -> Result<Vec<ToastView<'_, A>>> {
        self.ensure_open()?;
        Ok(self.reconciler.views())
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn app_state(&self) -> AppState {
        self.lifecycle.current()
    }

    #[must_use]
    pub fn reconciler(&self) -> &Reconciler<A> {
        &self.reconciler
    }

    #[must_use]
    pub fn timers(&self) -> &DismissTimers {
        &self.timers
    }

    /// Returns whether an animation is running or a pass is waiting.
    ///
    /// Auto-dismiss deadlines alone do not count; see [`Self::next_deadline`].
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.closed && self.reconciler.is_busy()
    }

    /// Earliest moment at which [`Self::advance_to`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.closed {
            return None;
        }
        [self.reconciler.next_deadline(), self.timers.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Applies `action` to the queue and reconciles if presentation is allowed.
    pub fn dispatch(&mut self, action: Action<A>) -> Result<()> {
        self.ensure_open()?;
        let reason = match action {
            Action::HideAll => DismissReason::HideAll,
            _ => DismissReason::Manual,
        };
        self.apply(action, reason);
        Ok(())
    }

    /// Opens or closes the presentation gate. Opening it reconciles right away
    /// against the current queue.
    pub fn set_allowed(&mut self, allowed: bool) -> Result<()> {
        self.ensure_open()?;
        if self.allowed == allowed {
            return Ok(());
        }
        self.allowed = allowed;
        tracing::info!(allowed, queued = self.queue.len(), "toast presentation gate changed");
        if allowed {
            self.reconcile();
        }
        Ok(())
    }

    /// Moves the session clock forward, processing every animation completion
    /// and timer expiry up to `now` in chronological order.
    pub fn advance_to(&mut self, now: Duration) -> Result<()> {
        self.ensure_open()?;
        if now < self.clock {
            return Ok(());
        }
        while let Some(deadline) = self.next_deadline().filter(|deadline| *deadline <= now) {
            self.step(deadline);
        }
        self.step(now);
        Ok(())
    }

    /// Records a host lifecycle change.
    pub fn set_app_state(&mut self, state: AppState) -> Result<()> {
        self.ensure_open()?;
        match self.lifecycle.update(state) {
            Some(Transition::CameToForeground) => {
                tracing::debug!("app returned to foreground");
                self.timers.set_foreground(self.clock, true);
            }
            Some(Transition::WentToBackground) => {
                tracing::debug!("app went to background");
                self.timers.set_foreground(self.clock, false);
            }
            None => {}
        }
        Ok(())
    }

    /// Height measured by the presentation layer after rendering `id`.
    pub fn report_height(&mut self, id: &ToastId, height: f32) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.reconciler.report_height(id, height))
    }

    pub fn set_screen_width(&mut self, width: f32) -> Result<()> {
        self.ensure_open()?;
        self.reconciler.set_screen_width(width);
        Ok(())
    }

    pub fn start_swipe(&mut self, id: &ToastId) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.reconciler.start_swipe(id))
    }

    pub fn move_swipe(&mut self, id: &ToastId, dx: f32) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.reconciler.move_swipe(id, dx))
    }

    /// Ends a swipe. A far enough swipe hides the toast.
    pub fn end_swipe(&mut self, id: &ToastId, dx: f32) -> Result<Option<Release>> {
        self.ensure_open()?;
        let release = self.reconciler.end_swipe(id, dx);
        if let Some(Release::Dismiss(_)) = release {
            self.apply(Action::HideById(id.clone()), DismissReason::Swipe);
        }
        Ok(release)
    }

    /// Closes the toast and hides it from the queue.
    pub fn dismiss(&mut self, id: &ToastId) -> Result<()> {
        self.dispatch(Action::HideById(id.clone()))
    }

    /// Handles a press on the toast's action button.
    ///
    /// The toast is closed right away. If it carries an action and a runner is
    /// installed, the returned task performs the action; its failure is logged
    /// and recorded, never surfaced to the toast UI.
    pub fn press_action(&mut self, id: &ToastId) -> Result<Option<ActionTask>>
    where
        A: Debug + Send + 'static,
    {
        self.ensure_open()?;
        let Some(toast) = self.queue.iter().find(|toast| toast.id() == id) else {
            tracing::debug!(%id, "action press for unknown toast");
            return Ok(None);
        };
        let action = toast.action().cloned();
        self.apply(Action::HideById(id.clone()), DismissReason::Manual);

        Ok(match (action, &self.runner) {
            (Some(action), Some(runner)) => Some(run_guarded(
                Arc::clone(runner),
                id.clone(),
                action,
                self.diagnostics.clone(),
            )),
            _ => None,
        })
    }

    /// Cancels every timer and animation and closes the session.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.timers.cancel_all();
        self.reconciler.clear();
        self.queue.clear();
        self.on_new_error = None;
        tracing::info!("overlay session torn down");
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::SessionClosed)
        } else {
            Ok(())
        }
    }

    fn apply(&mut self, action: Action<A>, reason: DismissReason) {
        let kind = action.kind();
        let next = reduce(&self.queue, action, self.ids.as_mut());
        let previous = std::mem::replace(&mut self.queue, next);

        let remaining: HashSet<&ToastId> = self.queue.iter().map(Notification::id).collect();
        let removed: Vec<&ToastId> = previous
            .iter()
            .map(Notification::id)
            .filter(|id| !remaining.contains(id))
            .collect();
        tracing::debug!(action = kind, len = self.queue.len(), removed = removed.len(), "dispatched");
        if let Some(handle) = &self.diagnostics {
            for id in &removed {
                handle.log_dismissed(id, reason);
            }
        }
        self.timers.retain(|id| remaining.contains(id));
        self.timers.refresh(self.clock, &self.queue);

        if self.allowed {
            self.reconcile();
        }
    }

    fn reconcile(&mut self) {
        if let Some(outcome) = self.reconciler.observe(&self.queue) {
            self.handle_outcome(outcome);
        }
    }

    fn step(&mut self, at: Duration) {
        self.clock = self.clock.max(at);
        for outcome in self.reconciler.advance_to(self.clock) {
            self.handle_outcome(outcome);
        }
        for id in self.timers.fire_due(self.clock) {
            tracing::debug!(%id, "auto-dismiss timer fired");
            self.apply(Action::HideById(id), DismissReason::AutoDismiss);
        }
    }

    fn handle_outcome(&mut self, outcome: PassOutcome) {
        // Policy comes from the live queue; the snapshot may predate a patch.
        let rendered: HashSet<&ToastId> = self
            .reconciler
            .cached()
            .iter()
            .map(Notification::id)
            .collect();
        let visible = self.queue.iter().filter(|toast| rendered.contains(toast.id()));
        self.timers.sync(self.clock, visible);

        if let Some(handle) = &self.diagnostics {
            for toast in self.reconciler.cached() {
                if outcome.entered.contains(toast.id()) {
                    handle.log_shown(toast.id(), toast.category());
                }
            }
        }
        if outcome.new_error {
            if let Some(hook) = self.on_new_error.as_mut() {
                hook();
            }
        }
    }
}

impl<A: Clone> Default for OverlaySession<A> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
