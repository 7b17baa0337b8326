// SPDX-License-Identifier: MPL-2.0
//! Animation-state reconciliation.
//!
//! The [`Reconciler`] keeps one animation record per rendered toast, keyed by
//! [`ToastId`], next to the last published snapshot of the queue. Each time
//! the queue changes it runs a pass:
//!
//! 1. toasts missing from the new queue slide out horizontally; their records
//!    are deleted only once the slide completes,
//! 2. once no exit is outstanding, every toast of the new queue gets a target
//!    slot, newcomers slide in from the trailing edge and survivors move to
//!    their new slot,
//! 3. the new queue becomes the published snapshot.
//!
//! Passes never overlap. A queue change observed while a pass still waits for
//! its exits is held back, and only the most recent one is kept.

pub mod gesture;
mod layout;

pub use gesture::{classify_release, ExitDirection, Release, SwipeState};
pub use layout::Layout;

use crate::animation::{AnimationHandle, Animator, SpringConfig, Timeline, ValueId};
use crate::domain::toast::{Category, Notification, ToastId};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Offsets closer than this are considered equal.
const OFFSET_EPSILON: f32 = 0.01;

#[derive(Debug)]
struct AnimationState {
    x: ValueId,
    y: ValueId,
    target_y: f32,
    measured_height: Option<f32>,
    exit_direction: ExitDirection,
    swipe: SwipeState,
}

/// Result of a completed reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassOutcome {
    /// Toasts that started their entrance during this pass.
    pub entered: Vec<ToastId>,
    /// Whether at least one newcomer is an error toast.
    pub new_error: bool,
}

/// Presentation data for one rendered toast.
#[derive(Debug, Clone, Copy)]
pub struct ToastView<'a, A> {
    pub toast: &'a Notification<A>,
    pub x: f32,
    pub y: f32,
}

pub struct Reconciler<A = (), M = Timeline> {
    animator: M,
    layout: Layout,
    transition: Duration,
    spring: SpringConfig,
    states: HashMap<ToastId, AnimationState>,
    cached: Vec<Notification<A>>,
    /// Target of the pass currently waiting for exits.
    pending: Option<Vec<Notification<A>>>,
    /// Latest queue observed while a pass was pending.
    queued: Option<Vec<Notification<A>>>,
    exits: HashMap<AnimationHandle, ToastId>,
    springs: HashMap<AnimationHandle, ToastId>,
}

impl<A: Clone> Reconciler<A, Timeline> {
    /// Creates a reconciler backed by a fresh [`Timeline`].
    #[must_use]
    pub fn with_layout(layout: Layout, transition: Duration, spring: SpringConfig) -> Self {
        Self::new(Timeline::new(), layout, transition, spring)
    }
}

impl<A: Clone, M: Animator> Reconciler<A, M> {
    #[must_use]
    pub fn new(animator: M, layout: Layout, transition: Duration, spring: SpringConfig) -> Self {
        Self {
            animator,
            layout,
            transition,
            spring,
            states: HashMap::new(),
            cached: Vec::new(),
            pending: None,
            queued: None,
            exits: HashMap::new(),
            springs: HashMap::new(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Updates the overlay width used for entrances, exits and the swipe threshold.
    pub fn set_screen_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.layout.screen_width = width;
        }
    }

    /// The last published snapshot.
    #[must_use]
    pub fn cached(&self) -> &[Notification<A>] {
        &self.cached
    }

    #[must_use]
    pub fn animator(&self) -> &M {
        &self.animator
    }

    #[must_use]
    pub fn is_tracking(&self, id: &ToastId) -> bool {
        self.states.contains_key(id)
    }

    /// Number of toasts with an animation record, exiting ones included.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.states.len()
    }

    /// Current `(x, y)` offsets of a tracked toast.
    #[must_use]
    pub fn offsets(&self, id: &ToastId) -> Option<(f32, f32)> {
        let state = self.states.get(id)?;
        Some((self.animator.value(state.x)?, self.animator.value(state.y)?))
    }

    /// Slot the toast is moving to, or resting at.
    #[must_use]
    pub fn target_offset(&self, id: &ToastId) -> Option<f32> {
        self.states.get(id).map(|state| state.target_y)
    }

    #[must_use]
    pub fn swipe_state(&self, id: &ToastId) -> Option<SwipeState> {
        self.states.get(id).map(|state| state.swipe)
    }

    #[must_use]
    pub fn exit_direction(&self, id: &ToastId) -> Option<ExitDirection> {
        self.states.get(id).map(|state| state.exit_direction)
    }

    #[must_use]
    pub fn is_pass_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns whether anything is still moving or waiting to be reconciled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || self.queued.is_some() || self.animator.next_deadline().is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.animator.next_deadline()
    }

    /// Reconciles against a new queue.
    ///
    /// Returns the outcome when the pass completes right away, which is the
    /// case whenever nothing has to exit first.
    pub fn observe(&mut self, queue: &[Notification<A>]) -> Option<PassOutcome> {
        if self.pending.is_some() {
            tracing::debug!(len = queue.len(), "pass pending, holding back queue change");
            self.queued = Some(queue.to_vec());
            return None;
        }
        self.begin_pass(queue.to_vec())
    }

    /// Advances animations to `now`, finishing exits and any passes waiting on them.
    pub fn advance_to(&mut self, now: Duration) -> Vec<PassOutcome> {
        for handle in self.animator.advance_to(now) {
            if let Some(id) = self.exits.remove(&handle) {
                self.finish_exit(&id);
            } else if let Some(id) = self.springs.remove(&handle) {
                if let Some(state) = self.states.get_mut(&id) {
                    if state.swipe == SwipeState::SpringingBack(handle) {
                        state.swipe = SwipeState::Idle;
                    }
                }
            }
        }

        let mut outcomes = Vec::new();
        if self.exits.is_empty() {
            if let Some(target) = self.pending.take() {
                outcomes.push(self.finish_pass(target));
            }
        }
        while self.pending.is_none() {
            let Some(next) = self.queued.take() else {
                break;
            };
            outcomes.extend(self.begin_pass(next));
        }
        outcomes
    }

    /// Records a measured height and moves every toast whose slot changed.
    ///
    /// Returns `false` for unknown toasts and unchanged heights.
    pub fn report_height(&mut self, id: &ToastId, height: f32) -> bool {
        if !height.is_finite() || height <= 0.0 {
            return false;
        }
        let Some(state) = self.states.get_mut(id) else {
            tracing::debug!(%id, "height report for untracked toast");
            return false;
        };
        if state
            .measured_height
            .is_some_and(|known| (known - height).abs() <= OFFSET_EPSILON)
        {
            return false;
        }
        state.measured_height = Some(height);
        self.relayout();
        true
    }

    /// Binds the horizontal offset to the pointer. Refused while exiting.
    pub fn start_swipe(&mut self, id: &ToastId) -> bool {
        let Some(state) = self.states.get_mut(id) else {
            return false;
        };
        if !state.swipe.can_start_drag() {
            tracing::debug!(%id, "swipe refused, toast is exiting");
            return false;
        }
        if let SwipeState::SpringingBack(handle) = state.swipe {
            self.springs.remove(&handle);
        }
        self.animator.cancel(state.x);
        state.swipe = SwipeState::Dragging;
        true
    }

    /// Sets the horizontal offset to the total drag displacement `dx`.
    pub fn move_swipe(&mut self, id: &ToastId, dx: f32) -> bool {
        match self.states.get(id) {
            Some(state) if state.swipe.is_dragging() => {
                self.animator.set_value(state.x, dx);
                true
            }
            _ => false,
        }
    }

    /// Ends a drag at displacement `dx`.
    ///
    /// On [`Release::Dismiss`] the exit direction is recorded and the caller
    /// is expected to hide the toast; the record itself stays until the exit
    /// slide completes. Returns `None` when no drag was in progress.
    pub fn end_swipe(&mut self, id: &ToastId, dx: f32) -> Option<Release> {
        let is_persistent = self
            .cached
            .iter()
            .find(|toast| toast.id() == id)
            .is_none_or(Notification::is_persistent);
        let state = self.states.get_mut(id)?;
        if !state.swipe.is_dragging() {
            return None;
        }
        self.animator.set_value(state.x, dx);

        let release = classify_release(dx, is_persistent, &self.layout);
        match release {
            Release::Dismiss(direction) => {
                state.exit_direction = direction;
                state.swipe = SwipeState::Idle;
            }
            Release::SpringBack => {
                let handle = self.animator.spring(state.x, 0.0, self.spring);
                self.springs.insert(handle, id.clone());
                state.swipe = SwipeState::SpringingBack(handle);
            }
        }
        tracing::debug!(%id, dx, ?release, "swipe released");
        Some(release)
    }

    /// Presentation data for the published snapshot, in stacking order.
    #[must_use]
    pub fn views(&self) -> Vec<ToastView<'_, A>> {
        self.cached
            .iter()
            .filter_map(|toast| {
                let state = self.states.get(toast.id())?;
                Some(ToastView {
                    toast,
                    x: self.animator.value(state.x)?,
                    y: self.animator.value(state.y)?,
                })
            })
            .collect()
    }

    /// Drops every record and pending pass. Nothing completes afterwards.
    pub fn clear(&mut self) {
        for (_, state) in self.states.drain() {
            self.animator.remove(state.x);
            self.animator.remove(state.y);
        }
        self.cached.clear();
        self.pending = None;
        self.queued = None;
        self.exits.clear();
        self.springs.clear();
    }

    fn begin_pass(&mut self, target: Vec<Notification<A>>) -> Option<PassOutcome> {
        let removed: Vec<ToastId> = {
            let keep: HashSet<&ToastId> = target.iter().map(Notification::id).collect();
            self.cached
                .iter()
                .map(Notification::id)
                .filter(|id| !keep.contains(id))
                .cloned()
                .collect()
        };
        for id in &removed {
            self.start_exit(id);
        }

        if self.exits.is_empty() {
            Some(self.finish_pass(target))
        } else {
            tracing::debug!(exits = self.exits.len(), "pass waiting for exits");
            self.pending = Some(target);
            None
        }
    }

    fn start_exit(&mut self, id: &ToastId) {
        let Some(state) = self.states.get_mut(id) else {
            return;
        };
        if state.swipe.is_exiting() {
            return;
        }
        if let SwipeState::SpringingBack(handle) = state.swipe {
            self.springs.remove(&handle);
        }
        self.animator.cancel(state.x);
        let to = state.exit_direction.off_screen(self.layout.screen_width);
        let handle = self.animator.timing(state.x, to, self.transition);
        state.swipe = SwipeState::Exiting(handle);
        self.exits.insert(handle, id.clone());
    }

    fn finish_exit(&mut self, id: &ToastId) {
        if let Some(state) = self.states.remove(id) {
            self.animator.set_value(state.y, 0.0);
            self.animator.remove(state.x);
            self.animator.remove(state.y);
            tracing::debug!(%id, "exit complete");
        }
    }

    fn finish_pass(&mut self, target: Vec<Notification<A>>) -> PassOutcome {
        let slots = self.layout.slots(
            target
                .iter()
                .map(|toast| self.states.get(toast.id()).and_then(|state| state.measured_height)),
        );

        let mut outcome = PassOutcome::default();
        for (toast, slot) in target.iter().zip(slots) {
            if let Some(state) = self.states.get_mut(toast.id()) {
                reposition(&mut self.animator, state, slot, self.transition);
                continue;
            }
            let x = self.animator.create(self.layout.screen_width);
            let y = self.animator.create(slot);
            self.animator.timing(x, 0.0, self.transition);
            self.states.insert(
                toast.id().clone(),
                AnimationState {
                    x,
                    y,
                    target_y: slot,
                    measured_height: None,
                    exit_direction: ExitDirection::default(),
                    swipe: SwipeState::Idle,
                },
            );
            outcome.entered.push(toast.id().clone());
            outcome.new_error |= toast.category() == Category::Error;
        }

        tracing::debug!(
            len = target.len(),
            entered = outcome.entered.len(),
            "reconciliation pass complete"
        );
        self.cached = target;
        outcome
    }

    fn relayout(&mut self) {
        let slots = self.layout.slots(
            self.cached
                .iter()
                .map(|toast| self.states.get(toast.id()).and_then(|state| state.measured_height)),
        );
        for (toast, slot) in self.cached.iter().zip(slots) {
            if let Some(state) = self.states.get_mut(toast.id()) {
                reposition(&mut self.animator, state, slot, self.transition);
            }
        }
    }
}

/// Animates a survivor to `slot`. Exiting toasts keep their place.
fn reposition<M: Animator>(
    animator: &mut M,
    state: &mut AnimationState,
    slot: f32,
    duration: Duration,
) {
    if state.swipe.is_exiting() || (state.target_y - slot).abs() <= OFFSET_EPSILON {
        return;
    }
    state.target_y = slot;
    animator.timing(state.y, slot, duration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::toast::ToastDraft;
    use crate::queue::{reduce, Action, SequentialIds};
    use crate::test_utils::assert_abs_diff_eq;

    const TRANSITION: Duration = Duration::from_millis(200);

    struct Harness {
        reconciler: Reconciler,
        ids: SequentialIds,
        queue: Vec<Notification>,
        now: Duration,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                reconciler: Reconciler::with_layout(
                    Layout::default(),
                    TRANSITION,
                    SpringConfig::default(),
                ),
                ids: SequentialIds::new(),
                queue: Vec::new(),
                now: Duration::ZERO,
            }
        }

        fn dispatch(&mut self, action: Action) -> Option<PassOutcome> {
            self.queue = reduce(&self.queue, action, &mut self.ids);
            self.reconciler.observe(&self.queue)
        }

        fn push(&mut self, draft: ToastDraft) -> ToastId {
            self.dispatch(Action::Push(draft));
            self.queue[0].id().clone()
        }

        fn advance(&mut self, by: Duration) -> Vec<PassOutcome> {
            self.now += by;
            self.reconciler.advance_to(self.now)
        }

        fn settle(&mut self) {
            self.advance(Duration::from_secs(5));
        }
    }

    #[test]
    fn newcomer_slides_in_from_trailing_edge() {
        let mut h = Harness::new();
        let outcome = h.dispatch(Action::Push(ToastDraft::info("hello")));
        let id = h.queue[0].id().clone();

        assert_eq!(
            outcome,
            Some(PassOutcome {
                entered: vec![id.clone()],
                new_error: false,
            })
        );
        let (x, y) = h.reconciler.offsets(&id).unwrap_or_default();
        assert_abs_diff_eq!(x, Layout::default().screen_width);
        assert_abs_diff_eq!(y, Layout::default().top_inset);

        h.advance(TRANSITION);
        let (x, y) = h.reconciler.offsets(&id).unwrap_or_default();
        assert_abs_diff_eq!(x, 0.0);
        assert_abs_diff_eq!(y, Layout::default().top_inset);
    }

    #[test]
    fn removed_toast_keeps_record_until_exit_completes() {
        let mut h = Harness::new();
        let a = h.push(ToastDraft::info("A"));
        let b = h.push(ToastDraft::info("B"));
        h.settle();

        assert!(h.dispatch(Action::HideById(b.clone())).is_none());
        assert!(h.reconciler.is_tracking(&b));
        assert!(h.reconciler.is_pass_pending());

        h.advance(Duration::from_millis(100));
        assert!(h.reconciler.is_tracking(&b));

        let outcomes = h.advance(Duration::from_millis(100));
        assert_eq!(outcomes, vec![PassOutcome::default()]);
        assert!(!h.reconciler.is_tracking(&b));
        assert_abs_diff_eq!(
            h.reconciler.target_offset(&a).unwrap_or_default(),
            Layout::default().top_inset
        );
        assert_eq!(h.reconciler.cached().len(), 1);
    }

    #[test]
    fn survivors_move_up_after_front_removal() {
        let mut h = Harness::new();
        let second = h.push(ToastDraft::info("second"));
        let first = h.push(ToastDraft::info("first"));
        h.settle();
        h.reconciler.report_height(&first, 80.0);
        h.reconciler.report_height(&second, 100.0);
        h.settle();
        assert_abs_diff_eq!(h.reconciler.target_offset(&second).unwrap_or_default(), 96.0);

        h.dispatch(Action::HideById(first));
        h.advance(TRANSITION);
        assert_abs_diff_eq!(h.reconciler.target_offset(&second).unwrap_or_default(), 8.0);
        h.advance(TRANSITION);
        let (_, y) = h.reconciler.offsets(&second).unwrap_or_default();
        assert_abs_diff_eq!(y, 8.0);
    }

    #[test]
    fn default_exit_slides_right() {
        let mut h = Harness::new();
        let id = h.push(ToastDraft::info("bye"));
        h.settle();
        h.dispatch(Action::HideById(id.clone()));
        h.advance(Duration::from_millis(199));
        let (x, _) = h.reconciler.offsets(&id).unwrap_or_default();
        assert!(x > 300.0, "expected toast near the right edge, x = {x}");
    }

    #[test]
    fn new_error_reported_once_per_pass() {
        let mut h = Harness::new();
        let outcome = h.dispatch(Action::Push(ToastDraft::info("calm")));
        assert!(!outcome.is_some_and(|o| o.new_error));

        // Two errors arrive while a removal holds the pass back.
        let calm = h.queue[0].id().clone();
        h.settle();
        h.dispatch(Action::HideById(calm));
        h.dispatch(Action::Push(ToastDraft::error("e1")));
        h.dispatch(Action::Push(ToastDraft::error("e2")));
        let outcomes = h.advance(TRANSITION);

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].new_error);
        assert!(outcomes[1].new_error);
        assert_eq!(outcomes[1].entered.len(), 2);
    }

    #[test]
    fn queue_changes_during_pending_pass_are_coalesced() {
        let mut h = Harness::new();
        let a = h.push(ToastDraft::info("A"));
        h.settle();
        h.dispatch(Action::HideById(a));
        let b = h.push(ToastDraft::info("B"));
        assert!(!h.reconciler.is_tracking(&b));

        let outcomes = h.advance(TRANSITION);
        assert_eq!(outcomes.last().map(|o| o.entered.clone()), Some(vec![b.clone()]));
        assert_eq!(h.reconciler.tracked_count(), 1);
        assert_abs_diff_eq!(h.reconciler.target_offset(&b).unwrap_or_default(), 8.0);
    }

    #[test]
    fn height_report_relayouts_followers() {
        let mut h = Harness::new();
        let lower = h.push(ToastDraft::info("lower"));
        let upper = h.push(ToastDraft::info("upper"));
        h.settle();
        assert_abs_diff_eq!(h.reconciler.target_offset(&lower).unwrap_or_default(), 80.0);

        assert!(h.reconciler.report_height(&upper, 120.0));
        assert_abs_diff_eq!(h.reconciler.target_offset(&lower).unwrap_or_default(), 136.0);
        assert!(!h.reconciler.report_height(&upper, 120.0));
        assert!(!h.reconciler.report_height(&ToastId::new("ghost"), 50.0));
    }

    #[test]
    fn short_swipe_springs_back_to_rest() {
        let mut h = Harness::new();
        let id = h.push(ToastDraft::info("drag me"));
        h.settle();

        assert!(h.reconciler.start_swipe(&id));
        assert!(h.reconciler.move_swipe(&id, 40.0));
        assert_eq!(h.reconciler.end_swipe(&id, 40.0), Some(Release::SpringBack));
        assert!(matches!(
            h.reconciler.swipe_state(&id),
            Some(SwipeState::SpringingBack(_))
        ));

        h.settle();
        assert_eq!(h.reconciler.swipe_state(&id), Some(SwipeState::Idle));
        let (x, _) = h.reconciler.offsets(&id).unwrap_or_default();
        assert_abs_diff_eq!(x, 0.0);
    }

    #[test]
    fn far_swipe_records_direction_and_exits_that_way() {
        let mut h = Harness::new();
        let id = h.push(ToastDraft::info("swipe"));
        h.settle();

        h.reconciler.start_swipe(&id);
        h.reconciler.move_swipe(&id, -200.0);
        assert_eq!(
            h.reconciler.end_swipe(&id, -200.0),
            Some(Release::Dismiss(ExitDirection::Left))
        );
        assert!(h.reconciler.is_tracking(&id));

        h.dispatch(Action::HideById(id.clone()));
        h.advance(Duration::from_millis(199));
        let (x, _) = h.reconciler.offsets(&id).unwrap_or_default();
        assert!(x < -300.0, "expected toast near the left edge, x = {x}");
        h.advance(Duration::from_millis(1));
        assert!(!h.reconciler.is_tracking(&id));
    }

    #[test]
    fn persistent_toast_springs_back_from_far_swipe() {
        let mut h = Harness::new();
        let id = h.push(ToastDraft::warning("stay").persistent());
        h.settle();
        h.reconciler.start_swipe(&id);
        assert_eq!(h.reconciler.end_swipe(&id, 380.0), Some(Release::SpringBack));
    }

    #[test]
    fn removal_cancels_drag_and_blocks_new_one() {
        let mut h = Harness::new();
        let id = h.push(ToastDraft::info("busy"));
        h.settle();
        h.reconciler.start_swipe(&id);
        h.reconciler.move_swipe(&id, 30.0);

        h.dispatch(Action::HideAll);
        assert!(matches!(h.reconciler.swipe_state(&id), Some(SwipeState::Exiting(_))));
        assert!(!h.reconciler.move_swipe(&id, 60.0));
        assert!(!h.reconciler.start_swipe(&id));
        assert_eq!(h.reconciler.end_swipe(&id, 60.0), None);
    }

    #[test]
    fn views_follow_published_order() {
        let mut h = Harness::new();
        h.push(ToastDraft::info("old"));
        h.push(ToastDraft::success("new"));
        let views = h.reconciler.views();
        let messages: Vec<&str> = views.iter().map(|view| view.toast.message()).collect();
        assert_eq!(messages, ["new", "old"]);
        assert!(views[0].y < views[1].y);
    }

    #[test]
    fn clear_drops_everything() {
        let mut h = Harness::new();
        let id = h.push(ToastDraft::info("x"));
        h.dispatch(Action::HideById(id));
        h.reconciler.clear();
        assert_eq!(h.reconciler.tracked_count(), 0);
        assert!(!h.reconciler.is_busy());
        assert!(h.advance(TRANSITION).is_empty());
    }
}
