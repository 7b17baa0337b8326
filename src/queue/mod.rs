// SPDX-License-Identifier: MPL-2.0
//! Toast queue reducer.
//!
//! The queue is an ordered list of notifications, newest first. Every change
//! goes through [`reduce`], which never mutates its input and always returns a
//! freshly allocated list.

pub mod ids;

pub use ids::{IdGenerator, SequentialIds, UuidIds};

use crate::domain::toast::{Category, Notification, NotificationPatch, ToastDraft, ToastId};

/// Mutations a caller may dispatch against the queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<A = ()> {
    /// Prepends a toast with a freshly generated id.
    Push(ToastDraft<A>),
    /// Prepends a toast carrying its own id, replacing any entry with that id.
    DistinctIdPush(Notification<A>),
    /// Prepends a toast with a fresh id, replacing every entry with the same message.
    DistinctMessagePush(ToastDraft<A>),
    /// Shallow-merges the patch over the matching entry.
    PatchById {
        id: ToastId,
        patch: NotificationPatch<A>,
    },
    HideById(ToastId),
    HideByMessage(String),
    HideByCategory(Category),
    HideAll,
}

impl<A> Action<A> {
    /// Short name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Push(_) => "push",
            Action::DistinctIdPush(_) => "distinct-id-push",
            Action::DistinctMessagePush(_) => "distinct-message-push",
            Action::PatchById { .. } => "patch-by-id",
            Action::HideById(_) => "hide-by-id",
            Action::HideByMessage(_) => "hide-by-message",
            Action::HideByCategory(_) => "hide-by-category",
            Action::HideAll => "hide-all",
        }
    }
}

/// Applies `action` to `queue` and returns the new queue.
///
/// Unknown ids and messages are silent no-ops: the result then equals the
/// input by value.
pub fn reduce<A: Clone>(
    queue: &[Notification<A>],
    action: Action<A>,
    ids: &mut dyn IdGenerator,
) -> Vec<Notification<A>> {
    match action {
        Action::Push(draft) => prepend(draft.with_id(ids.next_id()), queue.iter().cloned()),
        Action::DistinctIdPush(toast) => {
            let rest = queue
                .iter()
                .filter(|existing| existing.id() != toast.id())
                .cloned()
                .collect::<Vec<_>>();
            prepend(toast, rest)
        }
        Action::DistinctMessagePush(draft) => {
            let rest = queue
                .iter()
                .filter(|existing| existing.message() != draft.message())
                .cloned()
                .collect::<Vec<_>>();
            prepend(draft.with_id(ids.next_id()), rest)
        }
        Action::PatchById { id, patch } => {
            let mut next = queue.to_vec();
            if let Some(target) = next.iter_mut().find(|toast| *toast.id() == id) {
                patch.apply_to(target);
            }
            next
        }
        Action::HideById(id) => retain(queue, |toast| *toast.id() != id),
        Action::HideByMessage(message) => retain(queue, |toast| toast.message() != message),
        Action::HideByCategory(category) => retain(queue, |toast| toast.category() != category),
        Action::HideAll => Vec::new(),
    }
}

fn prepend<A>(
    head: Notification<A>,
    rest: impl IntoIterator<Item = Notification<A>>,
) -> Vec<Notification<A>> {
    std::iter::once(head).chain(rest).collect()
}

fn retain<A: Clone>(
    queue: &[Notification<A>],
    keep: impl Fn(&Notification<A>) -> bool,
) -> Vec<Notification<A>> {
    queue.iter().filter(|toast| keep(toast)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: &[Notification], draft: ToastDraft, ids: &mut SequentialIds) -> Vec<Notification> {
        reduce(queue, Action::Push(draft), ids)
    }

    fn sample(ids: &mut SequentialIds) -> Vec<Notification> {
        let queue = push(&[], ToastDraft::info("one"), ids);
        let queue = push(&queue, ToastDraft::error("two"), ids);
        let queue = push(&queue, ToastDraft::info("three"), ids);
        push(&queue, ToastDraft::warning("two"), ids)
    }

    fn messages(queue: &[Notification]) -> Vec<&str> {
        queue.iter().map(Notification::message).collect()
    }

    #[test]
    fn push_prepends_with_fresh_id() {
        let mut ids = SequentialIds::new();
        let queue = push(&[], ToastDraft::info("first"), &mut ids);
        let queue = push(&queue, ToastDraft::info("second"), &mut ids);

        assert_eq!(messages(&queue), ["second", "first"]);
        assert_ne!(queue[0].id(), queue[1].id());
        assert!(!queue[0].id().as_str().is_empty());
    }

    #[test]
    fn push_does_not_touch_input() {
        let mut ids = SequentialIds::new();
        let before = sample(&mut ids);
        let snapshot = before.clone();
        let _ = push(&before, ToastDraft::success("new"), &mut ids);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn distinct_id_push_replaces_and_moves_to_front() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let target = queue[2].id().clone();

        let replacement = ToastDraft::success("replaced").with_id(target.clone());
        let next = reduce(&queue, Action::DistinctIdPush(replacement), &mut ids);

        assert_eq!(next.len(), queue.len());
        assert_eq!(next[0].id(), &target);
        assert_eq!(next[0].message(), "replaced");
        assert_eq!(next.iter().filter(|toast| toast.id() == &target).count(), 1);
    }

    #[test]
    fn distinct_id_push_with_new_id_grows_queue() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let toast = ToastDraft::info("custom").with_id("custom-id");
        let next = reduce(&queue, Action::DistinctIdPush(toast), &mut ids);
        assert_eq!(next.len(), queue.len() + 1);
        assert_eq!(next[0].id().as_str(), "custom-id");
    }

    #[test]
    fn distinct_message_push_removes_all_duplicates() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let next = reduce(
            &queue,
            Action::DistinctMessagePush(ToastDraft::success("two")),
            &mut ids,
        );
        assert_eq!(messages(&next), ["two", "three", "one"]);
        assert_eq!(next[0].category(), Category::Success);
        assert!(queue.iter().all(|old| old.id() != next[0].id()));
    }

    #[test]
    fn patch_by_id_merges_in_place() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let target = queue[1].id().clone();
        let next = reduce(
            &queue,
            Action::PatchById {
                id: target.clone(),
                patch: NotificationPatch::new().message("patched"),
            },
            &mut ids,
        );
        assert_eq!(messages(&next), ["two", "patched", "two", "one"]);
        assert_eq!(next[1].id(), &target);
        assert_eq!(next[1].category(), queue[1].category());
    }

    #[test]
    fn patch_by_unknown_id_is_noop() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let next = reduce(
            &queue,
            Action::PatchById {
                id: ToastId::new("missing"),
                patch: NotificationPatch::new().message("patched"),
            },
            &mut ids,
        );
        assert_eq!(next, queue);
    }

    #[test]
    fn hide_by_id_removes_only_match() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let target = queue[0].id().clone();
        let next = reduce(&queue, Action::HideById(target.clone()), &mut ids);
        assert_eq!(next.len(), 3);
        assert!(next.iter().all(|toast| toast.id() != &target));

        let again = reduce(&next, Action::HideById(target), &mut ids);
        assert_eq!(again, next);
    }

    #[test]
    fn hide_by_message_removes_every_match() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let next = reduce(&queue, Action::HideByMessage("two".into()), &mut ids);
        assert_eq!(messages(&next), ["three", "one"]);
    }

    #[test]
    fn hide_by_category_preserves_relative_order() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let next = reduce(&queue, Action::HideByCategory(Category::Info), &mut ids);
        assert_eq!(messages(&next), ["two", "two"]);
        assert!(next.iter().all(|toast| toast.category() != Category::Info));
    }

    #[test]
    fn hide_all_then_anything_stays_empty() {
        let mut ids = SequentialIds::new();
        let queue = sample(&mut ids);
        let empty = reduce(&queue, Action::HideAll, &mut ids);
        assert!(empty.is_empty());

        let follow_ups: Vec<Action> = vec![
            Action::HideById(ToastId::new("toast-1")),
            Action::HideByMessage("one".into()),
            Action::HideByCategory(Category::Error),
            Action::HideAll,
            Action::PatchById {
                id: ToastId::new("toast-2"),
                patch: NotificationPatch::new().persistent(true),
            },
        ];
        for action in follow_ups {
            assert!(reduce(&empty, action, &mut ids).is_empty());
        }
    }

    #[test]
    fn action_kind_names() {
        assert_eq!(Action::<()>::HideAll.kind(), "hide-all");
        assert_eq!(Action::<()>::Push(ToastDraft::info("x")).kind(), "push");
    }
}
