// SPDX-License-Identifier: MPL-2.0
//! Deferred, cancellable callbacks on the session clock.

mod dismiss;

pub use dismiss::DismissTimers;

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Identifies one scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// One-shot deadline scheduling.
pub trait Scheduler {
    fn schedule(&mut self, at: Duration) -> TimerToken;

    /// Cancels a deadline. Returns `false` if it already fired or was cancelled.
    fn cancel(&mut self, token: TimerToken) -> bool;

    /// Removes and returns every deadline at or before `now`, earliest first.
    fn pop_due(&mut self, now: Duration) -> Vec<TimerToken>;

    fn next_deadline(&self) -> Option<Duration>;
}

/// Binary-heap [`Scheduler`] with lazy removal of cancelled entries.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<(Duration, TimerToken)>>,
    live: HashSet<TimerToken>,
    next: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse((_, token))) = self.heap.peek().copied() {
            if self.live.contains(&token) {
                break;
            }
            self.heap.pop();
        }
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, at: Duration) -> TimerToken {
        self.next += 1;
        let token = TimerToken(self.next);
        self.heap.push(Reverse((at, token)));
        self.live.insert(token);
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let removed = self.live.remove(&token);
        self.discard_cancelled();
        removed
    }

    fn pop_due(&mut self, now: Duration) -> Vec<TimerToken> {
        let mut due = Vec::new();
        while let Some(Reverse((at, token))) = self.heap.peek().copied() {
            if at > now {
                break;
            }
            self.heap.pop();
            if self.live.remove(&token) {
                due.push(token);
            }
        }
        self.discard_cancelled();
        due
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse((at, _))| *at)
    }
}
