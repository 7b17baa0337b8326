// SPDX-License-Identifier: MPL-2.0
//! Toast id generation.

use crate::domain::toast::ToastId;

/// Source of fresh toast ids.
pub trait IdGenerator {
    /// Returns an id never handed out before by this generator.
    fn next_id(&mut self) -> ToastId;
}

/// Random v4 UUIDs. Used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> ToastId {
        ToastId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `toast-1`, `toast-2`, ... ids for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ToastId {
        self.next += 1;
        ToastId::new(format!("toast-{}", self.next))
    }
}
