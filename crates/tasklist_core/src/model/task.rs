//! Task record and identifier.
//!
//! # Responsibility
//! - Define the canonical record persisted in the durable slot.
//! - Normalize user-entered task text.
//!
//! # Invariants
//! - `text` is trimmed and non-empty for every task admitted by the store.
//! - `is_editing` is a UI-transient flag and never part of task identity.
//! - Wire fields are exactly `id`, `text`, `isEditing`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Integer identifier of a task, unique within one store.
///
/// Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parses the decimal path segment used by `/todo/{id}`.
    ///
    /// Returns `None` for empty, non-numeric or out-of-range input; callers
    /// render that as not-found rather than failing.
    pub fn parse_segment(segment: &str) -> Option<Self> {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<i64>().ok().map(Self)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, non-empty task text.
    pub text: String,
    /// Kept only for storage format compatibility.
    #[serde(default)]
    pub is_editing: bool,
}

impl Task {
    /// Creates a task with `is_editing = false`.
    ///
    /// Does not validate `text`; admission checks live in
    /// [`normalize_text`] and the store.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_editing: false,
        }
    }
}

/// Trims user input and rejects whitespace-only text.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
