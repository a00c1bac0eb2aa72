//! Task Entity
//!
//! The only persisted record: identity, text and completion flag.

use serde::{Deserialize, Serialize};

/// Stable identity of a task (milliseconds-based, see `ids`)
pub type TaskId = u64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, immutable once assigned
    pub id: TaskId,
    /// Display text, stored as typed
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// True when `text` has nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
