//! Persistence Port
//!
//! The task list is stored as one JSON array under a fixed key.
//! The store only sees the `TaskStorage` trait, so the browser adapter and
//! the in-memory fake are interchangeable.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageResult;
use crate::task::Task;

/// Key the task list is stored under
pub const STORAGE_KEY: &str = "todos";

/// Load/save bridge for the full task list
pub trait TaskStorage {
    /// Read the persisted list; an absent value is an empty list
    fn load(&self) -> StorageResult<Vec<Task>>;

    /// Overwrite the persisted list with `tasks`
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}

// ========================
// JSON Codec
// ========================

/// Serialize the task list to its persisted JSON form
pub fn encode_tasks(tasks: &[Task]) -> StorageResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parse a persisted JSON value back into a task list
pub fn decode_tasks(raw: &str) -> StorageResult<Vec<Task>> {
    Ok(serde_json::from_str(raw)?)
}

// ========================
// In-memory Storage
// ========================

/// In-memory stand-in for browser storage.
///
/// Clones share the same cell, so a test can hand one clone to a store,
/// drop the store, and "reload" from another clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    raw: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value (valid or not)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Current raw value, if anything was written
    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        match self.raw.borrow().as_deref() {
            Some(raw) => decode_tasks(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let encoded = encode_tasks(tasks)?;
        *self.raw.borrow_mut() = Some(encoded);
        Ok(())
    }
}
