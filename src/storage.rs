//! Browser Storage Adapter
//!
//! `TaskStorage` backed by `window.localStorage`. The storage handle is looked
//! up on every call, so the adapter itself stays `Send + Sync` and can live
//! inside a signal.

use todo_core::{decode_tasks, encode_tasks, StorageError, StorageResult, Task, TaskStorage, STORAGE_KEY};

/// Task list persisted under a single localStorage key
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    pub fn new() -> Self {
        Self { key: STORAGE_KEY }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl TaskStorage for BrowserStorage {
    fn load(&self) -> StorageResult<Vec<Task>> {
        let raw = local_storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?;
        match raw {
            Some(raw) => decode_tasks(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let encoded = encode_tasks(tasks)?;
        local_storage()?
            .set_item(self.key, &encoded)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
