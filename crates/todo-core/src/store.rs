//! Task Store
//!
//! Ordered task list plus the operations that mutate it. Every mutating
//! call mirrors the full list to storage before returning.

use crate::ids::IdSource;
use crate::storage::TaskStorage;
use crate::task::{is_blank, Task, TaskId};

/// Task list bound to a persistence port and an id source
#[derive(Debug, Clone)]
pub struct TaskStore<S, I> {
    tasks: Vec<Task>,
    storage: S,
    ids: I,
}

impl<S: TaskStorage, I: IdSource> TaskStore<S, I> {
    /// Read the persisted list and write it straight back.
    ///
    /// Malformed data is logged and replaced with an empty list.
    pub fn load(storage: S, mut ids: I) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!("discarding persisted tasks: {}", e);
                Vec::new()
            }
        };
        if let Some(max) = tasks.iter().map(|t| t.id).max() {
            ids.observe(max);
        }
        tracing::info!("loaded {} tasks", tasks.len());

        let store = Self { tasks, storage, ids };
        store.persist();
        store
    }

    // ========================
    // Queries
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn active_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Whether the "clear completed" control should be offered
    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|t| t.completed)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Mutations
    // ========================

    /// Append a task; blank text is ignored. Text is stored as typed.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let added = if is_blank(text) {
            None
        } else {
            let task = Task::new(self.ids.next_id(), text);
            let id = task.id;
            self.tasks.push(task);
            tracing::debug!(id, "task added");
            Some(id)
        };
        self.persist();
        added
    }

    /// Flip the completion flag; unknown ids are a no-op
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let found = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| t.completed = !t.completed)
            .is_some();
        tracing::debug!(id, found, "task toggled");
        self.persist();
        found
    }

    /// Remove the task with `id`; unknown ids are a no-op
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        tracing::debug!(id, removed, "task deleted");
        self.persist();
        removed
    }

    /// Replace a task's text; blank text and unknown ids are a no-op
    pub fn edit_text(&mut self, id: TaskId, new_text: &str) -> bool {
        let updated = !is_blank(new_text)
            && self
                .tasks
                .iter_mut()
                .find(|t| t.id == id)
                .map(|t| t.text = new_text.to_string())
                .is_some();
        tracing::debug!(id, updated, "task text edited");
        self.persist();
        updated
    }

    /// Drop every completed task, returning how many went
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        tracing::debug!(removed, "completed tasks cleared");
        self.persist();
        removed
    }

    /// Overwrite storage with the current list. Write failures are logged only.
    pub fn persist(&self) {
        if let Err(e) = self.storage.save(&self.tasks) {
            tracing::error!("failed to persist {} tasks: {}", self.tasks.len(), e);
        }
    }
}
