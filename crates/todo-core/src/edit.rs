//! Edit-Mode Tracker
//!
//! At most one task is renamed at a time. The scratch text lives here until
//! it is committed to the store or thrown away.

use crate::ids::IdSource;
use crate::storage::TaskStorage;
use crate::store::TaskStore;
use crate::task::{is_blank, TaskId};

/// Scratch state for the task being renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TaskId,
    pub scratch: String,
}

/// Result of trying to commit an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Text committed, editor closed
    Saved(TaskId),
    /// Scratch was blank, editor stays open
    Rejected,
    /// Nothing was being edited
    NotEditing,
}

/// Idle / Editing(id, scratch) state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTracker {
    session: Option<EditSession>,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the editor on `id`. Any other open edit is silently replaced.
    pub fn start(&mut self, id: TaskId, current_text: &str) {
        if let Some(previous) = &self.session {
            if previous.id != id {
                tracing::debug!(previous = previous.id, id, "edit session replaced");
            }
        }
        self.session = Some(EditSession {
            id,
            scratch: current_text.to_string(),
        });
    }

    /// Update the scratch buffer; ignored while idle
    pub fn set_scratch(&mut self, text: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.scratch = text.into();
        }
    }

    /// Commit the scratch text to `store` and close the editor
    pub fn save<S: TaskStorage, I: IdSource>(&mut self, store: &mut TaskStore<S, I>) -> SaveOutcome {
        let Some(session) = self.session.as_ref() else {
            return SaveOutcome::NotEditing;
        };
        if is_blank(&session.scratch) {
            return SaveOutcome::Rejected;
        }

        let id = session.id;
        store.edit_text(id, &session.scratch);
        self.session = None;
        SaveOutcome::Saved(id)
    }

    /// Close the editor, discarding the scratch text
    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn scratch(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.scratch.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::storage::MemoryStorage;

    fn store_with_foo() -> TaskStore<MemoryStorage, SequentialIds> {
        let mut store = TaskStore::load(MemoryStorage::new(), SequentialIds::default());
        store.add("foo");
        store
    }

    #[test]
    fn test_save_commits_and_closes() {
        let mut store = store_with_foo();
        let mut edit = EditTracker::new();

        edit.start(1, "foo");
        assert_eq!(edit.scratch(), Some("foo"));
        edit.set_scratch("bar");

        assert_eq!(edit.save(&mut store), SaveOutcome::Saved(1));
        assert_eq!(store.get(1).unwrap().text, "bar");
        assert_eq!(edit.editing_id(), None);
    }

    #[test]
    fn test_cancel_discards_scratch() {
        let mut store = store_with_foo();
        let mut edit = EditTracker::new();

        edit.start(1, "foo");
        edit.set_scratch("bar");
        edit.cancel();

        assert_eq!(store.get(1).unwrap().text, "foo");
        assert_eq!(edit.session(), None);
        assert_eq!(edit.save(&mut store), SaveOutcome::NotEditing);
    }

    #[test]
    fn test_blank_scratch_keeps_editor_open() {
        let mut store = store_with_foo();
        let mut edit = EditTracker::new();

        edit.start(1, "foo");
        edit.set_scratch("   ");

        assert_eq!(edit.save(&mut store), SaveOutcome::Rejected);
        assert!(edit.is_editing(1));
        assert_eq!(edit.scratch(), Some("   "));
        assert_eq!(store.get(1).unwrap().text, "foo");
    }

    #[test]
    fn test_start_replaces_open_session() {
        let mut edit = EditTracker::new();
        edit.start(1, "one");
        edit.set_scratch("changed");
        edit.start(2, "two");

        assert!(!edit.is_editing(1));
        assert!(edit.is_editing(2));
        assert_eq!(edit.scratch(), Some("two"));
    }

    #[test]
    fn test_scratch_ignored_while_idle() {
        let mut edit = EditTracker::new();
        edit.set_scratch("lost");
        assert_eq!(edit.scratch(), None);
    }
}
