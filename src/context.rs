//! Application Context
//!
//! Widget state shared with every component via the Leptos Context API.
//! Components read the signals directly and mutate through the methods here.

use leptos::prelude::*;
use todo_core::{ClickCounter, ClockIds, EditTracker, Filter, TaskId, TaskStore};

use crate::storage::BrowserStorage;
use crate::timers::BrowserScheduler;

/// Task store bound to localStorage and clock-based ids
pub type BrowserStore = TaskStore<BrowserStorage, ClockIds>;

/// Widget-wide signals provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Persisted task list
    pub store: RwSignal<BrowserStore>,
    /// Current view filter
    pub filter: RwSignal<Filter>,
    /// Inline edit session
    pub edit: RwSignal<EditTracker>,
    /// Title click counter / celebration state
    pub counter: RwSignal<ClickCounter>,
    /// Timeouts driving the click counter
    scheduler: StoredValue<BrowserScheduler, LocalStorage>,
}

impl TodoContext {
    pub fn new(
        store: RwSignal<BrowserStore>,
        filter: RwSignal<Filter>,
        edit: RwSignal<EditTracker>,
        counter: RwSignal<ClickCounter>,
        scheduler: StoredValue<BrowserScheduler, LocalStorage>,
    ) -> Self {
        Self {
            store,
            filter,
            edit,
            counter,
            scheduler,
        }
    }

    // ========================
    // Task Store
    // ========================

    /// Add a task; false when the text was blank
    pub fn add(&self, text: &str) -> bool {
        self.store.try_update(|store| store.add(text)).flatten().is_some()
    }

    pub fn toggle(&self, id: TaskId) {
        self.store.update(|store| {
            store.toggle(id);
        });
    }

    pub fn delete(&self, id: TaskId) {
        self.store.update(|store| {
            store.delete(id);
        });
    }

    pub fn clear_completed(&self) {
        self.store.update(|store| {
            store.clear_completed();
        });
    }

    pub fn select_filter(&self, filter: Filter) {
        if self.filter.get_untracked() != filter {
            self.filter.set(filter);
        }
    }

    // ========================
    // Edit Session
    // ========================

    pub fn start_editing(&self, id: TaskId, current_text: &str) {
        self.edit.update(|edit| edit.start(id, current_text));
    }

    pub fn set_scratch(&self, text: String) {
        self.edit.update(|edit| edit.set_scratch(text));
    }

    /// Commit the open edit; a blank scratch keeps the editor open
    pub fn save_edit(&self) {
        self.edit.update(|edit| {
            self.store.update(|store| {
                edit.save(store);
            });
        });
    }

    pub fn cancel_edit(&self) {
        self.edit.update(|edit| edit.cancel());
    }

    // ========================
    // Easter Egg
    // ========================

    pub fn click_title(&self) {
        self.scheduler.update_value(|scheduler| {
            self.counter.update(|counter| {
                counter.click(scheduler);
            });
        });
    }
}

/// Get the widget context provided by `App`
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
