//! Todo Widget App
//!
//! Root component: owns the widget state and lays out the card.

use leptos::prelude::*;
use todo_core::{ClickCounter, ClockIds, EditTracker, Filter, TaskStore};

use crate::components::{
    CelebrationOverlay, ClearCompletedButton, FilterBar, NewTaskForm, TaskList, TitleHeading,
};
use crate::context::TodoContext;
use crate::storage::BrowserStorage;
use crate::timers::BrowserScheduler;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = RwSignal::new(TaskStore::load(BrowserStorage::new(), ClockIds::new()));
    let filter = RwSignal::new(Filter::default());
    let edit = RwSignal::new(EditTracker::new());
    let counter = RwSignal::new(ClickCounter::new());
    let scheduler = StoredValue::new_local(BrowserScheduler::new(move |handle, event| {
        counter.update(|counter| counter.on_timer(handle, event));
    }));

    // Provide context to all children
    provide_context(TodoContext::new(store, filter, edit, counter, scheduler));

    view! {
        <div class="todo-page">
            <div class="todo-card">
                <TitleHeading />
                <NewTaskForm />
                <FilterBar />
                <TaskList />
                <ClearCompletedButton />
                <CelebrationOverlay />
            </div>
        </div>
    }
}
