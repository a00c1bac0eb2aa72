//! Task List Component
//!
//! Visible tasks under the current filter, plus the empty-list hint.

use leptos::prelude::*;
use todo_core::{visible, Task};

use crate::components::TaskRow;
use crate::context::use_todo_context;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_todo_context();

    let visible_tasks = move || {
        let filter = ctx.filter.get();
        ctx.store.with(|store| visible(store.tasks(), filter).into_iter().cloned().collect::<Vec<Task>>())
    };

    view! {
        <ul class="task-list">
            <For
                each=visible_tasks
                // Key on every mutable field so an edit or toggle re-renders the row
                key=|task: &Task| (task.id, task.text.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>

        <Show when=move || ctx.store.with(|store| store.is_empty())>
            <p class="empty-state">"No todos yet. Add some above!"</p>
        </Show>
    }
}
