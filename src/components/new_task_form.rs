//! New Task Form Component

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Text input + submit for adding tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is rejected by the store and left in place
        if ctx.add(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="new-task-input"
                placeholder="Add a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">
                <span class="icon">"+"</span>
                <span>"Add"</span>
            </button>
        </form>
    }
}
