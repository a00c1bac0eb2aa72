//! Task Row Component
//!
//! One task: checkbox, text (or the inline editor), and row actions.

use leptos::prelude::*;
use todo_core::Task;

use crate::context::use_todo_context;

fn text_class(completed: bool) -> &'static str {
    if completed {
        "task-text completed"
    } else {
        "task-text"
    }
}

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_todo_context();

    let id = task.id;
    let completed = task.completed;
    let text = task.text;

    let is_editing = move || ctx.edit.with(|edit| edit.is_editing(id));
    let scratch = move || ctx.edit.with(|edit| edit.scratch().unwrap_or_default().to_string());

    let on_editor_key = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => ctx.save_edit(),
        "Escape" => ctx.cancel_edit(),
        _ => {}
    };

    view! {
        <li class="task-row">
            <input
                type="checkbox"
                class="task-checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle(id)
            />

            <Show
                when=is_editing
                fallback=move || {
                    let label = text.clone();
                    let current = text.clone();
                    view! {
                        <span class={text_class(completed)}>{label}</span>
                        <button
                            type="button"
                            class="icon-btn edit-btn"
                            aria-label="Edit todo"
                            on:click=move |_| ctx.start_editing(id, &current)
                        >
                            "✎"
                        </button>
                        <button
                            type="button"
                            class="icon-btn delete-btn"
                            aria-label="Delete todo"
                            on:click=move |_| ctx.delete(id)
                        >
                            "🗑"
                        </button>
                    }
                }
            >
                <input
                    type="text"
                    class="task-editor"
                    prop:value=scratch
                    on:input=move |ev| ctx.set_scratch(event_target_value(&ev))
                    on:keydown=on_editor_key
                />
                <button
                    type="button"
                    class="icon-btn save-btn"
                    aria-label="Save edit"
                    on:click=move |_| ctx.save_edit()
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="icon-btn cancel-btn"
                    aria-label="Cancel edit"
                    on:click=move |_| ctx.cancel_edit()
                >
                    "✗"
                </button>
            </Show>
        </li>
    }
}
