//! Clear Completed Button Component

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Shown only while at least one task is completed
#[component]
pub fn ClearCompletedButton() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <Show when=move || ctx.store.with(|store| store.has_completed())>
            <button type="button" class="clear-completed-btn" on:click=move |_| ctx.clear_completed()>
                <span class="icon">"🗑"</span>
                <span>"Clear Completed"</span>
            </button>
        </Show>
    }
}
