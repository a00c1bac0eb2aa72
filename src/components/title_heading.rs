//! Title Heading Component
//!
//! The card title doubles as the easter egg trigger.

use leptos::prelude::*;

use crate::context::use_todo_context;

pub const APP_TITLE: &str = "Todo App";
const TITLE_HINT: &str = "Click me 5 times for a surprise!";

#[component]
pub fn TitleHeading() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <h1 class="todo-title" title=TITLE_HINT on:click=move |_| ctx.click_title()>
            {APP_TITLE}
        </h1>
    }
}
