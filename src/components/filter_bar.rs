//! Filter Bar Component
//!
//! Task count plus the three filter buttons.

use leptos::prelude::*;
use todo_core::Filter;

use crate::context::use_todo_context;

/// "1 Todo", "3 Todos", "0 Todos"
pub fn count_label(count: usize) -> String {
    let noun = if count == 1 { "Todo" } else { "Todos" };
    format!("{} {}", count, noun)
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_todo_context();

    let count = move || ctx.store.with(|store| count_label(store.len()));

    view! {
        <div class="filter-bar">
            <span class="task-count">{count}</span>
            <div class="filter-buttons">
                {Filter::ALL.into_iter().map(|filter| {
                    let is_selected = move || ctx.filter.get() == filter;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| ctx.select_filter(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 Todos");
        assert_eq!(count_label(1), "1 Todo");
        assert_eq!(count_label(12), "12 Todos");
    }
}
