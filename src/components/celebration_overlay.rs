//! Celebration Overlay Component
//!
//! Confetti and a message while the click counter is celebrating.
//! The confetti is plain CSS animation; pieces are spread deterministically.

use leptos::prelude::*;

use crate::context::use_todo_context;

const CONFETTI_PIECES: usize = 300;
const CELEBRATION_MESSAGE: &str = "🎉 Surprise! You've found the Easter Egg! 🎉";

/// Inline style for confetti piece `i`: horizontal position, colour and start delay
fn confetti_style(i: usize) -> String {
    let left = (i * 37) % 100;
    let hue = (i * 47) % 360;
    let delay_ms = (i * 53) % 1500;
    format!(
        "left: {}%; background-color: hsl({}, 85%, 60%); animation-delay: {}ms;",
        left, hue, delay_ms
    )
}

#[component]
pub fn CelebrationOverlay() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <Show when=move || ctx.counter.with(|counter| counter.is_celebrating())>
            <div class="confetti" aria-hidden="true">
                {(0..CONFETTI_PIECES)
                    .map(|i| view! { <span class="confetti-piece" style={confetti_style(i)}></span> })
                    .collect_view()}
            </div>
            <div class="celebration-message">{CELEBRATION_MESSAGE}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_style_spreads_pieces() {
        let style = confetti_style(3);
        assert!(style.contains("left: 11%"));
        assert!(style.contains("hsl(141, 85%, 60%)"));
        assert!(style.contains("animation-delay: 159ms"));

        let positions: std::collections::HashSet<usize> =
            (0..CONFETTI_PIECES).map(|i| (i * 37) % 100).collect();
        assert_eq!(positions.len(), 100);
    }
}
