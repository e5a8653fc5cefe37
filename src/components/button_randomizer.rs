//! Button Randomizer Component
//!
//! Highlights one item chosen uniformly at random.

use leptos::prelude::*;

/// Map a uniform sample `r` in `[0, 1)` to a position in `0..total`
pub fn pick_index(total: usize, r: f64) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let scaled = (r.clamp(0.0, 1.0) * total as f64).floor() as usize;
    Some(scaled.min(total - 1))
}

/// Randomize button, disabled while the list is empty
#[component]
pub fn ButtonRandomizer(
    #[prop(into)] total_items: Signal<usize>,
    #[prop(into)] on_randomize: Callback<usize>,
) -> impl IntoView {
    let randomize = move |_| {
        if let Some(index) = pick_index(total_items.get_untracked(), js_sys::Math::random()) {
            on_randomize.run(index);
        }
    };

    view! {
        <button
            class="randomize-btn"
            disabled=move || total_items.get() == 0
            on:click=randomize
        >
            "Randomize"
        </button>
    }
}
