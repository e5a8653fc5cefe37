//! Input Item Component
//!
//! Text box with a submit button for adding items.

use leptos::prelude::*;

/// Form for adding a new item
///
/// Empty input is submitted as-is; the controller substitutes a placeholder.
#[component]
pub fn InputItem(
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(new_text.get_untracked());
        set_new_text.set(String::new());
    };

    view! {
        <form class="input-item" on:submit=submit>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
