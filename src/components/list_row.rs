//! List Row Component
//!
//! A single item row with toggle, edit and delete controls.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Item;

/// A single item row. Clicking the text toggles its highlight.
#[component]
pub fn ListRow(
    item: Item,
    toggle_highlighted: Callback<Item>,
    edit_list_item: Callback<Item>,
    delete_list_item: Callback<Item>,
) -> impl IntoView {
    let row_class = if item.highlighted { "list-row highlighted" } else { "list-row" };
    let text = item.text.clone();
    let toggle_target = item.clone();
    let edit_target = item.clone();

    view! {
        <li class=row_class>
            <span class="item-text" on:click=move |_| toggle_highlighted.run(toggle_target.clone())>
                {text}
            </span>

            <button class="edit-btn" title="Edit" on:click=move |_| edit_list_item.run(edit_target.clone())>
                "✎"
            </button>

            <DeleteConfirmButton on_confirm=Callback::new(move |_| delete_list_item.run(item.clone())) />
        </li>
    }
}
