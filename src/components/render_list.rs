//! Render List Component
//!
//! Displays the items of the current file in order.

use leptos::prelude::*;

use crate::components::ListRow;
use crate::models::Item;

/// Item list view
#[component]
pub fn RenderList(
    #[prop(into)] items: Signal<Vec<Item>>,
    toggle_highlighted: Callback<Item>,
    edit_list_item: Callback<Item>,
    delete_list_item: Callback<Item>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !items.get().is_empty()
            fallback=|| view! { <p class="empty-list">"Nothing here yet."</p> }
        >
            <ul class="item-list">
                <For
                    each=move || items.get()
                    // Key on every mutable field so edits and highlights re-render the row
                    key=|item| (item.id, item.text.clone(), item.highlighted)
                    children=move |item| {
                        view! {
                            <ListRow
                                item=item
                                toggle_highlighted=toggle_highlighted
                                edit_list_item=edit_list_item
                                delete_list_item=delete_list_item
                            />
                        }
                    }
                />
            </ul>
        </Show>
    }
}
