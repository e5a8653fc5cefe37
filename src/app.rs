//! To-Do List App
//!
//! Wires the list controller to the input, randomizer and list components.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ButtonRandomizer, InputItem, RenderList};
use crate::config::ListConfig;
use crate::controller::ListController;
use crate::error::ListResult;
use crate::models::{FileId, Item};
use crate::prompt::BrowserPrompt;
use crate::storage::{open_default_store, KeyValueStore};
use crate::store::{store_sync_items, ListState, ListStateStoreFields, ListStore};

type Controller = ListController<Box<dyn KeyValueStore>>;

/// Run a controller operation and mirror the resulting list into the store.
/// Rejected operations are logged and otherwise ignored.
fn apply<R>(
    controller: StoredValue<Controller, LocalStorage>,
    store: ListStore,
    action: &str,
    op: impl FnOnce(&mut Controller) -> ListResult<R>,
) {
    let mut outcome = None;
    controller.update_value(|c| {
        let result = op(c).map(|_| ());
        log::debug!("[APP] {} on {}: {} items", action, c.storage_key(), c.len());
        outcome = Some((result, c.items().to_vec()));
    });
    let Some((result, items)) = outcome else {
        log::warn!("[APP] {} after list view was disposed", action);
        return;
    };
    if let Err(e) = result {
        log::warn!("[APP] {} rejected: {}", action, e);
    }
    store_sync_items(&store, items);
}

/// "1 item", "3 items"
fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// List view for a single file
#[component]
pub fn TodoList(file_id: FileId) -> impl IntoView {
    let controller = StoredValue::new_local(ListController::open(
        open_default_store(),
        file_id,
        ListConfig::default(),
    ));
    let (shown_file, initial_items) = controller.with_value(|c| (c.file_id(), c.items().to_vec()));
    let store = Store::new(ListState::new(initial_items));

    let add_item = Callback::new(move |description: String| {
        apply(controller, store, "add", |c| c.add_item(&description));
    });
    let edit_list_item = Callback::new(move |item: Item| {
        apply(controller, store, "edit", |c| c.edit_list_item(&item, &BrowserPrompt));
    });
    let delete_list_item = Callback::new(move |item: Item| {
        apply(controller, store, "delete", |c| c.delete_list_item(&item));
    });
    let toggle_highlighted = Callback::new(move |item: Item| {
        apply(controller, store, "toggle", |c| c.toggle_highlighted(&item));
    });
    let on_randomize = Callback::new(move |index: usize| {
        apply(controller, store, "randomize", |c| c.on_randomize(index));
    });

    let items = Signal::derive(move || store.items().get());
    let total_items = Signal::derive(move || store.items().with(|items| items.len()));

    view! {
        <div class="todo-list">
            <div class="flex">
                <InputItem on_submit=add_item />
                <div class="flex gap">
                    <ButtonRandomizer total_items=total_items on_randomize=on_randomize />
                </div>
            </div>

            <hr class="divider" />

            <RenderList
                items=items
                toggle_highlighted=toggle_highlighted
                edit_list_item=edit_list_item
                delete_list_item=delete_list_item
            />

            <p class="item-count">{move || format!("List #{} · {}", shown_file, item_count_label(total_items.get()))}</p>
        </div>
    }
}

/// Shown when the URL does not name a valid list
#[component]
pub fn NoListSelected(reason: String) -> impl IntoView {
    view! {
        <div class="todo-list">
            <p class="empty-list">"No list selected."</p>
            <p class="item-count">{reason}</p>
        </div>
    }
}
