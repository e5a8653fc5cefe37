//! List View Store
//!
//! Uses Leptos reactive_stores to mirror the controller's list for the view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// State rendered by the list view
#[derive(Clone, Debug, Store)]
pub struct ListState {
    /// Items in display order
    pub items: Vec<Item>,
}

impl ListState {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Replace the mirrored items, skipping the write if nothing changed
pub fn store_sync_items(store: &ListStore, items: Vec<Item>) {
    if store.items().with_untracked(|current| *current != items) {
        *store.items().write() = items;
    }
}
