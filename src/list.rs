//! List Helpers
//!
//! In-place mutations of an item list, located by id or position.

use crate::models::{Item, ItemId};

/// Position of the item with `id`
pub fn position_of(items: &[Item], id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

/// Remove the first item with `id`
pub fn remove_item(items: &mut Vec<Item>, id: ItemId) -> Option<Item> {
    position_of(items, id).map(|index| items.remove(index))
}

/// Replace the text of the item with `id`. Returns false if absent.
pub fn set_text(items: &mut [Item], id: ItemId, text: String) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.text = text;
            true
        }
        None => false,
    }
}

/// Flip the highlight of the item with `id`, returning the new value
pub fn toggle_highlight(items: &mut [Item], id: ItemId) -> Option<bool> {
    items.iter_mut().find(|item| item.id == id).map(|item| {
        item.highlighted = !item.highlighted;
        item.highlighted
    })
}

/// Clear every highlight and highlight `index`. Returns false (and leaves
/// the list untouched) when `index` is out of range.
pub fn highlight_only(items: &mut [Item], index: usize) -> bool {
    if index >= items.len() {
        return false;
    }
    for (i, item) in items.iter_mut().enumerate() {
        item.highlighted = i == index;
    }
    true
}
