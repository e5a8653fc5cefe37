//! List Controller
//!
//! Owns the item list for one file, loads it on open and writes the full
//! list back to storage after every change.

use crate::config::ListConfig;
use crate::error::{ListError, ListResult};
use crate::list;
use crate::models::{FileId, Item, ItemId};
use crate::prompt::TextPrompt;
use crate::storage::{load_data, save_data, KeyValueStore};


/// Millisecond clock used for new item ids
pub type Clock = fn() -> i64;

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// To-do list state for a single file
pub struct ListController<S: KeyValueStore> {
    store: S,
    file_id: FileId,
    key: String,
    items: Vec<Item>,
    config: ListConfig,
    clock: Clock,
}

impl<S: KeyValueStore> ListController<S> {
    /// Load the list for `file_id`; missing or malformed data starts empty
    pub fn open(store: S, file_id: FileId, config: ListConfig) -> Self {
        let key = config.storage_key(file_id);
        let items: Vec<Item> = load_data(&store, &key).unwrap_or_default();
        log::info!("[LIST] Opened {} with {} items", key, items.len());
        Self {
            store,
            file_id,
            key,
            items,
            config,
            clock: now_millis,
        }
    }

    /// Replace the id clock
    #[cfg(test)]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a new item. Blank descriptions become the placeholder text.
    pub fn add_item(&mut self, description: &str) -> ListResult<Item> {
        let item = Item::new((self.clock)(), self.config.normalize_text(description));
        self.items.push(item.clone());
        log::debug!("[LIST] Added item {}", item.id);
        self.persist()?;
        Ok(item)
    }

    /// Ask for replacement text seeded with the current text.
    ///
    /// Cancelling leaves the list unchanged and skips the write.
    pub fn edit_list_item(&mut self, item: &Item, prompt: &dyn TextPrompt) -> ListResult<()> {
        let index = self.index_of(item.id)?;
        let current = self.items[index].text.clone();
        let Some(answer) = prompt.request_text(&self.config.edit_prompt_message, &current) else {
            log::debug!("[LIST] Edit of {} cancelled", item.id);
            return Ok(());
        };
        let text = self.config.normalize_text(&answer);
        list::set_text(&mut self.items, item.id, text);
        self.persist()
    }

    /// Remove the item. Returns `Ok(false)` without writing when it is absent.
    pub fn delete_list_item(&mut self, item: &Item) -> ListResult<bool> {
        if list::remove_item(&mut self.items, item.id).is_none() {
            log::debug!("[LIST] Delete of missing item {} ignored", item.id);
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn toggle_highlighted(&mut self, item: &Item) -> ListResult<()> {
        list::toggle_highlight(&mut self.items, item.id).ok_or(ListError::NotFound(item.id))?;
        self.persist()
    }

    /// Highlight exactly the item at `index`, clearing all others
    pub fn on_randomize(&mut self, index: usize) -> ListResult<()> {
        if !list::highlight_only(&mut self.items, index) {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.persist()
    }

    fn index_of(&self, id: ItemId) -> ListResult<usize> {
        list::position_of(&self.items, id).ok_or(ListError::NotFound(id))
    }

    fn persist(&mut self) -> ListResult<()> {
        save_data(&mut self.store, &self.key, &self.items).map_err(|e| {
            log::error!("[LIST] Failed to save {}: {}", self.key, e);
            ListError::from(e)
        })
    }
}
