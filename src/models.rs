//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item id: creation timestamp in milliseconds
pub type ItemId = i64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub highlighted: bool,
}

impl Item {
    /// Create a new, unhighlighted item
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            highlighted: false,
        }
    }
}

/// Identifies which independent list (and storage key) is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub u32);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
