//! List Configuration
//!
//! Fixed strings used by the list controller.

use crate::models::FileId;

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Prefix of the storage key; the decimal file id is appended
    pub key_prefix: String,
    /// Text stored when the user submits an empty description
    pub empty_placeholder: String,
    /// Message shown by the edit prompt
    pub edit_prompt_message: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            key_prefix: "todoListData".to_string(),
            empty_placeholder: "Empty note".to_string(),
            edit_prompt_message: "Enter the new text for the selected item".to_string(),
        }
    }
}

impl ListConfig {
    /// Storage key for a file, e.g. `todoListData12`
    pub fn storage_key(&self, file_id: FileId) -> String {
        format!("{}{}", self.key_prefix, file_id)
    }

    /// Trim user input, substituting the placeholder when nothing is left
    pub fn normalize_text(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.empty_placeholder.clone()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        let config = ListConfig::default();
        assert_eq!(config.storage_key(FileId(12)), "todoListData12");
        assert_eq!(config.storage_key(FileId(0)), "todoListData0");
    }

    #[test]
    fn test_normalize_text() {
        let config = ListConfig::default();
        assert_eq!(config.normalize_text("  Buy milk \n"), "Buy milk");
        assert_eq!(config.normalize_text(""), "Empty note");
        assert_eq!(config.normalize_text("   "), "Empty note");
    }

    #[test]
    fn test_custom_prefix() {
        let config = ListConfig {
            key_prefix: "notes-".to_string(),
            ..ListConfig::default()
        };
        assert_eq!(config.storage_key(FileId(3)), "notes-3");
        assert_eq!(config.normalize_text(""), "Empty note");
    }
}
