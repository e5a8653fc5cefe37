//! Navigation Input
//!
//! Resolves which file's list to show from the page URL (`?fetchId=12`).

use crate::error::{ListError, ListResult};
use crate::models::FileId;

/// Query parameter carrying the file id
pub const FILE_ID_PARAM: &str = "fetchId";

/// Parse the raw query value into a file id
pub fn parse_file_id(raw: Option<&str>) -> ListResult<FileId> {
    let raw = raw.ok_or_else(|| ListError::InvalidFileId(format!("missing `{}` parameter", FILE_ID_PARAM)))?;
    raw.trim()
        .parse::<u32>()
        .map(FileId)
        .map_err(|e| ListError::InvalidFileId(format!("{:?}: {}", raw, e)))
}

/// Read the file id from `window.location.search`
pub fn file_id_from_location() -> ListResult<FileId> {
    let search = web_sys::window()
        .ok_or_else(|| ListError::InvalidFileId("no window".to_string()))?
        .location()
        .search()
        .map_err(|e| ListError::InvalidFileId(format!("{:?}", e)))?;
    let params = web_sys::UrlSearchParams::new_with_str(&search)
        .map_err(|e| ListError::InvalidFileId(format!("{:?}", e)))?;
    parse_file_id(params.get(FILE_ID_PARAM).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_id() {
        assert_eq!(parse_file_id(Some("12")), Ok(FileId(12)));
        assert_eq!(parse_file_id(Some(" 0 ")), Ok(FileId(0)));
    }

    #[test]
    fn test_parse_file_id_rejects_bad_input() {
        assert!(matches!(parse_file_id(None), Err(ListError::InvalidFileId(_))));
        assert!(matches!(parse_file_id(Some("")), Err(ListError::InvalidFileId(_))));
        assert!(matches!(parse_file_id(Some("abc")), Err(ListError::InvalidFileId(_))));
        assert!(matches!(parse_file_id(Some("-1")), Err(ListError::InvalidFileId(_))));
    }
}
