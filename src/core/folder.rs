//! Flat folders used to group documents

use std::fmt;

/// Label used when a folder is created without a name
pub const DEFAULT_FOLDER_NAME: &str = "New folder";

/// Unique folder identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderId(String);

impl FolderId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FolderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A folder in the sidebar. Folders do not nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    /// Whether the folder's documents are shown in the sidebar
    pub is_expanded: bool,
}

impl Folder {
    /// Create a folder with a fresh id
    pub fn new(name: &str, is_expanded: bool) -> Self {
        let name = name.trim();
        Self {
            id: FolderId::generate(),
            name: if name.is_empty() {
                DEFAULT_FOLDER_NAME.to_string()
            } else {
                name.to_string()
            },
            is_expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_uses_default() {
        let folder = Folder::new("  ", true);
        assert_eq!(folder.name, DEFAULT_FOLDER_NAME);
        assert!(folder.is_expanded);
    }

    #[test]
    fn test_name_is_trimmed() {
        let folder = Folder::new(" Projects ", false);
        assert_eq!(folder.name, "Projects");
        assert!(!folder.is_expanded);
    }
}
