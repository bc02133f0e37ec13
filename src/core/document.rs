//! Markdown documents held in memory

use std::fmt;

use chrono::{DateTime, Utc};

use super::folder::FolderId;

/// Label used when a document is saved or shown without a title
pub const UNTITLED_LABEL: &str = "Untitled document";

/// Unique document identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A markdown document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Immutable identity
    pub id: DocumentId,
    /// Document title (may be empty until first save)
    pub title: String,
    /// Markdown source
    pub content: String,
    /// Folder this document belongs to, if any
    pub folder_id: Option<FolderId>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last save or move
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Create a new empty document, optionally inside a folder
    pub fn new(folder_id: Option<FolderId>) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            title: String::new(),
            content: String::new(),
            folder_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Title shown in lists and tabs
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED_LABEL
        } else {
            &self.title
        }
    }

    /// Local date of the last update, as shown in the sidebar
    pub fn updated_label(&self) -> String {
        self.updated_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Bump `updated_at`, never moving it backwards
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// Normalize a title for saving: blank titles become [`UNTITLED_LABEL`]
pub fn normalize_title(title: &str) -> String {
    if title.trim().is_empty() {
        UNTITLED_LABEL.to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::new(None);
        assert!(doc.title.is_empty());
        assert!(doc.content.is_empty());
        assert_eq!(doc.folder_id, None);
        assert_eq!(doc.created_at, doc.updated_at);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(DocumentId::generate(), DocumentId::generate());
    }

    #[test]
    fn test_display_title_falls_back() {
        let mut doc = Document::new(None);
        assert_eq!(doc.display_title(), UNTITLED_LABEL);
        doc.title = "   ".to_string();
        assert_eq!(doc.display_title(), UNTITLED_LABEL);
        doc.title = "Guide".to_string();
        assert_eq!(doc.display_title(), "Guide");
    }

    #[test]
    fn test_touch_never_goes_backwards() {
        let mut doc = Document::new(None);
        let future = Utc::now() + chrono::Duration::days(1);
        doc.updated_at = future;
        doc.touch();
        assert_eq!(doc.updated_at, future);
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title(""), UNTITLED_LABEL);
        assert_eq!(normalize_title("Notes"), "Notes");
    }
}
