//! In-memory document and folder store

use chrono::{TimeZone, Utc};

use super::document::{normalize_title, Document, DocumentId};
use super::drag::DocumentMover;
use super::folder::{Folder, FolderId};

/// Authoritative list of documents (newest first) and folders (creation order)
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
    folders: Vec<Folder>,
    /// Expansion state given to newly created folders
    expand_new_folders: bool,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DocumentStore {
    /// Create an empty store
    pub fn new(expand_new_folders: bool) -> Self {
        Self {
            documents: Vec::new(),
            folders: Vec::new(),
            expand_new_folders,
        }
    }

    /// Create a store seeded with the welcome documents and default folders
    pub fn with_sample_data(expand_new_folders: bool) -> Self {
        let mut store = Self::new(expand_new_folders);
        store.documents = sample_documents();
        store.folders = vec![
            sample_folder("1", "Projects", true),
            sample_folder("2", "Tutorials", false),
            sample_folder("3", "Drafts", true),
        ];
        store
    }

    /// All documents, newest first
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// All folders, in creation order
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Find a document by id
    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    fn document_mut(&mut self, id: &DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|doc| &doc.id == id)
    }

    /// Find a folder by id
    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| &folder.id == id)
    }

    /// Insert a new empty document at the front of the list
    pub fn create_document(&mut self, folder_id: Option<FolderId>) -> &Document {
        let doc = Document::new(folder_id);
        tracing::debug!("Created document {} (folder: {:?})", doc.id, doc.folder_id);
        self.documents.insert(0, doc);
        &self.documents[0]
    }

    /// Save title and content. Unknown ids are ignored.
    pub fn update_document(
        &mut self,
        id: &DocumentId,
        title: &str,
        content: &str,
    ) -> Option<&Document> {
        let Some(doc) = self.document_mut(id) else {
            tracing::debug!("Ignoring update of unknown document {}", id);
            return None;
        };
        doc.title = normalize_title(title);
        doc.content = content.to_string();
        doc.touch();
        tracing::debug!("Updated document {}", id);
        Some(&*doc)
    }

    /// Reassign a document to a folder, or to the root when `target` is `None`
    pub fn move_document(
        &mut self,
        id: &DocumentId,
        target: Option<FolderId>,
    ) -> Option<&Document> {
        let Some(doc) = self.document_mut(id) else {
            tracing::debug!("Ignoring move of unknown document {}", id);
            return None;
        };
        doc.folder_id = target;
        doc.touch();
        tracing::debug!("Moved document {} to {:?}", id, doc.folder_id);
        Some(&*doc)
    }

    /// Append a new folder
    pub fn create_folder(&mut self, name: &str) -> &Folder {
        let folder = Folder::new(name, self.expand_new_folders);
        tracing::debug!("Created folder {} ({})", folder.name, folder.id);
        self.folders.push(folder);
        &self.folders[self.folders.len() - 1]
    }

    /// Flip the expansion state of one folder, returning the new state
    pub fn toggle_folder(&mut self, id: &FolderId) -> Option<bool> {
        let Some(folder) = self.folders.iter_mut().find(|folder| &folder.id == id) else {
            tracing::debug!("Ignoring toggle of unknown folder {}", id);
            return None;
        };
        folder.is_expanded = !folder.is_expanded;
        Some(folder.is_expanded)
    }
}

impl DocumentMover for DocumentStore {
    fn move_document(&mut self, id: &DocumentId, target: Option<FolderId>) {
        DocumentStore::move_document(self, id, target);
    }
}

fn sample_folder(id: &str, name: &str, is_expanded: bool) -> Folder {
    Folder {
        id: FolderId::from(id),
        name: name.to_string(),
        is_expanded,
    }
}

fn sample_documents() -> Vec<Document> {
    let welcome_date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single().unwrap_or_else(Utc::now);
    let guide_date = Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).single().unwrap_or_else(Utc::now);

    vec![
        Document {
            id: DocumentId::from("1"),
            title: "Welcome to Docshelf".to_string(),
            content: WELCOME_CONTENT.to_string(),
            folder_id: None,
            created_at: welcome_date,
            updated_at: welcome_date,
        },
        Document {
            id: DocumentId::from("2"),
            title: "Markdown Guide".to_string(),
            content: GUIDE_CONTENT.to_string(),
            folder_id: None,
            created_at: guide_date,
            updated_at: guide_date,
        },
    ]
}

const WELCOME_CONTENT: &str = r#"# Welcome to Docshelf

Write and organize your documentation in Markdown.

## Features

- **Live editing**: type Markdown and switch to preview at any time
- **Folders**: drag documents from the sidebar onto a folder
- **Search**: filter documents by title or content
- **Export**: download any document as a `.md` file

## Getting started

1. Click **+** in the sidebar to create a document
2. Write using Markdown
3. Click **Preview** to see the rendered result
4. Click **Save** or press `Ctrl+S`
5. Click **Export** to write the document to disk

> Tip: drop a document on the root area to take it out of its folder.
"#;

const GUIDE_CONTENT: &str = r#"# Markdown Guide

## Text

- **Bold** or __bold__
- *Italic* or _italic_
- `inline code`
- ~~strikethrough~~

## Lists

1. First item
   - Nested item
2. Second item

- [x] Finished task
- [ ] Pending task

## Code

```rust
fn main() {
    println!("Hello, world!");
}
```

## Tables

| Left | Center | Right |
|:-----|:------:|------:|
| a    |   b    |     c |
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::UNTITLED_LABEL;

    #[test]
    fn test_create_document_prepends() {
        let mut store = DocumentStore::new(true);
        let first = store.create_document(None).id.clone();
        let second = store.create_document(None).id.clone();
        assert_eq!(store.len(), 2);
        assert_eq!(store.documents()[0].id, second);
        assert_eq!(store.documents()[1].id, first);
    }

    #[test]
    fn test_create_document_in_folder() {
        let mut store = DocumentStore::new(true);
        let folder = store.create_folder("Projects").id.clone();
        let doc = store.create_document(Some(folder.clone()));
        assert_eq!(doc.folder_id, Some(folder));
        assert!(doc.title.is_empty());
    }

    #[test]
    fn test_update_document() {
        let mut store = DocumentStore::new(true);
        let id = store.create_document(None).id.clone();
        let created = store.document(&id).map(|d| d.created_at);

        let doc = store.update_document(&id, "Guide", "# Hello").unwrap();
        assert_eq!(doc.title, "Guide");
        assert_eq!(doc.content, "# Hello");
        assert_eq!(Some(doc.created_at), created);
        assert!(doc.updated_at >= doc.created_at);
    }

    #[test]
    fn test_update_blank_title_uses_label() {
        let mut store = DocumentStore::new(true);
        let id = store.create_document(None).id.clone();
        let doc = store.update_document(&id, "  ", "body").unwrap();
        assert_eq!(doc.title, UNTITLED_LABEL);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = DocumentStore::with_sample_data(true);
        let before = store.documents().to_vec();
        assert!(store
            .update_document(&DocumentId::from("missing"), "x", "y")
            .is_none());
        assert_eq!(store.documents(), before.as_slice());
    }

    #[test]
    fn test_move_keeps_other_fields() {
        let mut store = DocumentStore::with_sample_data(true);
        let id = DocumentId::from("2");
        let before = store.document(&id).cloned().unwrap();

        let moved = store
            .move_document(&id, Some(FolderId::from("1")))
            .cloned()
            .unwrap();
        assert_eq!(moved.folder_id, Some(FolderId::from("1")));
        assert_eq!(moved.title, before.title);
        assert_eq!(moved.content, before.content);
        assert_eq!(moved.created_at, before.created_at);
        assert!(moved.updated_at >= before.updated_at);
    }

    #[test]
    fn test_move_is_idempotent() {
        let mut store = DocumentStore::with_sample_data(true);
        let id = DocumentId::from("1");
        let target = Some(FolderId::from("3"));

        let once = store.move_document(&id, target.clone()).cloned().unwrap();
        let twice = store.move_document(&id, target.clone()).cloned().unwrap();
        assert_eq!(once.folder_id, twice.folder_id);
        assert!(twice.updated_at >= once.updated_at);
        let order: Vec<_> = store.documents().iter().map(|d| d.id.clone()).collect();
        assert_eq!(order, vec![DocumentId::from("1"), DocumentId::from("2")]);
    }

    #[test]
    fn test_move_to_root() {
        let mut store = DocumentStore::with_sample_data(true);
        let id = DocumentId::from("1");
        store.move_document(&id, Some(FolderId::from("1")));
        let doc = store.move_document(&id, None).unwrap();
        assert_eq!(doc.folder_id, None);
    }

    #[test]
    fn test_move_unknown_is_noop() {
        let mut store = DocumentStore::with_sample_data(true);
        let before = store.documents().to_vec();
        assert!(store
            .move_document(&DocumentId::from("nope"), Some(FolderId::from("1")))
            .is_none());
        assert_eq!(store.documents(), before.as_slice());
    }

    #[test]
    fn test_create_folder_appends_with_default_expansion() {
        let mut store = DocumentStore::with_sample_data(false);
        let folder = store.create_folder("Archive").clone();
        assert_eq!(store.folders().last(), Some(&folder));
        assert!(!folder.is_expanded);
        assert_eq!(store.folders().len(), 4);
    }

    #[test]
    fn test_toggle_folder_only_touches_target() {
        let mut store = DocumentStore::with_sample_data(true);
        assert_eq!(store.toggle_folder(&FolderId::from("2")), Some(true));
        let states: Vec<bool> = store.folders().iter().map(|f| f.is_expanded).collect();
        assert_eq!(states, vec![true, true, true]);
        assert_eq!(store.toggle_folder(&FolderId::from("2")), Some(false));
        assert_eq!(store.toggle_folder(&FolderId::from("9")), None);
    }

    #[test]
    fn test_sample_data() {
        let store = DocumentStore::with_sample_data(true);
        assert_eq!(store.len(), 2);
        assert_eq!(store.folders().len(), 3);
        assert!(store.folder(&FolderId::from("2")).is_some_and(|f| !f.is_expanded));
    }
}
