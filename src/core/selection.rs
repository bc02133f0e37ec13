//! Tracks which document is open in the editor

use super::document::{Document, DocumentId};
use super::store::DocumentStore;

/// Weak, id-based reference to the active document.
///
/// The document itself is always looked up in the store, so the editor never
/// shows a stale copy. `revision` changes whenever the editor should reload
/// its draft: a new selection, or a save of the active document.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: Option<DocumentId>,
    revision: u64,
}

impl Selection {
    /// Open `doc` in the editor
    pub fn select(&mut self, doc: &Document) {
        self.active = Some(doc.id.clone());
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        if self.active.take().is_some() {
            self.revision += 1;
        }
    }

    pub fn active_id(&self) -> Option<&DocumentId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &DocumentId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolve the active document against the current store contents
    pub fn active<'a>(&self, store: &'a DocumentStore) -> Option<&'a Document> {
        self.active.as_ref().and_then(|id| store.document(id))
    }

    /// Called after a document was created or saved
    pub fn refresh(&mut self, mutated: &DocumentId) {
        if self.is_active(mutated) {
            self.revision += 1;
        }
    }

    /// Drop the reference if it no longer resolves
    pub fn sync(&mut self, store: &DocumentStore) {
        if self.active.is_some() && self.active(store).is_none() {
            tracing::debug!("Active document vanished, clearing selection");
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_resolve() {
        let store = DocumentStore::with_sample_data(true);
        let mut selection = Selection::default();
        assert!(selection.active(&store).is_none());

        selection.select(&store.documents()[1]);
        assert_eq!(selection.active(&store).map(|d| d.title.as_str()), Some("Markdown Guide"));
        assert!(selection.is_active(&DocumentId::from("2")));
    }

    #[test]
    fn test_active_reflects_saves() {
        let mut store = DocumentStore::with_sample_data(true);
        let mut selection = Selection::default();
        selection.select(&store.documents()[0]);
        let before = selection.revision();

        let id = DocumentId::from("1");
        store.update_document(&id, "New title", "New body");
        selection.refresh(&id);

        let active = selection.active(&store).unwrap();
        assert_eq!(active.title, "New title");
        assert_eq!(active.content, "New body");
        assert!(selection.revision() > before);
    }

    #[test]
    fn test_refresh_ignores_other_documents() {
        let store = DocumentStore::with_sample_data(true);
        let mut selection = Selection::default();
        selection.select(&store.documents()[0]);
        let before = selection.revision();
        selection.refresh(&DocumentId::from("2"));
        assert_eq!(selection.revision(), before);
    }

    #[test]
    fn test_sync_clears_dangling_reference() {
        let other = DocumentStore::with_sample_data(true);
        let store = DocumentStore::new(true);
        let mut selection = Selection::default();
        selection.select(&other.documents()[0]);

        selection.sync(&store);
        assert!(selection.active_id().is_none());
    }
}
