//! Event handlers tying the store, selection and notifications together
//!
//! Every public method handles one user event and runs to completion: the
//! store is mutated, the selection refreshed and a notification emitted
//! before it returns. Filtered and grouped views are derived on demand and
//! never stored.

use super::document::{Document, DocumentId};
use super::drag::DocumentMover;
use super::folder::{Folder, FolderId};
use super::folder_tree::FolderTree;
use super::notify::{Notification, Notifier};
use super::search::{filter_documents, SearchQuery};
use super::selection::Selection;
use super::store::DocumentStore;

/// Documents, folders and everything derived from them
#[derive(Debug)]
pub struct Workspace<N: Notifier> {
    store: DocumentStore,
    selection: Selection,
    query: SearchQuery,
    notifier: N,
}

impl<N: Notifier> Workspace<N> {
    /// Wrap a store. The first document, if any, becomes active.
    pub fn new(store: DocumentStore, notifier: N) -> Self {
        let mut selection = Selection::default();
        if let Some(first) = store.documents().first() {
            selection.select(first);
        }
        Self {
            store,
            selection,
            query: SearchQuery::default(),
            notifier,
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Document open in the editor
    pub fn active_document(&self) -> Option<&Document> {
        self.selection.active(&self.store)
    }

    /// Documents matching the current search
    pub fn filtered(&self) -> Vec<&Document> {
        filter_documents(self.store.documents(), &self.query)
    }

    /// Filtered documents grouped by folder
    pub fn tree(&self) -> FolderTree<'_> {
        FolderTree::project(&self.filtered(), self.store.folders())
    }

    /// Create an empty document at the root and open it
    pub fn new_document(&mut self) -> DocumentId {
        let doc = self.store.create_document(None);
        let id = doc.id.clone();
        self.selection.select(doc);
        self.notifier.notify(Notification::new(
            "New document created",
            "Start typing to add content.",
        ));
        id
    }

    /// Create an empty document inside `folder_id` and open it
    pub fn new_document_in_folder(&mut self, folder_id: &FolderId) -> DocumentId {
        let folder_name = self
            .store
            .folder(folder_id)
            .map(|folder| folder.name.clone())
            .unwrap_or_default();

        let doc = self.store.create_document(Some(folder_id.clone()));
        let id = doc.id.clone();
        self.selection.select(doc);
        self.notifier.notify(Notification::new(
            "New document created",
            format!("Document created in folder \"{}\".", folder_name),
        ));
        id
    }

    /// Open an existing document. Unknown ids are ignored.
    pub fn select(&mut self, id: &DocumentId) {
        match self.store.document(id) {
            Some(doc) => self.selection.select(doc),
            None => tracing::debug!("Ignoring selection of unknown document {}", id),
        }
    }

    /// Save the editor's title and content into the active document
    pub fn save(&mut self, title: &str, content: &str) -> Option<&Document> {
        let id = self.selection.active_id()?.clone();
        if self.store.update_document(&id, title, content).is_none() {
            self.selection.sync(&self.store);
            return None;
        }
        self.selection.refresh(&id);
        self.notifier.notify(Notification::new(
            "Document saved",
            "Your changes were saved.",
        ));
        self.store.document(&id)
    }

    /// Replace the search text
    pub fn set_query(&mut self, text: &str) {
        if self.query.text() != text {
            self.query = SearchQuery::new(text);
        }
    }

    /// Append a folder
    pub fn create_folder(&mut self, name: &str) -> FolderId {
        let folder: &Folder = self.store.create_folder(name);
        let id = folder.id.clone();
        let description = format!("Folder \"{}\" created.", folder.name);
        self.notifier
            .notify(Notification::new("New folder created", description));
        id
    }

    /// Forward a notification that did not come from a workspace event
    pub fn notify(&mut self, notification: Notification) {
        self.notifier.notify(notification);
    }

    /// Expand or collapse a folder
    pub fn toggle_folder(&mut self, id: &FolderId) {
        self.store.toggle_folder(id);
    }
}

impl<N: Notifier> DocumentMover for Workspace<N> {
    fn move_document(&mut self, id: &DocumentId, target: Option<FolderId>) {
        let destination = match target.as_ref().and_then(|f| self.store.folder(f)) {
            Some(folder) => format!("folder \"{}\"", folder.name),
            None => "root".to_string(),
        };

        if self.store.move_document(id, target).is_none() {
            return;
        }
        self.notifier.notify(Notification::new(
            "Document moved",
            format!("Document moved to {}.", destination),
        ));
    }
}
