//! Grouping of filtered documents by folder for the sidebar

use super::document::Document;
use super::folder::{Folder, FolderId};

/// Documents belonging to one folder
#[derive(Debug, Clone)]
pub struct FolderGroup<'a> {
    pub folder: &'a Folder,
    pub documents: Vec<&'a Document>,
}

impl FolderGroup<'_> {
    /// Whether the renderer should list this folder's documents
    pub fn is_visible(&self) -> bool {
        self.folder.is_expanded
    }

    /// Number of matching documents, counted even when collapsed
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Root group plus one group per folder, in folder order
#[derive(Debug, Clone)]
pub struct FolderTree<'a> {
    /// Documents without a folder, or with a folder id that no longer resolves
    pub root: Vec<&'a Document>,
    pub groups: Vec<FolderGroup<'a>>,
}

impl<'a> FolderTree<'a> {
    /// Group `filtered` by folder, keeping their relative order
    pub fn project(filtered: &[&'a Document], folders: &'a [Folder]) -> Self {
        let mut groups: Vec<FolderGroup<'a>> = folders
            .iter()
            .map(|folder| FolderGroup {
                folder,
                documents: Vec::new(),
            })
            .collect();
        let mut root = Vec::new();

        for &doc in filtered {
            let slot = doc
                .folder_id
                .as_ref()
                .and_then(|id| groups.iter().position(|g| &g.folder.id == id));
            match slot {
                Some(index) => groups[index].documents.push(doc),
                None => {
                    if let Some(id) = &doc.folder_id {
                        tracing::trace!("Document {} has unknown folder {}, showing at root", doc.id, id);
                    }
                    root.push(doc);
                }
            }
        }

        Self { root, groups }
    }

    /// Documents grouped under `folder_id`, empty when the folder is unknown
    #[allow(dead_code)]
    pub fn documents_in(&self, folder_id: &FolderId) -> &[&'a Document] {
        self.groups
            .iter()
            .find(|g| &g.folder.id == folder_id)
            .map(|g| g.documents.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of grouped documents
    pub fn total(&self) -> usize {
        self.root.len() + self.groups.iter().map(FolderGroup::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
