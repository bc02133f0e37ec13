//! Core functionality: documents, folders, search, drag-and-drop and configuration

pub mod config;
pub mod document;
pub mod drag;
pub mod error;
pub mod export;
pub mod folder;
pub mod folder_tree;
pub mod notify;
pub mod search;
pub mod selection;
pub mod store;
pub mod workspace;
