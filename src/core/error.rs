//! Error types for fallible collaborators (config and export)

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the in-memory document model.
///
/// Store, selection and drag operations never fail; unresolved ids are
/// treated as no-ops. Only the pieces that touch the file system do.
#[derive(Debug, Error)]
pub enum DocshelfError {
    /// Writing an exported markdown file failed
    #[error("Failed to export to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform config directory could not be determined
    #[error("Could not determine config directory")]
    ConfigDir,

    /// The config file exists but could not be parsed
    #[error("Invalid config file {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
