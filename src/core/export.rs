//! Export of documents as standalone markdown files

use std::path::Path;

use super::error::DocshelfError;

/// File stem used when the document has no title
pub const DEFAULT_EXPORT_STEM: &str = "document";

/// Suggested file name for exporting a document titled `title`
pub fn export_file_name(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        format!("{}.md", DEFAULT_EXPORT_STEM)
    } else {
        format!("{}.md", stem)
    }
}

/// Write `content` verbatim to `path`
pub fn export_markdown(path: &Path, content: &str) -> Result<(), DocshelfError> {
    std::fs::write(path, content).map_err(|source| DocshelfError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Exported document to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Guide"), "Guide.md");
        assert_eq!(export_file_name(""), "document.md");
        assert_eq!(export_file_name("   "), "document.md");
        assert_eq!(export_file_name("a/b: c?"), "a_b_ c_.md");
    }

    #[test]
    fn test_export_writes_content_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_file_name("Notes"));
        let content = "# Notes\n\n- one\n- two\n";

        export_markdown(&path, content).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("doc.md");
        let err = export_markdown(&path, "x").unwrap_err();
        assert!(matches!(err, DocshelfError::Export { .. }));
    }
}
