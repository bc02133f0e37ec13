//! Markdown preview panel using egui_commonmark

use eframe::egui;
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

/// Shown instead of an empty document
pub const EMPTY_PREVIEW: &str = "*Nothing to preview yet...*";

/// Markdown to render for `content`
pub fn preview_source(content: &str) -> &str {
    if content.is_empty() {
        EMPTY_PREVIEW
    } else {
        content
    }
}

/// Markdown preview panel
pub struct PreviewPanel;

impl PreviewPanel {
    /// Render `content` verbatim
    pub fn show(ui: &mut egui::Ui, cache: &mut CommonMarkCache, content: &str) {
        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                CommonMarkViewer::new().show(ui, cache, preview_source(content));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_uses_placeholder() {
        assert_eq!(preview_source(""), EMPTY_PREVIEW);
        assert_eq!(preview_source(" \n"), " \n");
        assert_eq!(preview_source("# Title"), "# Title");
    }
}
