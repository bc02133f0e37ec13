//! Markdown editor panel with title, toolbar and preview toggle

use eframe::egui;

use crate::app::DocshelfApp;
use crate::core::document::DocumentId;
use crate::core::export::{export_file_name, export_markdown};
use crate::core::notify::{Notification, Notifier};
use crate::core::workspace::Workspace;

use super::preview::PreviewPanel;

/// Unsaved edits of the active document
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Document and selection revision the draft was loaded from
    loaded: Option<(DocumentId, u64)>,
    pub title: String,
    pub content: String,
    /// Draft differs from what was last loaded or saved
    pub dirty: bool,
    pub preview_mode: bool,
}

impl EditorState {
    pub fn new(preview_mode: bool) -> Self {
        Self {
            preview_mode,
            ..Self::default()
        }
    }

    /// Reload the draft when another document was selected or the active one was saved
    pub fn sync<N: Notifier>(&mut self, workspace: &Workspace<N>) {
        let revision = workspace.selection().revision();
        let current = workspace
            .active_document()
            .map(|doc| (doc.id.clone(), revision));

        if current == self.loaded {
            return;
        }

        match workspace.active_document() {
            Some(doc) => {
                self.title = doc.title.clone();
                self.content = doc.content.clone();
            }
            None => {
                self.title.clear();
                self.content.clear();
            }
        }
        self.dirty = false;
        self.loaded = current;
    }

    pub fn set_title(&mut self, title: &str) {
        if self.title != title {
            self.title = title.to_string();
            self.dirty = true;
        }
    }

    pub fn set_content(&mut self, content: &str) {
        if self.content != content {
            self.content = content.to_string();
            self.dirty = true;
        }
    }

    pub fn toggle_preview(&mut self) {
        self.preview_mode = !self.preview_mode;
    }

    /// Write the draft into the active document
    pub fn save<N: Notifier>(&mut self, workspace: &mut Workspace<N>) {
        if workspace.save(&self.title, &self.content).is_some() {
            self.dirty = false;
        }
        self.sync(workspace);
    }

    /// Ask for a destination and export the draft as markdown
    pub fn export<N: Notifier>(&self, workspace: &mut Workspace<N>) {
        let file_name = export_file_name(&self.title);
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("Markdown", &["md"])
            .save_file()
        else {
            return;
        };

        match export_markdown(&path, &self.content) {
            Ok(()) => workspace.notify(Notification::new(
                "Document exported",
                format!("Saved to {}.", path.display()),
            )),
            Err(e) => {
                tracing::error!("{}", e);
                workspace.notify(Notification::new("Export failed", e.to_string()));
            }
        }
    }
}

/// Markdown editor panel
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show(ui: &mut egui::Ui, app: &mut DocshelfApp) {
        app.editor.sync(&app.workspace);

        if app.workspace.active_document().is_none() {
            Self::show_welcome(ui);
            return;
        }

        Self::show_toolbar(ui, app);
        ui.separator();

        if app.editor.preview_mode {
            PreviewPanel::show(ui, &mut app.commonmark_cache, &app.editor.content);
            return;
        }

        let font = egui::FontId::monospace(app.config.editor.font_size);
        let mut content = app.editor.content.clone();

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| {
                let edit = egui::TextEdit::multiline(&mut content)
                    .font(font)
                    .hint_text("Write your Markdown here...\n\n# Heading\n\n- List item\n\n**bold** and *italic*")
                    .desired_width(f32::INFINITY)
                    .desired_rows(30);
                ui.add(edit);
            });

        app.editor.set_content(&content);
    }

    /// Title field, unsaved marker and actions
    fn show_toolbar(ui: &mut egui::Ui, app: &mut DocshelfApp) {
        ui.horizontal(|ui| {
            let mut title = app.editor.title.clone();
            ui.add(
                egui::TextEdit::singleline(&mut title)
                    .hint_text("Document title...")
                    .font(egui::TextStyle::Heading)
                    .frame(false),
            );
            app.editor.set_title(&title);

            if app.editor.dirty {
                ui.label(egui::RichText::new("Unsaved").small().weak());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(app.editor.dirty, egui::Button::new("\u{1F4BE} Save"))
                    .on_hover_text("Ctrl+S")
                    .clicked()
                {
                    app.editor.save(&mut app.workspace);
                }
                if ui.button("\u{2B07} Export").clicked() {
                    app.editor.export(&mut app.workspace);
                }
                let toggle = if app.editor.preview_mode {
                    "\u{270F} Edit"
                } else {
                    "\u{1F441} Preview"
                };
                if ui
                    .selectable_label(app.editor.preview_mode, toggle)
                    .clicked()
                {
                    app.editor.toggle_preview();
                }
            });
        });
    }

    /// Show welcome screen when no document is open
    fn show_welcome(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.heading("Welcome to Docshelf");
            ui.add_space(20.0);

            ui.label("Select a document in the sidebar or create a new one to start editing.");
            ui.add_space(10.0);

            ui.label("Keyboard shortcuts:");
            ui.label("  Ctrl+N - New document");
            ui.label("  Ctrl+S - Save");
            ui.label("  Ctrl+E - Toggle preview");
            ui.label("  Ctrl+B - Toggle sidebar");
            ui.label("  Esc - Cancel drag");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::NotificationCenter;
    use crate::core::store::DocumentStore;

    fn workspace() -> Workspace<NotificationCenter> {
        Workspace::new(DocumentStore::with_sample_data(true), NotificationCenter::default())
    }

    #[test]
    fn test_sync_loads_active_document() {
        let ws = workspace();
        let mut editor = EditorState::default();
        editor.sync(&ws);
        assert_eq!(editor.title, "Welcome to Docshelf");
        assert!(!editor.dirty);
    }

    #[test]
    fn test_edits_survive_sync_until_selection_changes() {
        let mut ws = workspace();
        let mut editor = EditorState::default();
        editor.sync(&ws);

        editor.set_content("draft");
        editor.sync(&ws);
        assert_eq!(editor.content, "draft");
        assert!(editor.dirty);

        ws.select(&DocumentId::from("2"));
        editor.sync(&ws);
        assert_eq!(editor.title, "Markdown Guide");
        assert!(!editor.dirty);
    }

    #[test]
    fn test_save_writes_draft_and_clears_dirty() {
        let mut ws = workspace();
        let mut editor = EditorState::default();
        editor.sync(&ws);

        editor.set_title("");
        editor.set_content("Body");
        editor.save(&mut ws);

        assert!(!editor.dirty);
        assert_eq!(editor.title, crate::core::document::UNTITLED_LABEL);
        let active = ws.active_document().unwrap();
        assert_eq!(active.content, "Body");
        assert_eq!(active.title, editor.title);
    }

    #[test]
    fn test_new_document_clears_draft() {
        let mut ws = workspace();
        let mut editor = EditorState::default();
        editor.sync(&ws);
        editor.set_content("unsaved");

        ws.new_document();
        editor.sync(&ws);
        assert!(editor.title.is_empty());
        assert!(editor.content.is_empty());
        assert!(!editor.dirty);
    }

    #[test]
    fn test_toggle_preview() {
        let mut editor = EditorState::new(false);
        editor.toggle_preview();
        assert!(editor.preview_mode);
        editor.toggle_preview();
        assert!(!editor.preview_mode);
    }
}
