//! Main application state and UI coordination

use std::time::Duration;

use eframe::egui;

use crate::core::config::AppConfig;
use crate::core::drag::{DragController, DropZone};
use crate::core::notify::NotificationCenter;
use crate::core::store::DocumentStore;
use crate::core::workspace::Workspace;
use crate::ui::drag_proxy::DragProxy;
use crate::ui::editor::{EditorPanel, EditorState};
use crate::ui::sidebar::{NewFolderDialog, Sidebar, SidebarAction};
use crate::ui::status_bar::StatusBar;

/// Main application state
pub struct DocshelfApp {
    /// Documents, folders, search and selection
    pub workspace: Workspace<NotificationCenter>,
    /// Document drag gesture
    pub drag: DragController,
    /// Drop zones registered by the sidebar this frame
    pub drop_zones: Vec<DropZone>,
    /// Draft of the active document
    pub editor: EditorState,
    /// Search box contents
    pub search_text: String,
    /// New folder dialog
    pub new_folder: NewFolderDialog,
    /// Application configuration
    pub config: AppConfig,
    /// Whether sidebar is visible
    pub sidebar_visible: bool,
    /// Commonmark cache for preview
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl DocshelfApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = AppConfig::load_or_init();

        let visuals = if config.ui.theme == "light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        cc.egui_ctx.set_visuals(visuals);

        Self::with_config(config)
    }

    /// Build the application state from a configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = if config.seed_sample_data {
            DocumentStore::with_sample_data(config.folders.expand_new)
        } else {
            DocumentStore::new(config.folders.expand_new)
        };
        let notifier =
            NotificationCenter::new(Duration::from_secs_f32(config.ui.toast_seconds.max(0.0)));

        Self {
            workspace: Workspace::new(store, notifier),
            drag: DragController::new(config.drag_threshold()),
            drop_zones: Vec::new(),
            editor: EditorState::new(config.editor.start_in_preview),
            search_text: String::new(),
            new_folder: NewFolderDialog::default(),
            config,
            sidebar_visible: true,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        }
    }

    /// Apply something the sidebar asked for
    pub fn apply(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::Select(id) => self.workspace.select(&id),
            SidebarAction::NewDocument => {
                self.workspace.new_document();
            }
            SidebarAction::NewDocumentInFolder(folder) => {
                self.workspace.new_document_in_folder(&folder);
            }
            SidebarAction::ToggleFolder(folder) => self.workspace.toggle_folder(&folder),
            SidebarAction::OpenNewFolderDialog => self.new_folder.open(),
            SidebarAction::Search(text) => self.workspace.set_query(&text),
            SidebarAction::Press {
                document,
                pointer,
                rect,
            } => self.drag.press(document, pointer, rect),
        }
    }

    /// Save the draft into the active document
    pub fn save_active_document(&mut self) {
        if self.editor.dirty {
            self.editor.save(&mut self.workspace);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Document").clicked() {
                        self.apply(SidebarAction::NewDocument);
                        ui.close();
                    }
                    if ui.button("New Folder...").clicked() {
                        self.new_folder.open();
                        ui.close();
                    }
                    if ui.button("Save").clicked() {
                        self.save_active_document();
                        ui.close();
                    }
                    if ui.button("Export...").clicked() {
                        self.editor.export(&mut self.workspace);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Sidebar").clicked() {
                        self.sidebar_visible = !self.sidebar_visible;
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.editor.preview_mode, "Preview")
                        .clicked()
                    {
                        self.editor.toggle_preview();
                        ui.close();
                    }
                });
            });
        });
    }
}

impl eframe::App for DocshelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let (save, new_doc, toggle_sidebar, toggle_preview) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::S),
                i.modifiers.ctrl && i.key_pressed(egui::Key::N),
                i.modifiers.ctrl && i.key_pressed(egui::Key::B),
                i.modifiers.ctrl && i.key_pressed(egui::Key::E),
            )
        });
        if save {
            self.save_active_document();
        }
        if new_doc {
            self.apply(SidebarAction::NewDocument);
        }
        if toggle_sidebar {
            self.sidebar_visible = !self.sidebar_visible;
        }
        if toggle_preview {
            self.editor.toggle_preview();
        }

        // Render menu bar
        self.render_menu_bar(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            StatusBar::show(ui, self);
        });

        // Render sidebar with documents and folders
        if self.sidebar_visible {
            let actions = egui::SidePanel::left("sidebar")
                .resizable(true)
                .default_width(self.config.ui.sidebar_width)
                .min_width(180.0)
                .show(ctx, |ui| Sidebar::show(ui, self))
                .inner;
            for action in actions {
                self.apply(action);
            }
        } else {
            self.drop_zones.clear();
        }

        if let Some(name) = self.new_folder.show(ctx) {
            self.workspace.create_folder(&name);
        }

        // Render main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            EditorPanel::show(ui, self);
        });

        DragProxy::handle_pointer(ctx, self);
        DragProxy::paint(ctx, self);
    }
}
