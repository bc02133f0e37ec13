//! Sidebar with search, the root document list and folders

use eframe::egui;

use crate::app::DocshelfApp;
use crate::core::document::{Document, DocumentId};
use crate::core::drag::{DropTarget, DropZone};
use crate::core::folder::FolderId;
use crate::core::folder_tree::FolderGroup;
use crate::core::selection::Selection;

/// Something the user asked for while the sidebar was drawn
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    Select(DocumentId),
    NewDocument,
    NewDocumentInFolder(FolderId),
    ToggleFolder(FolderId),
    OpenNewFolderDialog,
    Search(String),
    /// Pointer went down on a document row
    Press {
        document: DocumentId,
        pointer: egui::Pos2,
        rect: egui::Rect,
    },
}

/// Per-frame drawing context shared by the row helpers
struct RowContext<'a> {
    selection: &'a Selection,
    dragged: Option<&'a DocumentId>,
    zones: &'a mut Vec<DropZone>,
    actions: &'a mut Vec<SidebarAction>,
}

/// Sidebar panel
pub struct Sidebar;

impl Sidebar {
    /// Show the sidebar and collect the actions it produced
    pub fn show(ui: &mut egui::Ui, app: &mut DocshelfApp) -> Vec<SidebarAction> {
        let mut actions = Vec::new();

        // Highlight uses last frame's zones; this frame's are rebuilt below
        let hovered = app.drag.hovered_target(&app.drop_zones).cloned();
        app.drop_zones.clear();

        let workspace = &app.workspace;
        let search_text = &mut app.search_text;
        let mut rows = RowContext {
            selection: workspace.selection(),
            dragged: app.drag.dragged_document(),
            zones: &mut app.drop_zones,
            actions: &mut actions,
        };

        ui.vertical(|ui| {
            // Header
            ui.horizontal(|ui| {
                ui.heading("Documents");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+").on_hover_text("New document").clicked() {
                        rows.actions.push(SidebarAction::NewDocument);
                    }
                    if ui.button("\u{1F4C1}+").on_hover_text("New folder").clicked() {
                        rows.actions.push(SidebarAction::OpenNewFolderDialog);
                    }
                });
            });

            let search = ui.add(
                egui::TextEdit::singleline(&mut *search_text)
                    .hint_text("Search documents...")
                    .desired_width(f32::INFINITY),
            );
            if search.changed() {
                rows.actions.push(SidebarAction::Search(search_text.clone()));
            }

            ui.separator();

            let tree = workspace.tree();

            egui::ScrollArea::vertical()
                .id_salt("sidebar_scroll")
                .show(ui, |ui| {
                    let root = ui
                        .vertical(|ui| {
                            ui.label(egui::RichText::new("Unfiled").small().weak());
                            for doc in &tree.root {
                                Self::show_root_document(ui, doc, &mut rows);
                            }
                        })
                        .response;
                    Self::register_zone(ui, DropTarget::Root, root.rect, hovered.as_ref(), &mut rows);

                    ui.add_space(6.0);

                    for group in &tree.groups {
                        Self::show_folder(ui, group, hovered.as_ref(), &mut rows);
                    }

                    if tree.is_empty() {
                        Self::show_empty(ui);
                    }
                });
        });

        actions
    }

    /// A document without a folder, with its last update date
    fn show_root_document(ui: &mut egui::Ui, doc: &Document, rows: &mut RowContext<'_>) {
        Self::document_row(ui, doc, format!("\u{1F4DD} {}", doc.display_title()), rows);
        ui.label(egui::RichText::new(doc.updated_label()).small().weak());
    }

    /// A folder header followed by its documents when expanded
    fn show_folder(
        ui: &mut egui::Ui,
        group: &FolderGroup<'_>,
        hovered: Option<&DropTarget>,
        rows: &mut RowContext<'_>,
    ) {
        let folder = group.folder;
        let block = ui
            .vertical(|ui| {
                ui.horizontal(|ui| {
                    let icon = if folder.is_expanded { "\u{1F4C2}" } else { "\u{1F4C1}" };
                    if ui
                        .selectable_label(false, format!("{} {}", icon, folder.name))
                        .clicked()
                    {
                        rows.actions
                            .push(SidebarAction::ToggleFolder(folder.id.clone()));
                    }
                    ui.label(egui::RichText::new(group.len().to_string()).small().weak());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("+").on_hover_text("New document in folder").clicked() {
                            rows.actions
                                .push(SidebarAction::NewDocumentInFolder(folder.id.clone()));
                        }
                    });
                });

                if group.is_visible() {
                    ui.indent(folder.id.as_str(), |ui| {
                        for doc in &group.documents {
                            Self::document_row(ui, doc, format!("\u{1F4C4} {}", doc.display_title()), rows);
                        }
                    });
                }
            })
            .response;

        Self::register_zone(
            ui,
            DropTarget::Folder(folder.id.clone()),
            block.rect,
            hovered,
            rows,
        );
    }

    /// A selectable, draggable document row
    fn document_row(
        ui: &mut egui::Ui,
        doc: &Document,
        label: String,
        rows: &mut RowContext<'_>,
    ) {
        let is_active = rows.selection.is_active(&doc.id);
        let is_dragged = rows.dragged == Some(&doc.id);
        let text = if is_dragged {
            egui::RichText::new(label).weak()
        } else {
            egui::RichText::new(label)
        };

        let response = ui
            .selectable_label(is_active, text)
            .interact(egui::Sense::drag());

        if response.clicked() {
            rows.actions.push(SidebarAction::Select(doc.id.clone()));
        }

        let press = ui.input(|i| {
            i.pointer
                .primary_pressed()
                .then(|| i.pointer.press_origin())
                .flatten()
        });
        if response.contains_pointer() {
            if let Some(pointer) = press {
                rows.actions.push(SidebarAction::Press {
                    document: doc.id.clone(),
                    pointer,
                    rect: response.rect,
                });
            }
        }

        // Only the dragged row is a target, so dropping it back in place does nothing
        if is_dragged {
            rows.zones
                .push(DropZone::new(DropTarget::Document(doc.id.clone()), response.rect));
        }
    }

    /// Record a drop zone and highlight it if it would receive the drop
    fn register_zone(
        ui: &mut egui::Ui,
        target: DropTarget,
        rect: egui::Rect,
        hovered: Option<&DropTarget>,
        rows: &mut RowContext<'_>,
    ) {
        if rows.dragged.is_some() && hovered == Some(&target) {
            let fill = ui.visuals().selection.bg_fill.gamma_multiply(0.25);
            ui.painter()
                .rect_filled(rect.expand(2.0), egui::CornerRadius::same(4), fill);
        }
        rows.zones.push(DropZone::new(target, rect));
    }

    /// Shown when nothing matches the search
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label("No documents found");
            ui.label(egui::RichText::new("Click + to create a new one").small().weak());
        });
    }
}

/// Dialog for creating a new folder
#[derive(Debug, Default)]
pub struct NewFolderDialog {
    pub visible: bool,
    pub folder_name: String,
}

impl NewFolderDialog {
    pub fn open(&mut self) {
        self.visible = true;
        self.folder_name.clear();
    }

    /// Show the dialog, returning the folder name once confirmed
    pub fn show(&mut self, ctx: &egui::Context) -> Option<String> {
        let mut result = None;

        if self.visible {
            egui::Window::new("New Folder")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    let mut submitted = false;
                    ui.horizontal(|ui| {
                        ui.label("Folder name:");
                        let response = ui.text_edit_singleline(&mut self.folder_name);
                        submitted = response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    });

                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.visible = false;
                            self.folder_name.clear();
                        }
                        if ui.button("Create").clicked() || submitted {
                            result = Some(std::mem::take(&mut self.folder_name));
                            self.visible = false;
                        }
                    });
                });
        }

        result
    }
}
