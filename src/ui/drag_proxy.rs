//! Pointer plumbing for document drags and the floating drag proxy

use eframe::egui;

use crate::app::DocshelfApp;
use crate::core::drag::DropOutcome;

/// Feeds egui pointer state into the drag controller and paints the proxy
pub struct DragProxy;

impl DragProxy {
    /// Advance the drag gesture. Call after the sidebar registered its drop zones.
    pub fn handle_pointer(ctx: &egui::Context, app: &mut DocshelfApp) {
        let (pointer, down, released, has_pointer, escape) = ctx.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.has_pointer(),
                i.key_pressed(egui::Key::Escape),
            )
        });

        let vanished = app
            .drag
            .dragged_document()
            .is_some_and(|id| app.workspace.store().document(id).is_none());
        if escape || vanished || (app.drag.is_dragging() && !has_pointer) {
            app.drag.cancel();
            return;
        }

        if down {
            if let Some(pos) = pointer {
                app.drag.pointer_moved(pos);
            }
        }

        if released {
            match pointer {
                Some(pos) => {
                    let outcome = app.drag.release(pos, &app.drop_zones, &mut app.workspace);
                    if outcome != DropOutcome::NotDragging {
                        tracing::debug!("Drag finished: {:?}", outcome);
                    }
                }
                None => app.drag.cancel(),
            }
        }

        if app.drag.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }

    /// Draw the dragged document's title following the pointer
    pub fn paint(ctx: &egui::Context, app: &DocshelfApp) {
        let (Some(rect), Some(id)) = (app.drag.proxy_rect(), app.drag.dragged_document()) else {
            return;
        };
        let Some(doc) = app.workspace.store().document(id) else {
            return;
        };

        egui::Area::new(egui::Id::new("drag_proxy"))
            .order(egui::Order::Tooltip)
            .fixed_pos(rect.min)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(rect.width());
                    ui.label(format!("\u{1F4DD} {}", doc.display_title()));
                });
            });
    }
}
