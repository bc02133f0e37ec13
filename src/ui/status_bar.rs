//! Bottom status bar showing the latest notification

use std::time::Duration;

use eframe::egui;

use crate::app::DocshelfApp;

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, app: &DocshelfApp) {
        ui.horizontal(|ui| {
            if let Some(toast) = app.workspace.notifier().current() {
                ui.label(egui::RichText::new(&toast.title).strong());
                ui.label(egui::RichText::new(&toast.description).italics());
                // Repaint so the toast disappears once it expires
                ui.ctx().request_repaint_after(Duration::from_millis(250));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let store = app.workspace.store();
                ui.label(format!(
                    "{} documents, {} folders",
                    store.len(),
                    store.folders().len()
                ));
            });
        });
    }
}
