//! Docshelf - markdown documentation editor
//!
//! A Rust-based markdown editor with a searchable document sidebar, folders,
//! drag-and-drop organization and a live preview.

mod app;
mod core;
mod ui;

use app::DocshelfApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Docshelf...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Docshelf"),
        ..Default::default()
    };

    eframe::run_native(
        "Docshelf",
        native_options,
        Box::new(|cc| Ok(Box::new(DocshelfApp::new(cc)))),
    )
}
