mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::CrateDiggerApp;
use eframe::egui;

/// Catalog read when no path is given on the command line.
const DEFAULT_CATALOG: &str = "albums.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let source = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CATALOG), PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Crate Digger – Album Explorer",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render album thumbnails.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut app = CrateDiggerApp::default();
            // A missing file leaves the app running with an empty catalog
            // and a readable status message.
            app.state.load_from(&source);
            Ok(Box::new(app))
        }),
    )
}
