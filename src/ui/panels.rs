use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar – menu, tab strip, counters, status
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for (tab, title) in [
            (Tab::Browse, "Browse"),
            (Tab::Stats, "Stats"),
            (Tab::Charts, "Charts"),
            (Tab::Discover, "Discover"),
        ] {
            if ui.selectable_label(state.tab == tab, title).clicked() {
                state.tab = tab;
            }
        }

        ui.separator();

        if !state.catalog.is_empty() {
            ui.label(format!(
                "{} albums loaded, {} matching",
                state.catalog.len(),
                state.filtered().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open album catalog")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(&path);
    }
}
