use eframe::egui::{self, Ui};
use egui_plot::{Legend, Plot};

use crate::color::SeriesColors;
use crate::state::AppState;
use crate::data::stats::count_by_year_and_label;
use crate::ui::stats::stacked_charts;

// ---------------------------------------------------------------------------
// Charts tab – single-year album list and label popularity over time
// ---------------------------------------------------------------------------

pub fn charts_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Visualizations");

    if state.catalog.is_empty() {
        ui.label("No catalog loaded  (File → Open…)");
        return;
    }

    year_album_list(ui, state);

    ui.separator();
    ui.strong("Label popularity over time");
    label_year_chart(ui, state);
}

fn year_album_list(ui: &mut Ui, state: &mut AppState) {
    let years = state.catalog.known_years();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Year:");
        let selected_text = state
            .selected_year
            .map_or_else(|| "-".to_string(), |y| y.to_string());
        egui::ComboBox::from_id_salt("year_select")
            .selected_text(selected_text)
            .show_ui(ui, |ui: &mut Ui| {
                for year in &years {
                    if ui
                        .selectable_label(state.selected_year == Some(*year), year.to_string())
                        .clicked()
                    {
                        state.selected_year = Some(*year);
                    }
                }
            });
    });

    let Some(year) = state.selected_year else {
        return;
    };
    ui.strong(format!("Albums released in {year}"));
    for record in state.catalog.records.iter().filter(|r| r.year == Some(year)) {
        ui.label(format!("• {} - {} ({year})", record.artist, record.album_title));
    }
}

fn label_year_chart(ui: &mut Ui, state: &AppState) {
    let grouped = count_by_year_and_label(&state.catalog, &state.denylist);
    let colors =
        SeriesColors::new(grouped.iter().map(|(_, label, _)| label.as_str()));

    Plot::new("label_year")
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Albums")
        .show(ui, |plot_ui| {
            for chart in stacked_charts(&grouped, 0.8, &colors) {
                plot_ui.bar_chart(chart);
            }
        });
}
