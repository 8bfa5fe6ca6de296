use eframe::egui::{Slider, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{clamp_page, page_bounds, total_pages};
use crate::data::model::AlbumRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Browse tab – filter inputs, paginated results table
// ---------------------------------------------------------------------------

pub fn browse_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Search albums");

    if state.catalog.is_empty() {
        ui.label("No catalog loaded  (File → Open…)");
        return;
    }

    let bounds = state.catalog.year_bounds().unwrap_or((1991, 2024));

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Artist:");
        ui.text_edit_singleline(&mut state.filters.artist);
        ui.label("Label:");
        ui.text_edit_singleline(&mut state.filters.label);
        ui.label("Tracklist:");
        ui.text_edit_singleline(&mut state.filters.tracklist);
    });

    if let Some((lo, hi)) = state.filters.year_range.as_mut() {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Years:");
            ui.add(Slider::new(lo, bounds.0..=bounds.1).text("from"));
            ui.add(Slider::new(hi, bounds.0..=bounds.1).text("to"));
        });
        // keep the range well-formed when the sliders cross
        if lo > hi {
            *hi = *lo;
        }
    }

    ui.separator();

    let filtered = state.filtered();
    ui.label(format!(
        "{} of {} albums match",
        filtered.len(),
        state.catalog.len()
    ));

    state.page = clamp_page(state.page, filtered.len());
    let pages = total_pages(filtered.len());
    if pages > 1 {
        ui.add(Slider::new(&mut state.page, 1..=pages).text("Page"));
    }

    let visible = &filtered.records[page_bounds(state.page, filtered.len())];
    results_table(ui, visible);
}

fn results_table(ui: &mut Ui, records: &[AlbumRecord]) {
    if records.is_empty() {
        ui.label("No results found.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(50.0))
        .header(20.0, |mut header| {
            for title in ["Artist", "Album", "Year", "Label", "Tracks"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.artist);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.album_title);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(optional_text(record.year));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&record.label);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(optional_text(record.track_count));
                    });
                });
            }
        });
}

fn optional_text<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

// egui widgets can't be driven headless here, so the table helpers are the
// testable surface.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_values_render_as_question_mark() {
        assert_eq!(optional_text(Some(1999)), "1999");
        assert_eq!(optional_text::<i32>(None), "?");
    }
}
