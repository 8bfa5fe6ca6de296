use eframe::egui::{self, RichText, Slider, Ui};
use egui_extras::DatePickerButton;

use crate::data::discover::{calendar_weeks, CalendarCell, CALENDAR_DAYS};
use crate::data::model::AlbumRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Discover tab – sampling controls and the "30 albums for 30 days" grid
// ---------------------------------------------------------------------------

pub fn discover_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Discover");
    ui.label("30 albums for 30 days: one album to listen to on each day.");

    if state.catalog.is_empty() {
        ui.label("No catalog loaded  (File → Open…)");
        return;
    }

    let bounds = state.catalog.year_bounds().unwrap_or((1991, 2024));
    if let Some((lo, hi)) = state.discover_range.as_mut() {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Years:");
            ui.add(Slider::new(lo, bounds.0..=bounds.1).text("from"));
            ui.add(Slider::new(hi, bounds.0..=bounds.1).text("to"));
        });
        if lo > hi {
            *hi = *lo;
        }
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Label (optional):");
        ui.text_edit_singleline(&mut state.discover_label);
        ui.label("Start:");
        ui.add(DatePickerButton::new(&mut state.discover_start).id_salt("discover_start"));
    });

    if ui.button("Generate").clicked() {
        state.generate_discovery();
    }

    ui.separator();

    match &state.discovery {
        None => {
            ui.label("Press Generate to draw a selection.");
        }
        Some(selection) if selection.is_empty() => {
            ui.label("No albums found for the given criteria.");
        }
        Some(selection) => {
            let start = state.discover_start;
            ui.strong(format!("Discovery calendar from {}", start.format("%-d %B %Y")));
            for week in calendar_weeks(selection, start, CALENDAR_DAYS) {
                calendar_row(ui, &week);
            }
        }
    }
}

fn calendar_row(ui: &mut Ui, week: &[CalendarCell]) {
    ui.columns(week.len(), |cols: &mut [Ui]| {
        for (cell, ui) in week.iter().zip(cols.iter_mut()) {
            ui.strong(cell.date.format("%-d %b").to_string());
            match &cell.album {
                Some(album) => album_cell(ui, album),
                None => {
                    ui.label("No album");
                }
            }
        }
    });
    ui.separator();
}

fn album_cell(ui: &mut Ui, album: &AlbumRecord) {
    match &album.thumb {
        Some(thumb) => {
            ui.add(egui::Image::from_uri(thumb.clone()).max_width(100.0));
        }
        None => {
            ui.label("No artwork");
        }
    }
    let year = album
        .year
        .map_or_else(|| "?".to_string(), |y| y.to_string());
    ui.label(RichText::new(format!("{} - {} ({year})", album.artist, album.album_title)).small());
}
