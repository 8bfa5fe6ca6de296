use eframe::egui::{Slider, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::SeriesColors;
use crate::data::filter::{filter_catalog, BrowseFilters};
use crate::data::model::Catalog;
use crate::data::stats;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Stats tab – aggregate charts over the full catalog, plus a year-range
// filtered decade chart at the bottom.
// ---------------------------------------------------------------------------

pub fn stats_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Catalog statistics");

    if state.catalog.is_empty() {
        ui.label("No catalog loaded  (File → Open…)");
        return;
    }

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].strong("Albums per decade");
        decade_chart(&mut cols[0], "decades", &state.catalog);

        cols[1].strong("Most active artists");
        top_artists_chart(&mut cols[1], &state.catalog);
    });

    ui.separator();
    ui.strong("Mean track count per year");
    avg_track_count_chart(ui, &state.catalog);

    ui.separator();
    ui.strong("Albums per artist across decades");
    decade_artist_chart(ui, &state.catalog);

    ui.separator();
    ui.strong("Decades within a year range");
    let bounds = state.catalog.year_bounds().unwrap_or((1991, 2024));
    if let Some((lo, hi)) = state.stats_year_range.as_mut() {
        ui.horizontal(|ui: &mut Ui| {
            ui.add(Slider::new(lo, bounds.0..=bounds.1).text("from"));
            ui.add(Slider::new(hi, bounds.0..=bounds.1).text("to"));
        });
        if lo > hi {
            *hi = *lo;
        }
    }

    let filters = BrowseFilters {
        year_range: state.stats_year_range,
        ..BrowseFilters::default()
    };
    let filtered = filter_catalog(&state.catalog, &filters, &state.denylist);
    ui.label(format!("{} albums in the selected range", filtered.len()));
    decade_chart(ui, "decades_filtered", &filtered);
}

// ---------------------------------------------------------------------------
// Individual charts
// ---------------------------------------------------------------------------

fn decade_chart(ui: &mut Ui, id: &str, catalog: &Catalog) {
    let bars: Vec<Bar> = stats::count_by_decade(catalog)
        .into_iter()
        .map(|(decade, count)| Bar::new(f64::from(decade), count as f64).width(8.0))
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label("Decade")
        .y_axis_label("Albums")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Albums"));
        });
}

fn top_artists_chart(ui: &mut Ui, catalog: &Catalog) {
    let top = stats::top_artists(catalog, 10);
    let names: Vec<String> = top.iter().map(|(artist, _)| artist.clone()).collect();

    let bars: Vec<Bar> = top
        .iter()
        .enumerate()
        .map(|(i, (_, count))| Bar::new(i as f64, *count as f64).width(0.8))
        .collect();

    Plot::new("top_artists")
        .height(CHART_HEIGHT)
        .y_axis_label("Albums")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if i < 0.0 || (mark.value - i).abs() > f64::EPSILON {
                return String::new();
            }
            names.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Albums"));
        });
}

fn avg_track_count_chart(ui: &mut Ui, catalog: &Catalog) {
    // years where every track count is unknown are skipped, not drawn as 0
    let points: PlotPoints = stats::avg_track_count_by_year(catalog)
        .into_iter()
        .filter_map(|(year, mean)| Some([f64::from(year), mean?]))
        .collect();

    Plot::new("avg_tracks")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("Mean tracks")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Mean tracks").width(1.5));
        });
}

fn decade_artist_chart(ui: &mut Ui, catalog: &Catalog) {
    let grouped = stats::count_by_decade_and_artist(catalog);
    let colors =
        SeriesColors::new(grouped.iter().map(|(_, artist, _)| artist.as_str()));

    Plot::new("decade_artist")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Decade")
        .y_axis_label("Albums")
        .show(ui, |plot_ui| {
            for chart in stacked_charts(&grouped, 8.0, &colors) {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Build one bar chart per series from `(x, series, count)` triples, each
/// stacked on top of the previous ones.
pub(crate) fn stacked_charts(
    grouped: &[(i32, String, usize)],
    bar_width: f64,
    colors: &SeriesColors,
) -> Vec<BarChart> {
    let mut series_names: Vec<&str> = Vec::new();
    for (_, name, _) in grouped {
        if !series_names.contains(&name.as_str()) {
            series_names.push(name);
        }
    }

    let mut charts: Vec<BarChart> = Vec::new();
    for name in series_names {
        let bars: Vec<Bar> = grouped
            .iter()
            .filter(|(_, series, _)| series == name)
            .map(|(x, _, count)| Bar::new(f64::from(*x), *count as f64).width(bar_width))
            .collect();

        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(name)
            .color(colors.color_for(name))
            .stack_on(&below);
        charts.push(chart);
    }
    charts
}
