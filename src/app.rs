use eframe::egui::{self, ScrollArea};

use crate::state::{AppState, Tab};
use crate::ui::{browse, calendar, charts, panels, stats};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CrateDiggerApp {
    pub state: AppState,
}

impl Default for CrateDiggerApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for CrateDiggerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu, tab strip, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.tab {
                    Tab::Browse => browse::browse_tab(ui, &mut self.state),
                    Tab::Stats => stats::stats_tab(ui, &mut self.state),
                    Tab::Charts => charts::charts_tab(ui, &mut self.state),
                    Tab::Discover => calendar::discover_tab(ui, &mut self.state),
                });
        });
    }
}
