use eframe::egui::{self, FontFamily};

use crate::state::AppState;
use crate::ui::{panels, plot, table, view3d};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EntityScatterApp {
    pub state: AppState,
    label_family: FontFamily,
}

impl EntityScatterApp {
    pub fn new(state: AppState, label_family: FontFamily) -> Self {
        Self {
            state,
            label_family,
        }
    }
}

impl eframe::App for EntityScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: graph controls ----
        egui::SidePanel::left("graph_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: plotted points ----
        egui::TopBottomPanel::bottom("point_table")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                table::point_table(ui, &self.state);
            });

        // ---- Central panel: scene ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.three_d {
                view3d::scene_view(ui, &mut self.state, &self.label_family);
            } else {
                plot::flat_plot(ui, &self.state);
            }
        });
    }
}
