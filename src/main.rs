mod app;
mod color;
mod config;
mod data;
mod plot;
mod scene;
mod state;
mod ui;

use std::path::Path;

use app::EntityScatterApp;
use config::PlotConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = PlotConfig::load().unwrap_or_else(|e| {
        log::error!("Ignoring config: {e:#}");
        PlotConfig::default()
    });
    // optional catalog to open on startup
    let initial = std::env::args_os().nth(1);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Entity Scatter – Actors & Movies",
        options,
        Box::new(move |cc| {
            let label_family = ui::fonts::install_label_font(&cc.egui_ctx, config.font_path.as_deref());
            let mut state = AppState::new(config);
            if let Some(path) = initial {
                state.open(Path::new(&path));
            }
            Ok(Box::new(EntityScatterApp::new(state, label_family)))
        }),
    )
}
