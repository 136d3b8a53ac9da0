use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Point table (bottom panel)
// ---------------------------------------------------------------------------

/// List every plotted marker with its scene coordinates.
pub fn point_table(ui: &mut Ui, state: &AppState) {
    let points: Vec<_> = state.scene.points().collect();
    if points.is_empty() {
        ui.label("Nothing plotted.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0))
        .columns(Column::auto().at_least(60.0), 3)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            for axis in ["x", "y", "z"] {
                header.col(|ui| {
                    ui.strong(axis);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, points.len(), |mut row| {
                let marker = points[row.index()];
                row.col(|ui| {
                    ui.label(&marker.name);
                });
                for v in marker.position.to_array() {
                    row.col(|ui| {
                        ui.label(format!("{v:.2}"));
                    });
                }
            });
        });
}
