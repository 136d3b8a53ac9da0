use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::plot::Axis;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// 2D scatter plot (central panel, 3D off)
// ---------------------------------------------------------------------------

/// Render the x/y plane of the current scene with egui_plot.
pub fn flat_plot(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalog (File → Open…), choose axes and press Plot");
        });
        return;
    };

    let axis_name = |axis: Axis| state.axes[axis.index()].clone().unwrap_or_default();
    let marker = state.config.marker.color32();

    Plot::new("flat_plot")
        .legend(Legend::default())
        .x_axis_label(axis_name(Axis::X))
        .y_axis_label(axis_name(Axis::Y))
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for line in state.scene.lines() {
                // the z axis collapses to a point in this view
                if line.end.x == 0.0 && line.end.y == 0.0 {
                    continue;
                }
                let points: PlotPoints = [line.start, line.end]
                    .iter()
                    .map(|p| [p.x as f64, p.y as f64])
                    .collect();
                plot_ui.line(Line::new(points).color(line.color).width(1.5));
            }

            let points: PlotPoints = state
                .scene
                .points()
                .map(|m| [m.position.x as f64, m.position.y as f64])
                .collect();
            plot_ui.points(
                Points::new(points)
                    .name(report.kind.to_string())
                    .color(marker)
                    .radius(3.0),
            );
        });
}
