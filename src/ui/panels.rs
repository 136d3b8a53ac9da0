use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::MissingPolicy;
use crate::data::model::EntityKind;
use crate::plot::Axis;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – graph controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Graph");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("No catalog loaded.");
        return;
    };

    let data_set = catalog.data_set(state.kind);
    let attributes = data_set.attribute_names.clone();
    let empty_note = data_set
        .is_empty()
        .then(|| format!("No {} records in this catalog.", data_set.kind));

    // ---- Graph type ----
    ui.strong("Type");
    let mut kind = state.kind;
    egui::ComboBox::from_id_salt("graph_type")
        .selected_text(kind.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for k in EntityKind::ALL {
                ui.selectable_value(&mut kind, k, k.to_string());
            }
        });
    state.set_kind(kind);
    if let Some(note) = empty_note {
        ui.label(RichText::new(note).weak());
    }
    ui.add_space(6.0);

    // ---- Axis attributes ----
    for axis in Axis::ALL {
        ui.strong(format!("{} axis", axis.to_string().to_uppercase()));
        let slot = &mut state.axes[axis.index()];
        let current = slot.clone().unwrap_or_else(|| "—".to_string());
        egui::ComboBox::from_id_salt(("axis", axis.index()))
            .selected_text(current)
            .show_ui(ui, |ui: &mut Ui| {
                if axis != Axis::X {
                    ui.selectable_value(slot, None, "—");
                }
                for name in &attributes {
                    ui.selectable_value(slot, Some(name.clone()), name);
                }
            });
    }
    ui.add_space(6.0);

    // ---- Missing values ----
    ui.strong("Missing values");
    for policy in [MissingPolicy::ZeroAxis, MissingPolicy::ExcludePoint] {
        ui.radio_value(&mut state.config.missing_policy, policy, policy.label());
    }
    ui.add_space(6.0);

    if ui.button("Plot").clicked() {
        state.plot();
    }
    ui.separator();

    // ---- Last plot summary ----
    let Some(report) = &state.report else {
        return;
    };
    ui.label(format!("{} {} points plotted", report.plotted, report.kind));
    if report.skipped.is_empty() {
        return;
    }

    egui::CollapsingHeader::new(
        RichText::new(format!("Skipped ({})", report.skipped.len())).strong(),
    )
    .default_open(false)
    .show(ui, |ui: &mut Ui| {
        ScrollArea::vertical()
            .max_height(240.0)
            .show(ui, |ui: &mut Ui| {
                for skipped in &report.skipped {
                    ui.label(RichText::new(&skipped.label).strong());
                    ui.label(RichText::new(skipped.reason.to_string()).weak());
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Top bar
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

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} records loaded ({} actors, {} movies)",
                catalog.len(),
                catalog.actors.len(),
                catalog.movies.len()
            ));
        }

        ui.separator();

        if ui.selectable_label(state.three_d, "3D").clicked() {
            state.three_d = !state.three_d;
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
        .set_title("Open actor/movie catalog")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
