use std::path::Path;

use crate::config::PlotConfig;
use crate::data::model::{Catalog, EntityKind};
use crate::plot::{scatter_plot, AxisSelection, PlotReport};
use crate::scene::{OrbitCamera, Scene};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: PlotConfig,

    /// Loaded catalog (None until user loads a file).
    pub catalog: Option<Catalog>,

    /// Graph type: which data set is plotted.
    pub kind: EntityKind,

    /// Selected attribute per axis (x, y, z). Unset axes are not drawn.
    pub axes: [Option<String>; 3],

    /// The scene built by the last successful plot.
    pub scene: Scene,

    pub camera: OrbitCamera,

    /// Summary of the last plot.
    pub report: Option<PlotReport>,

    /// Render the 3D scene (otherwise a 2D x/y plot).
    pub three_d: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            three_d: config.three_d,
            config,
            catalog: None,
            kind: EntityKind::default(),
            axes: Default::default(),
            scene: Scene::new(),
            camera: OrbitCamera::default(),
            report: None,
            status_message: None,
        }
    }

    /// Load a catalog from disk, reporting failures in the status line.
    pub fn open(&mut self, path: &Path) {
        match crate::data::loader::load_file(path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} actors and {} movies from {}",
                    catalog.actors.len(),
                    catalog.movies.len(),
                    path.display()
                );
                self.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded catalog and reset the plot.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        self.scene.clear();
        self.report = None;
        self.status_message = None;
        self.reset_axes();
    }

    /// Switch graph type; axis choices from the other type no longer apply.
    pub fn set_kind(&mut self, kind: EntityKind) {
        if self.kind != kind {
            self.kind = kind;
            self.reset_axes();
        }
    }

    /// Preselect the first attributes of the current data set on x and y.
    fn reset_axes(&mut self) {
        let names = self
            .catalog
            .as_ref()
            .map(|c| c.data_set(self.kind).attribute_names.clone())
            .unwrap_or_default();
        self.axes = [names.first().cloned(), names.get(1).cloned(), None];
    }

    /// Selected attributes in axis order, stopping at the first unset axis.
    pub fn selection(&self) -> Result<AxisSelection, crate::plot::PlotError> {
        AxisSelection::new(self.axes.iter().map_while(|a| a.clone()))
    }

    /// Rebuild the scene from the current selection.
    pub fn plot(&mut self) {
        let Some(catalog) = &self.catalog else {
            self.status_message = Some("Open a catalog first".to_string());
            return;
        };

        let result = self
            .selection()
            .and_then(|sel| scatter_plot(&mut self.scene, catalog, self.kind, &sel, &self.config));

        match result {
            Ok(report) => {
                self.camera.frame_extents(report.extents);
                self.status_message = None;
                self.report = Some(report);
            }
            Err(e) => {
                log::error!("Plot failed: {e}");
                self.scene.clear();
                self.status_message = Some(format!("Error: {e}"));
                self.report = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AttributeValue, EntityRecord};

    fn catalog() -> Catalog {
        let rec = |class: &str, name: &str, attrs: &[(&str, f64)]| EntityRecord {
            id: name.into(),
            class_tag: class.into(),
            name: name.into(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), AttributeValue::Number(*v)))
                .collect(),
        };
        Catalog::from_records(vec![
            rec("Actor", "A", &[("age", 40.0), ("height", 180.0)]),
            rec("Actor", "B", &[("age", 60.0), ("height", 170.0)]),
            rec("Movie", "M", &[("rating", 8.0)]),
        ])
    }

    #[test]
    fn loading_preselects_two_axes() {
        let mut state = AppState::new(PlotConfig::default());
        state.set_catalog(catalog());
        assert_eq!(state.axes, [Some("age".into()), Some("height".into()), None]);

        state.set_kind(EntityKind::Movie);
        assert_eq!(state.axes, [Some("rating".into()), None, None]);
    }

    #[test]
    fn selection_stops_at_first_gap() {
        let mut state = AppState::new(PlotConfig::default());
        state.axes = [Some("a".into()), None, Some("c".into())];
        assert_eq!(state.selection().unwrap().len(), 1);
    }

    #[test]
    fn plot_updates_report_and_status() {
        let mut state = AppState::new(PlotConfig::default());
        state.plot();
        assert!(state.status_message.is_some());

        state.set_catalog(catalog());
        state.plot();
        let report = state.report.as_ref().unwrap();
        assert_eq!(report.plotted, 2);
        assert!(state.status_message.is_none());
        assert_eq!(state.scene.points().count(), 2);

        state.axes = [None, None, None];
        state.plot();
        assert!(state.report.is_none());
        assert!(state.status_message.is_some());
        assert!(state.scene.is_empty());
    }

    #[test]
    fn failed_plot_after_type_switch_clears_the_scene() {
        let mut catalog = catalog();
        catalog.movies.records[0].attributes.clear();
        catalog.movies.attribute_names.clear();

        let mut state = AppState::new(PlotConfig::default());
        state.set_catalog(catalog);
        state.plot();
        assert_eq!(state.scene.points().count(), 2);

        state.set_kind(EntityKind::Movie);
        state.plot();
        assert_eq!(state.kind, EntityKind::Movie);
        assert!(state.report.is_none());
        assert!(state.status_message.is_some());
        assert!(state.scene.is_empty());
    }
}
