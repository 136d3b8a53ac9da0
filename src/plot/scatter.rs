use crate::color::label_color;
use crate::config::PlotConfig;
use crate::data::model::{AttributeRange, Catalog, EntityKind};
use crate::scene::{Scene, SceneNode};

use super::axis::draw_axis;
use super::error::PlotError;
use super::labels::place_label;
use super::points::{plot_points, SkippedPoint};
use super::AxisSelection;

/// Outcome of one scatter plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotReport {
    pub kind: EntityKind,
    /// Drawn axis lengths (x, y, z); unused axes are 0.
    pub extents: [f64; 3],
    pub plotted: usize,
    pub skipped: Vec<SkippedPoint>,
}

/// Rebuild `scene` as a scatter plot of `kind` over the selected attributes.
///
/// Axes go in first, then the points, then the axis labels. On error the scene
/// is left empty.
pub fn scatter_plot(
    scene: &mut Scene,
    catalog: &Catalog,
    kind: EntityKind,
    selection: &AxisSelection,
    config: &PlotConfig,
) -> Result<PlotReport, PlotError> {
    scene.clear();
    let result = build(scene, catalog, kind, selection, config);
    if result.is_err() {
        scene.clear();
    }
    result
}

fn build(
    scene: &mut Scene,
    catalog: &Catalog,
    kind: EntityKind,
    selection: &AxisSelection,
    config: &PlotConfig,
) -> Result<PlotReport, PlotError> {
    let data_set = catalog.data_set(kind);
    let colors = config.axis_colors();

    let mut ranges: Vec<AttributeRange> = Vec::with_capacity(selection.len());
    let mut extents = [0.0f64; 3];

    for (axis, attribute) in selection.iter() {
        let range = data_set
            .attribute_range(attribute)
            .ok_or_else(|| PlotError::NoRange {
                kind: kind.to_string(),
                attribute: attribute.to_string(),
            })?;

        let extent = draw_axis(
            scene,
            axis,
            range,
            config.log_scale_threshold,
            colors[axis.index()],
        )
        .map_err(|source| PlotError::Axis {
            attribute: attribute.to_string(),
            source,
        })?;

        log::debug!("{axis} axis '{attribute}': {range:?} -> extent {extent}");
        ranges.push(range);
        extents[axis.index()] = extent;
    }

    let points = plot_points(scene, data_set, selection, &ranges, config);

    for (axis, attribute) in selection.iter() {
        let label = place_label(
            axis,
            extents[axis.index()] as f32,
            attribute,
            &config.label,
            label_color(colors[axis.index()]),
        );
        scene.add(SceneNode::Label(label));
    }

    log::info!(
        "Plotted {} {kind} points ({} skipped) on {:?}",
        points.plotted,
        points.skipped.len(),
        selection.iter().map(|(_, a)| a).collect::<Vec<_>>()
    );

    Ok(PlotReport {
        kind,
        extents,
        plotted: points.plotted,
        skipped: points.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AttributeValue, EntityRecord};
    use crate::plot::error::ScaleError;

    fn record(class: &str, name: &str, attrs: &[(&str, f64)]) -> EntityRecord {
        EntityRecord {
            id: name.into(),
            class_tag: class.into(),
            name: name.into(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), AttributeValue::from_number(*v)))
                .collect(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            record("Actor", "A", &[("age", 30.0), ("gross", 1_000.0)]),
            record("Actor", "B", &[("age", 70.0), ("gross", 1_000_000.0)]),
            record("Actor", "C", &[("age", 45.0), ("gross", -1.0)]),
            record("Movie", "M", &[("rating", 7.0), ("flat", 500.0)]),
        ])
    }

    #[test]
    fn builds_axes_points_then_labels() {
        let mut scene = Scene::new();
        let sel = AxisSelection::new(["age", "gross"]).unwrap();
        let report =
            scatter_plot(&mut scene, &catalog(), EntityKind::Actor, &sel, &PlotConfig::default())
                .unwrap();

        assert_eq!(report.plotted, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(report.extents[0], 70.0);
        assert!(report.extents[1] >= 100.0 && report.extents[1] <= 101.0);
        assert_eq!(report.extents[2], 0.0);

        let kinds: Vec<u8> = scene
            .nodes()
            .iter()
            .map(|n| match n {
                SceneNode::Line(_) => 0,
                SceneNode::Point(_) => 1,
                SceneNode::Label(_) => 2,
            })
            .collect();
        assert_eq!(kinds, vec![0, 0, 1, 1, 1, 2, 2]);

        let c = scene.points().find(|p| p.name == "Actor:C").unwrap();
        assert_eq!(c.position.y, 0.0);
        let a = scene.points().find(|p| p.name == "Actor:A").unwrap();
        assert!(a.position.y.abs() < 1e-4);
    }

    #[test]
    fn replotting_replaces_the_scene() {
        let mut scene = Scene::new();
        let config = PlotConfig::default();
        let sel = AxisSelection::new(["age"]).unwrap();
        scatter_plot(&mut scene, &catalog(), EntityKind::Actor, &sel, &config).unwrap();
        let sel = AxisSelection::new(["rating"]).unwrap();
        scatter_plot(&mut scene, &catalog(), EntityKind::Movie, &sel, &config).unwrap();
        assert_eq!(scene.points().count(), 1);
        assert_eq!(scene.lines().count(), 1);
    }

    #[test]
    fn unknown_attribute_is_an_error() {
        let mut scene = Scene::new();
        let sel = AxisSelection::new(["age", "height"]).unwrap();
        let err =
            scatter_plot(&mut scene, &catalog(), EntityKind::Actor, &sel, &PlotConfig::default());
        assert_eq!(
            err,
            Err(PlotError::NoRange {
                kind: "Actor".into(),
                attribute: "height".into()
            })
        );
        assert!(scene.is_empty());
    }

    #[test]
    fn degenerate_large_axis_is_an_error() {
        let mut scene = Scene::new();
        let sel = AxisSelection::new(["flat"]).unwrap();
        let err =
            scatter_plot(&mut scene, &catalog(), EntityKind::Movie, &sel, &PlotConfig::default());
        assert_eq!(
            err,
            Err(PlotError::Axis {
                attribute: "flat".into(),
                source: ScaleError::DegenerateRange(500.0)
            })
        );
        assert!(scene.is_empty());
    }
}
