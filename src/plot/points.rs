use glam::Vec3;

use crate::config::{MissingPolicy, PlotConfig};
use crate::data::model::{AttributeRange, DataSet, EntityRecord};
use crate::scene::{PointMarker, Scene, SceneNode};

use super::error::PointError;
use super::scale::place;
use super::AxisSelection;

/// A record that produced no marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPoint {
    pub id: String,
    pub label: String,
    pub reason: PointError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointReport {
    pub plotted: usize,
    pub skipped: Vec<SkippedPoint>,
}

/// Scene coordinates for one record. Coordinates for unused axes stay 0.
///
/// `ranges[i]` must be the range of the i-th selected attribute over the same
/// data set the record comes from.
pub fn point_position(
    record: &EntityRecord,
    selection: &AxisSelection,
    ranges: &[AttributeRange],
    config: &PlotConfig,
) -> Result<Vec3, PointError> {
    let mut point = [0.0f64; 3];

    for ((axis, attribute), range) in selection.iter().zip(ranges) {
        let value = match record.attribute(attribute) {
            Some(v) if v.is_missing() => match config.missing_policy {
                MissingPolicy::ZeroAxis => continue,
                MissingPolicy::ExcludePoint => {
                    return Err(PointError::Missing(attribute.to_string()))
                }
            },
            Some(v) => v
                .magnitude()
                .ok_or_else(|| PointError::NotNumeric(attribute.to_string()))?,
            None => return Err(PointError::NotNumeric(attribute.to_string())),
        };

        point[axis.index()] = place(*range, value, config.log_scale_threshold).map_err(
            |source| PointError::Scale {
                attribute: attribute.to_string(),
                source,
            },
        )?;
    }

    Ok(Vec3::new(point[0] as f32, point[1] as f32, point[2] as f32))
}

/// Add one marker per record of `data_set` to the scene.
pub fn plot_points(
    scene: &mut Scene,
    data_set: &DataSet,
    selection: &AxisSelection,
    ranges: &[AttributeRange],
    config: &PlotConfig,
) -> PointReport {
    let color = config.marker.color32();
    let mut report = PointReport::default();

    for record in &data_set.records {
        match point_position(record, selection, ranges, config) {
            Ok(position) => {
                log::debug!("{} at {position}", record.label());
                scene.add(SceneNode::Point(PointMarker {
                    name: record.label(),
                    position,
                    radius: config.marker.radius,
                    color,
                }));
                report.plotted += 1;
            }
            Err(reason) => {
                log::warn!("Skipping {}: {reason}", record.label());
                report.skipped.push(SkippedPoint {
                    id: record.id.clone(),
                    label: record.label(),
                    reason,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AttributeValue, EntityKind};
    use crate::plot::error::ScaleError;

    fn actor(name: &str, attrs: &[(&str, AttributeValue)]) -> EntityRecord {
        EntityRecord {
            id: name.to_lowercase(),
            class_tag: "Actor".into(),
            name: name.into(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    fn movies(n: usize) -> AttributeValue {
        AttributeValue::Sequence(vec![AttributeValue::Text("m".into()); n])
    }

    #[test]
    fn sequence_length_is_the_coordinate() {
        let rec = actor("Tom Hanks", &[("movies", movies(3))]);
        let sel = AxisSelection::new(["movies"]).unwrap();
        let pos = point_position(&rec, &sel, &[AttributeRange::new(1.0, 3.0)], &PlotConfig::default())
            .unwrap();
        assert_eq!(pos, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn missing_value_zeroes_the_axis_by_default() {
        let rec = actor(
            "Meg Ryan",
            &[("age", AttributeValue::Number(50.0)), ("gross", AttributeValue::Missing)],
        );
        let sel = AxisSelection::new(["age", "gross"]).unwrap();
        let ranges = [AttributeRange::new(20.0, 80.0), AttributeRange::new(10.0, 1e9)];
        let pos = point_position(&rec, &sel, &ranges, &PlotConfig::default()).unwrap();
        assert_eq!(pos, Vec3::new(50.0, 0.0, 0.0));
    }

    #[test]
    fn missing_value_can_exclude_the_point() {
        let rec = actor("Meg Ryan", &[("gross", AttributeValue::Missing)]);
        let sel = AxisSelection::new(["gross"]).unwrap();
        let config = PlotConfig {
            missing_policy: MissingPolicy::ExcludePoint,
            ..PlotConfig::default()
        };
        let err = point_position(&rec, &sel, &[AttributeRange::new(1.0, 2.0)], &config);
        assert_eq!(err, Err(PointError::Missing("gross".into())));
    }

    #[test]
    fn values_above_threshold_are_log_scaled() {
        let rec = actor("A", &[("gross", AttributeValue::Number(10_000.0))]);
        let sel = AxisSelection::new(["gross"]).unwrap();
        let pos = point_position(&rec, &sel, &[AttributeRange::new(1.0, 1e8)], &PlotConfig::default())
            .unwrap();
        assert!((pos.x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn invalid_points_are_reported_not_drawn() {
        let ds = DataSet::from_records(
            EntityKind::Actor,
            vec![
                actor("Good", &[("gross", AttributeValue::Number(5_000.0))]),
                actor("Text", &[("gross", AttributeValue::Text("n/a".into()))]),
                actor("Absent", &[]),
            ],
        );
        let sel = AxisSelection::new(["gross"]).unwrap();
        // non-positive minimum: anything above the threshold cannot be scaled
        let ranges = [AttributeRange::new(0.0, 5_000.0)];
        let mut scene = Scene::new();
        let report = plot_points(&mut scene, &ds, &sel, &ranges, &PlotConfig::default());

        assert_eq!(report.plotted, 0);
        assert_eq!(report.skipped.len(), 3);
        assert!(matches!(
            report.skipped[0].reason,
            PointError::Scale { source: ScaleError::NonPositiveBound { .. }, .. }
        ));
        assert_eq!(report.skipped[1].reason, PointError::NotNumeric("gross".into()));
        assert_eq!(report.skipped[2].label, "Actor:Absent");
        assert!(scene.is_empty());
    }

    #[test]
    fn markers_carry_style_and_label() {
        let ds = DataSet::from_records(
            EntityKind::Actor,
            vec![actor("Tom Hanks", &[("age", AttributeValue::Number(60.0))])],
        );
        let sel = AxisSelection::new(["age"]).unwrap();
        let config = PlotConfig::default();
        let mut scene = Scene::new();
        let report = plot_points(&mut scene, &ds, &sel, &[AttributeRange::new(60.0, 60.0)], &config);

        assert_eq!(report.plotted, 1);
        let marker = scene.points().next().unwrap();
        assert_eq!(marker.name, "Actor:Tom Hanks");
        assert_eq!(marker.position, Vec3::new(60.0, 0.0, 0.0));
        assert_eq!(marker.radius, 1.0);
        assert_eq!(marker.color, config.marker.color32());
    }
}
