use eframe::egui::Color32;
use glam::Vec3;

use crate::data::model::AttributeRange;
use crate::scene::{LineSegment, Scene, SceneNode};

use super::error::ScaleError;
use super::scale::scale;
use super::Axis;

/// Drawn length of an axis for `range`, rounded up to a whole unit.
///
/// Ranges whose maximum exceeds `threshold` are log-scaled against themselves,
/// which caps the axis at about [`AXIS_SPAN`](super::scale::AXIS_SPAN).
pub fn axis_extent(range: AttributeRange, threshold: f64) -> Result<f64, ScaleError> {
    let mut extent = range.maximum;
    if extent > threshold {
        extent = scale(range, range.maximum)?;
    }
    Ok(extent.ceil())
}

/// Add the line for `axis` from the origin to its extent and return the extent.
pub fn draw_axis(
    scene: &mut Scene,
    axis: Axis,
    range: AttributeRange,
    threshold: f64,
    color: Color32,
) -> Result<f64, ScaleError> {
    let extent = axis_extent(range, threshold)?;
    scene.add(SceneNode::Line(LineSegment {
        start: Vec3::ZERO,
        end: axis.unit() * extent as f32,
        color,
    }));
    Ok(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_range_is_capped_near_span() {
        let range = AttributeRange::new(3.0, 250.0);
        let scaled = scale(range, 250.0).unwrap();
        let extent = axis_extent(range, 100.0).unwrap();
        assert_eq!(extent, extent.ceil());
        assert!(extent >= scaled);
        assert!(extent - scaled < 1.0);
    }

    #[test]
    fn small_range_is_rounded_up() {
        assert_eq!(axis_extent(AttributeRange::new(1.0, 42.3), 100.0).unwrap(), 43.0);
        assert_eq!(axis_extent(AttributeRange::new(-5.0, 100.0), 100.0).unwrap(), 100.0);
    }

    #[test]
    fn draws_only_along_its_axis() {
        let mut scene = Scene::new();
        let extent = draw_axis(
            &mut scene,
            Axis::Y,
            AttributeRange::new(2.0, 64.0),
            100.0,
            Color32::WHITE,
        )
        .unwrap();
        assert_eq!(extent, 64.0);
        let line = scene.lines().next().unwrap();
        assert_eq!(line.start, Vec3::ZERO);
        assert_eq!(line.end, Vec3::new(0.0, 64.0, 0.0));
    }

    #[test]
    fn degenerate_large_range_draws_nothing() {
        let mut scene = Scene::new();
        let err = draw_axis(
            &mut scene,
            Axis::X,
            AttributeRange::new(500.0, 500.0),
            100.0,
            Color32::WHITE,
        );
        assert_eq!(err, Err(ScaleError::DegenerateRange(500.0)));
        assert!(scene.is_empty());
    }
}
