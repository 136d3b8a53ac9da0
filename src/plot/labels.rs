use std::f32::consts::FRAC_PI_2;

use eframe::egui::Color32;
use glam::{Quat, Vec3};

use crate::config::LabelStyle;
use crate::scene::TextLabel;

use super::Axis;

/// Approximate rendered width of `text` in scene units.
pub fn label_width(text: &str, style: &LabelStyle) -> f32 {
    text.chars().count() as f32 * style.size * style.advance_ratio
}

/// Build the label for `axis` whose far end sits at `position`.
///
/// The label is pushed `style.offset` units into the neighbouring plane.
/// The x label ends at the axis tip. The y label is turned a quarter turn
/// about z and the z label a quarter turn about y, so both read upright from
/// the default viewpoint.
pub fn place_label(
    axis: Axis,
    position: f32,
    text: &str,
    style: &LabelStyle,
    color: Color32,
) -> TextLabel {
    let (translation, rotation) = match axis {
        Axis::X => (
            Vec3::new(position - label_width(text, style), 0.0, -style.offset),
            Quat::IDENTITY,
        ),
        Axis::Y => (
            Vec3::new(0.0, position, -style.offset),
            Quat::from_axis_angle(Vec3::Z, -FRAC_PI_2),
        ),
        Axis::Z => (
            Vec3::new(-style.offset, 0.0, position),
            Quat::from_axis_angle(Vec3::Y, FRAC_PI_2),
        ),
    };

    TextLabel {
        text: text.to_string(),
        position: translation,
        rotation,
        size: style.size,
        depth: style.depth,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn x_label_ends_at_axis_tip() {
        let style = LabelStyle::default();
        let label = place_label(Axis::X, 100.0, "age", &style, Color32::WHITE);
        // 3 glyphs * 5.0 * 0.6
        assert!(close(label.position, Vec3::new(91.0, 0.0, -5.0)));
        assert_eq!(label.rotation, Quat::IDENTITY);
        assert_eq!(label.size, 5.0);
        assert_eq!(label.depth, 0.5);
    }

    #[test]
    fn y_label_is_turned_about_z() {
        let label = place_label(Axis::Y, 80.0, "movies", &LabelStyle::default(), Color32::WHITE);
        assert_eq!(label.position, Vec3::new(0.0, 80.0, -5.0));
        assert!(close(label.baseline_dir(), Vec3::NEG_Y));
    }

    #[test]
    fn z_label_is_turned_about_y() {
        let label = place_label(Axis::Z, 60.0, "gross", &LabelStyle::default(), Color32::WHITE);
        assert_eq!(label.position, Vec3::new(-5.0, 0.0, 60.0));
        assert!(close(label.baseline_dir(), Vec3::NEG_Z));
        assert!(close(label.rotation * Vec3::Y, Vec3::Y));
    }
}
