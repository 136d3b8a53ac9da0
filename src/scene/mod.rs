//! Scene context: the retained set of lines, labels and point markers that the
//! plot operations write into and the view renders.
//!
//! The scene is owned by the caller and passed explicitly to every drawing
//! operation. One plot call clears it and rebuilds it from scratch.

pub mod camera;

use eframe::egui::Color32;
use glam::{Quat, Vec3};

pub use camera::OrbitCamera;

// ---------------------------------------------------------------------------
// Scene nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color32,
}

/// Extruded text placed in the scene. The text runs along the node's local +X
/// and reads upright along local +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec3,
    pub rotation: Quat,
    /// Glyph height in scene units.
    pub size: f32,
    /// Extrusion depth in scene units.
    pub depth: f32,
    pub color: Color32,
}

impl TextLabel {
    /// Direction the text runs in, in scene coordinates.
    pub fn baseline_dir(&self) -> Vec3 {
        self.rotation * Vec3::X
    }
}

/// A sphere marker for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    /// `"<class>:<name>"`, shown on hover.
    pub name: String,
    pub position: Vec3,
    pub radius: f32,
    /// Color with the opacity already applied to its alpha channel.
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Line(LineSegment),
    Label(TextLabel),
    Point(PointMarker),
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    #[cfg(test)]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Label(l) => Some(l),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = &PointMarker> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Point(p) => Some(p),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_filtered_by_kind() {
        let mut scene = Scene::new();
        scene.add(SceneNode::Line(LineSegment {
            start: Vec3::ZERO,
            end: Vec3::X,
            color: Color32::WHITE,
        }));
        scene.add(SceneNode::Point(PointMarker {
            name: "Actor:A".into(),
            position: Vec3::ONE,
            radius: 1.0,
            color: Color32::WHITE,
        }));
        assert_eq!(scene.lines().count(), 1);
        assert_eq!(scene.points().count(), 1);
        assert_eq!(scene.labels().count(), 0);

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn label_directions_follow_rotation() {
        let label = TextLabel {
            text: "age".into(),
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2),
            size: 5.0,
            depth: 0.5,
            color: Color32::WHITE,
        };
        assert!((label.baseline_dir() - Vec3::NEG_Y).length() < 1e-6);
        assert!((label.rotation * Vec3::Y - Vec3::X).length() < 1e-6);
    }
}
