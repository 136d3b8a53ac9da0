use eframe::egui::emath::Rot2;
use eframe::egui::epaint::TextShape;
use eframe::egui::{Align2, Color32, FontFamily, FontId, Painter, Rect, Sense, Stroke, Ui, Vec2};
use glam::Vec3;

use crate::scene::camera::Projected;
use crate::scene::{OrbitCamera, PointMarker, TextLabel};
use crate::state::AppState;

const AXIS_STROKE: f32 = 1.5;
const MIN_POINT_PX: f32 = 1.5;
const HOVER_SLOP_PX: f32 = 4.0;

// ---------------------------------------------------------------------------
// 3D scene view (central panel)
// ---------------------------------------------------------------------------

/// Render the scene with the orbit camera. Drag to orbit, scroll to zoom.
pub fn scene_view(ui: &mut Ui, state: &mut AppState, label_family: &FontFamily) {
    if state.scene.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalog (File → Open…), choose axes and press Plot");
        });
        return;
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
    if response.dragged() {
        state.camera.orbit(response.drag_delta());
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            state.camera.zoom(scroll);
        }
    }

    let rect = response.rect;
    let camera = &state.camera;
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    for line in state.scene.lines() {
        if let (Some(a), Some(b)) = (camera.project(line.start, rect), camera.project(line.end, rect)) {
            painter.line_segment([a.pos, b.pos], Stroke::new(AXIS_STROKE, line.color));
        }
    }

    // far to near so closer markers overlap further ones
    let mut points: Vec<(Projected, &PointMarker)> = state
        .scene
        .points()
        .filter_map(|m| Some((camera.project(m.position, rect)?, m)))
        .collect();
    points.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

    for (p, marker) in &points {
        painter.circle_filled(p.pos, screen_radius(camera, p, marker, rect), marker.color);
    }

    for label in state.scene.labels() {
        draw_label(&painter, camera, rect, label, label_family);
    }

    let hovered = response.hover_pos().and_then(|cursor| {
        points
            .iter()
            .rev()
            .find(|(p, m)| p.pos.distance(cursor) <= screen_radius(camera, p, m, rect) + HOVER_SLOP_PX)
    });
    if let Some((p, marker)) = hovered {
        painter.text(
            p.pos + Vec2::new(8.0, -8.0),
            Align2::LEFT_BOTTOM,
            &marker.name,
            FontId::proportional(14.0),
            ui.visuals().strong_text_color(),
        );
    }
}

fn screen_radius(camera: &OrbitCamera, p: &Projected, marker: &PointMarker, rect: Rect) -> f32 {
    (marker.radius * camera.pixels_per_unit(p.depth, rect)).max(MIN_POINT_PX)
}

/// Draw a label as text along its projected baseline, with its extruded back
/// face drawn first as a darker copy.
fn draw_label(
    painter: &Painter,
    camera: &OrbitCamera,
    rect: Rect,
    label: &TextLabel,
    family: &FontFamily,
) {
    let back = label.position - label.rotation * Vec3::Z * label.depth;
    let shade = label.color.gamma_multiply(0.4);
    draw_label_face(painter, camera, rect, label, back, shade, family);
    draw_label_face(painter, camera, rect, label, label.position, label.color, family);
}

fn draw_label_face(
    painter: &Painter,
    camera: &OrbitCamera,
    rect: Rect,
    label: &TextLabel,
    anchor: Vec3,
    color: Color32,
    family: &FontFamily,
) {
    let (Some(origin), Some(along)) = (
        camera.project(anchor, rect),
        camera.project(anchor + label.baseline_dir(), rect),
    ) else {
        return;
    };

    let dir = along.pos - origin.pos;
    let angle = dir.y.atan2(dir.x);
    let px = (label.size * camera.pixels_per_unit(origin.depth, rect)).clamp(6.0, 64.0);

    let galley = painter.layout_no_wrap(label.text.clone(), FontId::new(px, family.clone()), color);
    // the label's position is its baseline start; text shapes anchor at top-left
    let top_left = origin.pos + Rot2::from_angle(angle) * Vec2::new(0.0, -galley.size().y);
    painter.add(TextShape::new(top_left, galley, color).with_angle(angle));
}
