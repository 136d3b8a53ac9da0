use eframe::egui::{Pos2, Rect, Vec2};
use glam::{Mat4, Vec3};

const NEAR: f32 = 0.1;
const FAR: f32 = 10_000.0;
const MAX_PITCH: f32 = 1.5;

/// A scene point mapped into the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    /// Distance along the view direction; larger is further away.
    pub depth: f32,
}

/// Perspective camera orbiting a target point.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Rotation about the world Y axis, radians.
    pub yaw: f32,
    /// Elevation above the XZ plane, radians.
    pub pitch: f32,
    pub distance: f32,
    /// Vertical field of view, radians.
    pub fov_y: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::splat(50.0),
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.35,
            distance: 260.0,
            fov_y: 45f32.to_radians(),
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        let proj = Mat4::perspective_rh_gl(self.fov_y, aspect.max(1e-3), NEAR, FAR);
        proj * view
    }

    /// Map a scene point into `rect`. `None` when the point is behind the camera.
    pub fn project(&self, world: Vec3, rect: Rect) -> Option<Projected> {
        let clip = self.view_proj(rect.aspect_ratio()) * world.extend(1.0);
        if clip.w <= NEAR {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let center = rect.center();
        Some(Projected {
            pos: Pos2::new(
                center.x + ndc.x * rect.width() * 0.5,
                center.y - ndc.y * rect.height() * 0.5,
            ),
            depth: clip.w,
        })
    }

    /// Screen pixels covered by one scene unit at the given depth.
    pub fn pixels_per_unit(&self, depth: f32, rect: Rect) -> f32 {
        rect.height() * 0.5 / ((self.fov_y * 0.5).tan() * depth.max(NEAR))
    }

    /// Rotate around the target by a mouse drag delta (pixels).
    pub fn orbit(&mut self, drag: Vec2) {
        self.yaw -= drag.x * 0.01;
        self.pitch = (self.pitch + drag.y * 0.01).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Dolly towards/away from the target by a scroll delta.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * (-scroll * 0.002).exp()).clamp(1.0, FAR * 0.5);
    }

    /// Look at the middle of the plotted box from `(x*1.8, y*0.75, z*1.8)`.
    /// A flat plot (no z axis) is viewed as if it were as deep as it is wide.
    pub fn frame_extents(&mut self, extents: [f64; 3]) {
        let [x, y, z] = extents.map(|e| e.max(0.0) as f32);
        if x == 0.0 && y == 0.0 && z == 0.0 {
            *self = Self::default();
            return;
        }
        let depth = if z > 0.0 { z } else { x.max(y) };
        self.target = Vec3::new(x, y, z) * 0.5;

        let offset = Vec3::new(x * 1.8, y * 0.75, depth * 1.8) - self.target;
        self.distance = offset.length().max(1.0);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / self.distance).asin().clamp(-MAX_PITCH, MAX_PITCH);
    }
}
