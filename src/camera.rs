use crate::constants::*;
use glam::{Vec3, Vec4};
use ornament_core::Camera;

/// Orbit controls around the tree. Auto-rotates unless suspended.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: CAMERA_PITCH,
            distance: CAMERA_DISTANCE,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(sy * cp, sp, cy * cp) * self.distance
    }

    /// Auto-rotation is suspended while a photo is focused.
    pub fn update(&mut self, dt: f32, suspend_auto_rotate: bool) {
        if !suspend_auto_rotate {
            self.yaw = (self.yaw + AUTO_ROTATE_SPEED * dt) % std::f32::consts::TAU;
        }
    }

    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw -= dx_px * DRAG_RADIANS_PER_PX;
        self.pitch = (self.pitch + dy_px * DRAG_RADIANS_PER_PX)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::look_at(self.eye(), self.target, Vec3::Y, CAMERA_FOVY, aspect)
    }
}

#[inline]
/// Compute a world-space ray from screen-space canvas coordinates.
///
/// - `camera`: camera snapshot used for the last rendered frame
/// - `width`, `height`: canvas backing store size in pixels
/// - `sx`, `sy`: pixel coordinates in the canvas' backing store space
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(camera: &Camera, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
