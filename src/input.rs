use crate::constants::{HOLD_TO_TOGGLE_SECS, PRESS_MOVE_TOLERANCE_PX};
use glam::{Quat, Vec2, Vec3};
use ornament_core::{FrameId, PhotoFrame};
use web_sys as web;

/// Intersect a ray with a rectangle lying in the local XY plane of `rotation`.
/// Both faces are hit-testable.
pub fn ray_rect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    rotation: Quat,
    half_extents: Vec2,
) -> Option<f32> {
    let normal = rotation * Vec3::Z;
    let denom = normal.dot(ray_dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = normal.dot(center - ray_origin) / denom;
    if t < 0.0 {
        return None;
    }
    let local = rotation.inverse() * (ray_origin + ray_dir * t - center);
    (local.x.abs() <= half_extents.x && local.y.abs() <= half_extents.y).then_some(t)
}

/// Nearest photo frame under the ray. Frames that have shrunk away are skipped.
pub fn pick_frame(ray_origin: Vec3, ray_dir: Vec3, frames: &[PhotoFrame]) -> Option<FrameId> {
    let mut best = None::<(FrameId, f32)>;
    for frame in frames {
        let pose = frame.pose();
        if pose.scale <= 1e-3 {
            continue;
        }
        if let Some(t) = ray_rect(ray_origin, ray_dir, pose.position, pose.rotation, frame.half_extents()) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((frame.id(), t)),
            }
        }
    }
    best.map(|(id, _)| id)
}

/// What a finished press turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressOutcome {
    Click(Vec2),
    /// The hold already fired while the pointer was down.
    Hold,
    Drag,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    start: Vec2,
    last: Vec2,
    started_at: f64,
    moved: bool,
    held: bool,
}

/// Classifies a pointer press as click, press-and-hold or orbit drag.
#[derive(Default, Clone, Copy, Debug)]
pub struct PressTracker {
    press: Option<Press>,
}

impl PressTracker {
    pub fn press(&mut self, pos: Vec2, now: f64) {
        self.press = Some(Press {
            start: pos,
            last: pos,
            started_at: now,
            moved: false,
            held: false,
        });
    }

    /// Returns the drag delta in pixels once the press has become a drag.
    pub fn motion(&mut self, pos: Vec2) -> Option<Vec2> {
        let press = self.press.as_mut()?;
        if !press.moved && !press.held && pos.distance(press.start) > PRESS_MOVE_TOLERANCE_PX {
            press.moved = true;
        }
        let delta = pos - press.last;
        press.last = pos;
        press.moved.then_some(delta)
    }

    /// True exactly once when a press has been held still long enough.
    pub fn poll_hold(&mut self, now: f64) -> bool {
        match self.press.as_mut() {
            Some(p) if !p.moved && !p.held && now - p.started_at >= HOLD_TO_TOGGLE_SECS => {
                p.held = true;
                true
            }
            _ => false,
        }
    }

    pub fn release(&mut self, pos: Vec2) -> Option<PressOutcome> {
        let press = self.press.take()?;
        Some(if press.held {
            PressOutcome::Hold
        } else if press.moved {
            PressOutcome::Drag
        } else {
            PressOutcome::Click(pos)
        })
    }

    pub fn cancel(&mut self) {
        self.press = None;
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
