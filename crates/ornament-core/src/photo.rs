//! Photo frame entities: resting pose tracking, camera-relative focus, flip and
//! clearing, plus the per-frame deferred-blur timer used for click
//! disambiguation.
//!
//! A frame never decides focus on its own. The [`crate::Gallery`] owns the
//! single focused id and tells each frame whether it is focused when updating.

use crate::config::MotionRates;
use crate::constants::*;
use crate::motion::{approach_linear, damp_f32, damp_quat, damp_vec3, ease_out_cubic, settle};
use crate::spatial::SpiralPlacement;
use crate::state::{AssemblyState, Camera};
use glam::{EulerRot, Quat, Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Stable identifier of a photo frame for the lifetime of its photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "photo-{}", self.0)
    }
}

/// Ready-to-use photo handed over by the environment (decode happens outside).
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoDescriptor {
    /// Opaque image reference, e.g. an object URL.
    pub image: String,
    /// Frame height relative to a unit-width frame; `None` uses the default.
    pub frame_height: Option<f32>,
}

impl PhotoDescriptor {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            frame_height: None,
        }
    }

    pub fn with_frame_height(mut self, frame_height: f32) -> Self {
        self.frame_height = Some(frame_height);
        self
    }
}

/// What the back of every frame shows once flipped.
#[derive(Clone, Debug, PartialEq)]
pub enum BackFace {
    Image(String),
    Text(String),
}

impl Default for BackFace {
    fn default() -> Self {
        BackFace::Text("Merry Christmas".to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

/// Per-tick inputs shared by every frame in the gallery.
#[derive(Clone, Copy, Debug)]
pub struct FrameTick<'a> {
    pub assembly: AssemblyState,
    pub clearing: bool,
    pub camera: &'a Camera,
    pub dt: f32,
}

/// Orientation for a spiral slot's `facing_angle` (the negated polar angle).
/// The frame's +Z axis then points horizontally away from the tree axis.
#[inline]
pub fn facing_rotation(facing_angle: f32) -> Quat {
    Quat::from_rotation_y(facing_angle + FRAC_PI_2)
}

/// Decorative chaos orientation taken straight from the chaos coordinates.
#[inline]
pub fn chaos_rotation(chaos_local: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, chaos_local.x, chaos_local.y, chaos_local.z)
}

/// Uniform scale that fits a `frame_height`-tall frame (plus border) into the
/// camera view at the focus distance.
pub fn focus_fit_scale(camera: &Camera, frame_height: f32) -> f32 {
    let (view_w, view_h) = camera.visible_extent_at(FOCUS_DISTANCE);
    let fit_w = view_w * FOCUS_FIT_MARGIN / (FRAME_WIDTH + FRAME_BORDER);
    let fit_h = view_h * FOCUS_FIT_MARGIN / (frame_height + FRAME_BORDER).max(1e-4);
    fit_w.min(fit_h)
}

pub struct PhotoFrame {
    id: FrameId,
    image: String,
    frame_height: f32,

    chaos_position: Vec3,
    chaos_rotation: Quat,
    target_position: Vec3,
    target_rotation: Quat,

    rest_position: Vec3,
    rest_rotation: Quat,

    focus_progress: f32,
    flip_progress: f32,
    flipped: bool,
    visibility: f32,

    pending_blur: Option<f64>,
    last_click: Option<f64>,

    rates: MotionRates,
    pose: FramePose,
}

impl PhotoFrame {
    /// `chaos_local` and `placement` are tree-local; `origin` maps them to world.
    pub fn new(
        id: FrameId,
        photo: &PhotoDescriptor,
        chaos_local: Vec3,
        placement: SpiralPlacement,
        origin: Vec3,
        rates: MotionRates,
    ) -> Self {
        let chaos_position = origin + chaos_local;
        let chaos_rotation = chaos_rotation(chaos_local);
        let target_position = origin + placement.position;
        Self {
            id,
            image: photo.image.clone(),
            frame_height: photo.frame_height.unwrap_or(DEFAULT_FRAME_HEIGHT),
            chaos_position,
            chaos_rotation,
            target_position,
            target_rotation: facing_rotation(placement.facing_angle),
            rest_position: chaos_position,
            rest_rotation: chaos_rotation,
            focus_progress: 0.0,
            flip_progress: 0.0,
            flipped: false,
            visibility: 1.0,
            pending_blur: None,
            last_click: None,
            rates,
            pose: FramePose {
                position: chaos_position,
                rotation: chaos_rotation,
                scale: 1.0,
            },
        }
    }

    /// New spiral slot after the photo list changed. The current pose keeps
    /// tracking smoothly from wherever it is.
    pub fn retarget(&mut self, placement: SpiralPlacement, origin: Vec3, photo: &PhotoDescriptor) {
        self.target_position = origin + placement.position;
        self.target_rotation = facing_rotation(placement.facing_angle);
        self.frame_height = photo.frame_height.unwrap_or(DEFAULT_FRAME_HEIGHT);
    }

    pub fn update(&mut self, tick: &FrameTick<'_>, focused: bool) {
        let dt = tick.dt;

        // 1. clearing: shrink away, and never count as focused while doing so
        let focused = if tick.clearing {
            self.visibility = settle(damp_f32(self.visibility, 0.0, self.rates.clear, dt), 0.0);
            false
        } else {
            self.visibility = 1.0;
            focused
        };

        // 2. resting target
        let (goal_position, goal_rotation) = if tick.assembly.is_formed() {
            (self.target_position, self.target_rotation)
        } else {
            (self.chaos_position, self.chaos_rotation)
        };

        // 3. resting pose smoothing, tracked even while focused
        self.rest_position = damp_vec3(self.rest_position, goal_position, self.rates.rest, dt);
        self.rest_rotation = damp_quat(self.rest_rotation, goal_rotation, self.rates.rest, dt);

        // 4. active pose in front of the camera
        let camera = tick.camera;
        let active_position = camera.eye + camera.forward() * FOCUS_DISTANCE;
        let mut active_rotation = camera.orientation;
        if self.flip_progress > 0.0 {
            active_rotation *= Quat::from_rotation_y(self.flip_progress * PI);
        }
        let active_scale = focus_fit_scale(camera, self.frame_height);

        // 5. flip
        let flip_target = if self.flipped { 1.0 } else { 0.0 };
        self.flip_progress = settle(
            damp_f32(self.flip_progress, flip_target, self.rates.flip, dt),
            flip_target,
        );

        // 6. focus
        let focus_target = if focused { 1.0 } else { 0.0 };
        self.focus_progress =
            approach_linear(self.focus_progress, focus_target, self.rates.focus * dt)
                .clamp(0.0, 1.0);
        if self.focus_progress == 0.0 && self.flipped {
            self.flipped = false;
        }

        // 7. blend
        let t = ease_out_cubic(self.focus_progress);
        self.pose = FramePose {
            position: self.rest_position.lerp(active_position, t),
            rotation: self.rest_rotation.slerp(active_rotation, t).normalize(),
            scale: (1.0 + (active_scale - 1.0) * t) * self.visibility,
        };
    }

    /// Arm the deferred single-click blur.
    pub fn arm_blur(&mut self, now: f64, delay: f64) {
        self.pending_blur = Some(now + delay);
    }

    /// Returns whether a blur was pending.
    pub fn cancel_pending_blur(&mut self) -> bool {
        self.pending_blur.take().is_some()
    }

    /// Consume the deferred blur if its deadline has passed.
    pub fn take_due_blur(&mut self, now: f64) -> bool {
        match self.pending_blur {
            Some(deadline) if now >= deadline => {
                self.pending_blur = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn has_pending_blur(&self) -> bool {
        self.pending_blur.is_some()
    }

    /// Record a click and report whether it pairs with the previous one.
    pub fn register_click(&mut self, now: f64, window: f64) -> bool {
        let paired = matches!(self.last_click, Some(prev) if now - prev <= window);
        self.last_click = if paired { None } else { Some(now) };
        paired
    }

    pub fn toggle_flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    /// Release per-entity timers before the frame is dropped.
    pub fn teardown(&mut self) {
        self.pending_blur = None;
        self.last_click = None;
    }

    #[inline]
    pub fn id(&self) -> FrameId {
        self.id
    }

    #[inline]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[inline]
    pub fn frame_height(&self) -> f32 {
        self.frame_height
    }

    #[inline]
    pub fn pose(&self) -> &FramePose {
        &self.pose
    }

    #[inline]
    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    #[inline]
    pub fn rest_rotation(&self) -> Quat {
        self.rest_rotation
    }

    #[inline]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    #[inline]
    pub fn target_rotation(&self) -> Quat {
        self.target_rotation
    }

    #[inline]
    pub fn chaos_position(&self) -> Vec3 {
        self.chaos_position
    }

    #[inline]
    pub fn chaos_rotation(&self) -> Quat {
        self.chaos_rotation
    }

    #[inline]
    pub fn focus_progress(&self) -> f32 {
        self.focus_progress
    }

    #[inline]
    pub fn flip_progress(&self) -> f32 {
        self.flip_progress
    }

    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[inline]
    pub fn visibility(&self) -> f32 {
        self.visibility
    }

    /// Whether the back face is the one turned toward the viewer. For hosts
    /// that choose faces on the CPU; the bundled web renderer uses the
    /// rasterizer's facing instead.
    #[inline]
    pub fn show_back(&self) -> bool {
        self.flip_progress > 0.5
    }

    /// Half width/height of the bordered frame in world units at its current scale.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(FRAME_WIDTH + FRAME_BORDER, self.frame_height + FRAME_BORDER)
            * 0.5
            * self.pose.scale
    }
}
