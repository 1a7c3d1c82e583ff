//! Shared per-frame inputs: the assembly signal, the frame clock and the camera.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! both native and web hosts. The web frontend builds a [`Camera`] from its
//! orbit controls each frame and hands it to the scene read-only.

use glam::{Mat4, Quat, Vec3};

/// Global two-valued signal: dispersed cloud or assembled tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssemblyState {
    #[default]
    Chaos,
    Formed,
}

impl AssemblyState {
    /// Progress value every component converges to under this state.
    #[inline]
    pub fn target(self) -> f32 {
        match self {
            AssemblyState::Chaos => 0.0,
            AssemblyState::Formed => 1.0,
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            AssemblyState::Chaos => AssemblyState::Formed,
            AssemblyState::Formed => AssemblyState::Chaos,
        }
    }

    #[inline]
    pub fn is_formed(self) -> bool {
        self == AssemblyState::Formed
    }
}

/// One tick of the host's render loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    /// Seconds since the scene started. Also the time base for click intake.
    pub elapsed: f64,
    /// Seconds since the previous tick.
    pub dt: f32,
}

impl FrameClock {
    pub fn new(elapsed: f64, dt: f32) -> Self {
        Self { elapsed, dt }
    }
}

const MIN_EXTENT_INPUT: f32 = 1e-4;

/// Right-handed perspective camera. Looks down its local -Z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub orientation: Quat,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, fovy_radians: f32, aspect: f32) -> Self {
        // view = inverse(world); the rotation part of the world transform is the orientation
        let view = Mat4::look_at_rh(eye, target, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        Self {
            eye,
            orientation: rotation.normalize(),
            aspect,
            fovy_radians,
            znear: 0.1,
            zfar: 200.0,
        }
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_radians,
            self.aspect.max(MIN_EXTENT_INPUT),
            self.znear,
            self.zfar,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.eye).inverse()
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Width and height of the view frustum cross-section at `distance`.
    ///
    /// Degenerate aspect or distance is clamped instead of producing zero or NaN.
    pub fn visible_extent_at(&self, distance: f32) -> (f32, f32) {
        let distance = distance.max(MIN_EXTENT_INPUT);
        let aspect = self.aspect.max(MIN_EXTENT_INPUT);
        let height = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        let height = height.max(MIN_EXTENT_INPUT);
        (height * aspect, height)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::look_at(
            Vec3::new(0.0, 0.0, 20.0),
            Vec3::ZERO,
            Vec3::Y,
            std::f32::consts::FRAC_PI_4,
            16.0 / 9.0,
        )
    }
}
