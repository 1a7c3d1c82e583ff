//! Point distributions used to seed chaos and formed positions.
//!
//! All functions are stateless; randomness comes from the caller's RNG so that
//! seeded scenes are reproducible.

use crate::constants::{CONE_JITTER, SPIRAL_LOOPS, SPIRAL_OUTWARD_OFFSET};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Uniform-by-volume sample inside a sphere of `radius` centered at the origin.
pub fn uniform_sphere_point<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let w: f32 = rng.gen();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let r = radius * w.cbrt();
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Point on a cone that tapers to its apex at `height_ratio == 1`.
///
/// The cone is centered vertically, spanning `[-height / 2, height / 2]`. The
/// radius carries a symmetric jitter of at most `CONE_JITTER / 2` and is never
/// negative. `height_ratio` must already be in `[0, 1]`.
pub fn cone_point<R: Rng + ?Sized>(
    rng: &mut R,
    height: f32,
    base_radius: f32,
    height_ratio: f32,
) -> Vec3 {
    let y = height_ratio * height;
    let jitter = (rng.gen::<f32>() - 0.5) * CONE_JITTER;
    let radius = (base_radius * (1.0 - height_ratio) + jitter).max(0.0);
    let angle = rng.gen::<f32>() * TAU;
    Vec3::new(radius * angle.cos(), y - height * 0.5, radius * angle.sin())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralPlacement {
    pub position: Vec3,
    /// Yaw (radians) that turns an item away from the tree axis.
    pub facing_angle: f32,
}

/// Place item `index` of `total` along a helix descending from the top.
///
/// Callers guarantee `total >= 1`.
pub fn spiral_point(index: usize, total: usize, height: f32, base_radius: f32) -> SpiralPlacement {
    let along = (index as f32 + 0.5) / total as f32;
    let height_ratio = 1.0 - along;
    let theta = spiral_theta(index, total);
    let radius = base_radius * (1.0 - height_ratio) + SPIRAL_OUTWARD_OFFSET;
    let y = (height_ratio - 0.5) * height;
    SpiralPlacement {
        position: Vec3::new(radius * theta.cos(), y, radius * theta.sin()),
        facing_angle: -theta,
    }
}

/// Angle of the spiral at `index`, as used for `facing_angle`.
#[inline]
pub fn spiral_theta(index: usize, total: usize) -> f32 {
    (index as f32 + 0.5) / total as f32 * SPIRAL_LOOPS * TAU
}
