//! Frame-rate independent smoothing helpers.
//!
//! Every damped channel in the scene goes through [`damp_factor`], which maps a
//! rate (1/s) and a frame delta to a blend weight in `[0, 1)`. Because the
//! weight never reaches 1, damped values approach their target monotonically
//! and never overshoot, regardless of how large `dt` gets.

use glam::{Quat, Vec3};

#[inline]
pub fn damp_factor(rate: f32, dt: f32) -> f32 {
    if dt <= 0.0 || rate <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * dt).exp()
}

#[inline]
pub fn damp_f32(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * damp_factor(rate, dt)
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, damp_factor(rate, dt))
}

#[inline]
pub fn damp_quat(current: Quat, target: Quat, rate: f32, dt: f32) -> Quat {
    current.slerp(target, damp_factor(rate, dt)).normalize()
}

/// Move `current` toward `target` by at most `step`, landing exactly on it.
#[inline]
pub fn approach_linear(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

#[inline]
pub fn smoothstep01(x: f32) -> f32 {
    let t = x.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn ease_out_cubic(x: f32) -> f32 {
    let inv = 1.0 - x.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Distance below which a damped scalar snaps onto its target.
pub const SETTLE_EPSILON: f32 = 1e-4;

/// Snap `value` onto `target` once it is within [`SETTLE_EPSILON`].
#[inline]
pub fn settle(value: f32, target: f32) -> f32 {
    if (target - value).abs() < SETTLE_EPSILON {
        target
    } else {
        value
    }
}
