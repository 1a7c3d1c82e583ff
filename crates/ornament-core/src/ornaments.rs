//! Instanced ornament batches (boxes, balls, lights).
//!
//! Unlike the foliage field, each instance converges at its own rate and
//! carries type-dependent spin/twinkle, so the blend runs per instance on the
//! CPU. Counts are bounded by `ORNAMENT_MAX_PER_BATCH`.

use crate::constants::*;
use crate::motion::damp_vec3;
use crate::spatial::{cone_point, uniform_sphere_point};
use crate::state::AssemblyState;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrnamentKind {
    Box,
    Ball,
    Light,
}

impl OrnamentKind {
    pub const ALL: [OrnamentKind; 3] = [OrnamentKind::Box, OrnamentKind::Ball, OrnamentKind::Light];

    /// How far past the foliage surface the formed position is pushed.
    pub fn surface_offset(self) -> f32 {
        match self {
            OrnamentKind::Box => BOX_SURFACE_OFFSET,
            OrnamentKind::Ball => BALL_SURFACE_OFFSET,
            OrnamentKind::Light => LIGHT_SURFACE_OFFSET,
        }
    }

    #[inline]
    pub fn spins(self) -> bool {
        !matches!(self, OrnamentKind::Box)
    }

    #[inline]
    pub fn twinkles(self) -> bool {
        matches!(self, OrnamentKind::Light)
    }

    pub fn name(self) -> &'static str {
        match self {
            OrnamentKind::Box => "box",
            OrnamentKind::Ball => "ball",
            OrnamentKind::Light => "light",
        }
    }
}

/// Culling contract of a batch. Instances wander far outside any fixed volume
/// while dispersed, so batches report themselves as unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    Unbounded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for InstanceTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl InstanceTransform {
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }
}

/// Push a cone point outward along its horizontal radial direction.
pub fn push_outward(point: Vec3, offset: f32) -> Vec3 {
    let radial = Vec3::new(point.x, 0.0, point.z);
    match radial.try_normalize() {
        Some(dir) => point + dir * offset,
        None => point,
    }
}

pub struct OrnamentBatch {
    kind: OrnamentKind,
    chaos: Vec<Vec3>,
    target: Vec<Vec3>,
    speed: Vec<f32>,
    base_rotation: Vec<Quat>,
    current: Vec<Vec3>,
    transforms: Vec<InstanceTransform>,
}

impl OrnamentBatch {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, kind: OrnamentKind, count: usize) -> Self {
        let mut chaos = Vec::with_capacity(count);
        let mut target = Vec::with_capacity(count);
        let mut speed = Vec::with_capacity(count);
        let mut base_rotation = Vec::with_capacity(count);
        for _ in 0..count {
            chaos.push(uniform_sphere_point(rng, ORNAMENT_CHAOS_RADIUS));
            let ratio = rng.gen::<f32>().powf(ORNAMENT_HEIGHT_BIAS);
            let on_cone = cone_point(rng, TREE_HEIGHT, TREE_BASE_RADIUS, ratio);
            target.push(push_outward(on_cone, kind.surface_offset()));
            speed.push(rng.gen_range(ORNAMENT_SPEED_MIN..ORNAMENT_SPEED_MAX));
            base_rotation.push(Quat::from_euler(
                glam::EulerRot::XYZ,
                rng.gen::<f32>() * TAU,
                rng.gen::<f32>() * TAU,
                rng.gen::<f32>() * TAU,
            ));
        }
        let current = chaos.clone();
        let transforms = current
            .iter()
            .zip(&base_rotation)
            .map(|(p, r)| InstanceTransform {
                position: *p,
                rotation: *r,
                scale: 1.0,
            })
            .collect();
        Self {
            kind,
            chaos,
            target,
            speed,
            base_rotation,
            current,
            transforms,
        }
    }

    pub fn update(&mut self, assembly: AssemblyState, elapsed: f32, dt: f32) {
        let goals = if assembly.is_formed() {
            &self.target
        } else {
            &self.chaos
        };
        let kind = self.kind;
        for i in 0..self.current.len() {
            let speed = self.speed[i];
            self.current[i] = damp_vec3(self.current[i], goals[i], speed, dt);

            let rotation = if kind.spins() {
                let yaw = elapsed * ORNAMENT_SPIN_FACTOR * speed;
                Quat::from_rotation_y(yaw) * self.base_rotation[i]
            } else {
                self.base_rotation[i]
            };
            let scale = if kind.twinkles() {
                1.0 + (elapsed * ORNAMENT_TWINKLE_FREQUENCY + i as f32).sin()
                    * ORNAMENT_TWINKLE_AMPLITUDE
            } else {
                1.0
            };

            let t = &mut self.transforms[i];
            t.position = self.current[i];
            t.rotation = rotation;
            t.scale = scale;
        }
    }

    #[inline]
    pub fn kind(&self) -> OrnamentKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[inline]
    pub fn transforms(&self) -> &[InstanceTransform] {
        &self.transforms
    }

    #[inline]
    pub fn chaos_positions(&self) -> &[Vec3] {
        &self.chaos
    }

    #[inline]
    pub fn target_positions(&self) -> &[Vec3] {
        &self.target
    }

    #[inline]
    pub fn speeds(&self) -> &[f32] {
        &self.speed
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::Unbounded
    }
}
