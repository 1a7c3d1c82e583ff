//! Foliage particle field: a large point cloud blended by one progress scalar.
//!
//! Per frame the controlling thread only advances `progress` and `time`; the
//! per-point blend runs in the vertex shader from [`FoliageUniforms`]. The same
//! formula is available on the CPU through [`FoliageField::evaluate_into`] for
//! hosts without a GPU path (and for tests).

use crate::constants::*;
use crate::motion::{damp_f32, settle};
use crate::spatial::{cone_point, uniform_sphere_point};
use crate::state::AssemblyState;
use glam::Vec3;
use rand::Rng;

/// Immutable per-point data, uploaded once as a vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FoliagePoint {
    pub chaos: [f32; 3],
    pub phase: f32,
    pub target: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

/// The only per-frame values the GPU needs for the whole field.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FoliageUniforms {
    pub progress: f32,
    pub time: f32,
    pub drift_amplitude: f32,
    pub drift_frequency: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoliageShade {
    Primary,
    Secondary,
    Accent,
}

impl FoliageShade {
    /// Weighted pick from a uniform `choice` in `[0, 1)`.
    #[inline]
    pub fn from_choice(choice: f32) -> Self {
        if choice > FOLIAGE_ACCENT_THRESHOLD {
            FoliageShade::Accent
        } else if choice > FOLIAGE_SECONDARY_THRESHOLD {
            FoliageShade::Secondary
        } else {
            FoliageShade::Primary
        }
    }

    pub fn rgb(self) -> [f32; 3] {
        match self {
            FoliageShade::Primary => FOLIAGE_PRIMARY,
            FoliageShade::Secondary => FOLIAGE_SECONDARY,
            FoliageShade::Accent => FOLIAGE_ACCENT,
        }
    }
}

/// Drift offset for one point. Mirrors `foliage_drift` in `shaders/foliage.wgsl`.
#[inline]
pub fn foliage_drift(phase: f32, time: f32, progress: f32) -> Vec3 {
    let amp = FOLIAGE_DRIFT_AMPLITUDE * (1.0 - progress.clamp(0.0, 1.0));
    let w = time * FOLIAGE_DRIFT_FREQUENCY + phase;
    Vec3::new(w.sin(), (w * 0.7).cos(), (w * 1.3).sin()) * amp
}

pub struct FoliageField {
    points: Vec<FoliagePoint>,
    progress: f32,
    time: f32,
    rate: f32,
}

impl FoliageField {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, count: usize, rate: f32) -> Self {
        let points = (0..count)
            .map(|i| {
                let chaos = uniform_sphere_point(rng, FOLIAGE_CHAOS_RADIUS);
                let ratio = rng.gen::<f32>().powf(FOLIAGE_HEIGHT_BIAS);
                let target = cone_point(rng, TREE_HEIGHT, TREE_BASE_RADIUS, ratio);
                let [r, g, b] = FoliageShade::from_choice(rng.gen()).rgb();
                FoliagePoint {
                    chaos: chaos.to_array(),
                    phase: i as f32,
                    target: target.to_array(),
                    _pad: 0.0,
                    color: [r, g, b, 1.0],
                }
            })
            .collect();
        Self {
            points,
            progress: 0.0,
            time: 0.0,
            rate,
        }
    }

    /// Advance the shared progress scalar and clock. O(1).
    pub fn update(&mut self, assembly: AssemblyState, dt: f32) {
        let target = assembly.target();
        let next = damp_f32(self.progress, target, self.rate, dt).clamp(0.0, 1.0);
        self.progress = settle(next, target);
        self.time += dt;
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn points(&self) -> &[FoliagePoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn uniforms(&self) -> FoliageUniforms {
        FoliageUniforms {
            progress: self.progress,
            time: self.time,
            drift_amplitude: FOLIAGE_DRIFT_AMPLITUDE,
            drift_frequency: FOLIAGE_DRIFT_FREQUENCY,
        }
    }

    /// Batched CPU evaluation of every point's blended position (tree-local).
    ///
    /// Reuses `out`'s allocation across frames.
    pub fn evaluate_into(&self, out: &mut Vec<Vec3>) {
        let p = self.progress;
        let t = self.time;
        out.clear();
        out.extend(self.points.iter().map(|pt| {
            let chaos = Vec3::from(pt.chaos);
            let target = Vec3::from(pt.target);
            chaos.lerp(target, p) + foliage_drift(pt.phase, t, p)
        }));
    }
}
