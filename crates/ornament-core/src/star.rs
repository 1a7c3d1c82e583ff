//! Star centerpiece above the tree apex.
//!
//! One linear progress scalar drives every visual channel through a
//! smoothstep; the point light alone follows the raw value.

use crate::constants::*;
use crate::motion::{approach_linear, smoothstep01};
use crate::state::AssemblyState;
use crate::swarm::ChaoticSwarm;
use glam::Vec3;
use rand::Rng;

/// Render-facing snapshot of the star for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarVisual {
    pub visible: bool,
    pub opacity: f32,
    pub emissive_intensity: f32,
    pub scale: f32,
    pub yaw: f32,
    pub bob_offset: f32,
    pub light_intensity: f32,
    /// World-space position including the bob offset.
    pub position: Vec3,
}

pub struct StarCenterpiece {
    anchor: Vec3,
    progress: f32,
    rate: f32,
    yaw: f32,
    visual: StarVisual,
    swarm: ChaoticSwarm,
}

impl StarCenterpiece {
    /// `anchor` is the world-space resting position of the star.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, anchor: Vec3, swarm_count: usize, rate: f32) -> Self {
        let swarm = ChaoticSwarm::new(rng, swarm_count);
        Self {
            anchor,
            progress: 0.0,
            rate,
            yaw: 0.0,
            visual: StarVisual {
                visible: false,
                opacity: 0.0,
                emissive_intensity: 0.0,
                scale: STAR_SCALE_DISPERSED,
                yaw: 0.0,
                bob_offset: 0.0,
                light_intensity: 0.0,
                position: anchor,
            },
            swarm,
        }
    }

    pub fn update(&mut self, assembly: AssemblyState, elapsed: f32, dt: f32) {
        self.progress =
            approach_linear(self.progress, assembly.target(), self.rate * dt).clamp(0.0, 1.0);
        let smoothed = smoothstep01(self.progress);
        let visible = smoothed > VISIBILITY_EPSILON;

        let mut bob_offset = 0.0;
        if visible {
            self.yaw = (self.yaw + STAR_SPIN_RATE * dt) % std::f32::consts::TAU;
            bob_offset = (elapsed * STAR_BOB_FREQUENCY).sin() * STAR_BOB_AMPLITUDE * smoothed;
        }

        self.visual = StarVisual {
            visible,
            opacity: smoothed,
            emissive_intensity: STAR_EMISSIVE_GAIN * smoothed,
            scale: STAR_SCALE_DISPERSED - STAR_SCALE_SHRINK * smoothed,
            yaw: self.yaw,
            bob_offset,
            light_intensity: STAR_LIGHT_INTENSITY * self.progress,
            position: self.anchor + Vec3::Y * bob_offset,
        };

        self.swarm.set_opacity(smoothed);
        self.swarm.update(elapsed);
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn visual(&self) -> &StarVisual {
        &self.visual
    }

    #[inline]
    pub fn swarm(&self) -> &ChaoticSwarm {
        &self.swarm
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }
}
