use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct SwarmParticle {
    pub radius: f32,
    pub speed: f32,
    pub frequency: Vec3,
    pub phase: Vec3,
    pub color: [f32; 3],
}

impl SwarmParticle {
    /// Closed-form Lissajous orbit position at `time`, relative to the star.
    #[inline]
    pub fn position_at(&self, time: f32) -> Vec3 {
        let w = self.frequency * (time * self.speed) + self.phase;
        Vec3::new(w.x.sin(), w.y.sin(), w.z.sin()) * self.radius
    }
}

/// Small orbiting point system owned by the star. Always in motion; its only
/// external input is the opacity channel.
pub struct ChaoticSwarm {
    particles: Vec<SwarmParticle>,
    positions: Vec<Vec3>,
    opacity: f32,
}

impl ChaoticSwarm {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let particles: Vec<SwarmParticle> = (0..count)
            .map(|_| SwarmParticle {
                radius: rng.gen_range(SWARM_RADIUS_MIN..SWARM_RADIUS_MAX),
                speed: rng.gen_range(SWARM_SPEED_MIN..SWARM_SPEED_MAX),
                frequency: Vec3::new(
                    rng.gen_range(SWARM_FREQUENCY_MIN..SWARM_FREQUENCY_MAX),
                    rng.gen_range(SWARM_FREQUENCY_MIN..SWARM_FREQUENCY_MAX),
                    rng.gen_range(SWARM_FREQUENCY_MIN..SWARM_FREQUENCY_MAX),
                ),
                phase: Vec3::new(
                    rng.gen::<f32>() * TAU,
                    rng.gen::<f32>() * TAU,
                    rng.gen::<f32>() * TAU,
                ),
                color: SWARM_COLORS[rng.gen_range(0..SWARM_COLORS.len())],
            })
            .collect();
        let positions = particles.iter().map(|p| p.position_at(0.0)).collect();
        Self {
            particles,
            positions,
            opacity: 0.0,
        }
    }

    #[inline]
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.opacity > VISIBILITY_EPSILON
    }

    /// Recompute orbit positions; skipped entirely while invisible.
    pub fn update(&mut self, time: f32) {
        if !self.visible() {
            return;
        }
        for (pos, p) in self.positions.iter_mut().zip(&self.particles) {
            *pos = p.position_at(time);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[SwarmParticle] {
        &self.particles
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
