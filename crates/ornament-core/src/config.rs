//! Host-adjustable scene configuration.
//!
//! Defaults mirror the tuning constants in [`crate::constants`]. Hosts build a
//! [`SceneConfig`], tweak what they need, and hand it to
//! [`crate::Scene::new`], which validates it once up front so the per-frame
//! path never has to.

use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("foliage count must be at least 1")]
    EmptyFoliage,
    #[error("{kind} ornament count {count} exceeds the per-batch limit of {max}")]
    OrnamentCountTooLarge {
        kind: &'static str,
        count: usize,
        max: usize,
    },
    #[error("swarm count {count} is outside 1..={max}")]
    SwarmCount { count: usize, max: usize },
    #[error("rate `{name}` must be finite and positive, got {value}")]
    InvalidRate { name: &'static str, value: f32 },
    #[error("click blur delay must be positive, got {0}")]
    InvalidBlurDelay(f64),
    #[error("max frame delta must be positive, got {0}")]
    InvalidMaxFrameDt(f32),
    #[error("tree origin must be finite")]
    InvalidOrigin,
}

/// Damping / approach rates for every animated channel, in units per second.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionRates {
    pub assembly: f32,
    pub rest: f32,
    pub clear: f32,
    pub flip: f32,
    pub focus: f32,
    pub star: f32,
}

impl Default for MotionRates {
    fn default() -> Self {
        Self {
            assembly: ASSEMBLY_RATE,
            rest: REST_RATE,
            clear: CLEAR_RATE,
            flip: FLIP_RATE,
            focus: FOCUS_RATE,
            star: 1.0 / STAR_TRANSITION_SECS,
        }
    }
}

impl MotionRates {
    fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("assembly", self.assembly),
            ("rest", self.rest),
            ("clear", self.clear),
            ("flip", self.flip),
            ("focus", self.focus),
            ("star", self.star),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub seed: u64,
    pub foliage_count: usize,
    pub box_count: usize,
    pub ball_count: usize,
    pub light_count: usize,
    pub swarm_count: usize,
    pub origin: Vec3,
    pub rates: MotionRates,
    pub click_blur_delay: f64,
    pub max_frame_dt: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            foliage_count: FOLIAGE_COUNT,
            box_count: DEFAULT_BOX_COUNT,
            ball_count: DEFAULT_BALL_COUNT,
            light_count: DEFAULT_LIGHT_COUNT,
            swarm_count: SWARM_COUNT,
            origin: tree_origin_vec3(),
            rates: MotionRates::default(),
            click_blur_delay: CLICK_BLUR_DELAY_SECS,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.foliage_count == 0 {
            return Err(ConfigError::EmptyFoliage);
        }
        for (kind, count) in [
            ("box", self.box_count),
            ("ball", self.ball_count),
            ("light", self.light_count),
        ] {
            if count > ORNAMENT_MAX_PER_BATCH {
                return Err(ConfigError::OrnamentCountTooLarge {
                    kind,
                    count,
                    max: ORNAMENT_MAX_PER_BATCH,
                });
            }
        }
        if self.swarm_count == 0 || self.swarm_count > SWARM_MAX_COUNT {
            return Err(ConfigError::SwarmCount {
                count: self.swarm_count,
                max: SWARM_MAX_COUNT,
            });
        }
        self.rates.validate()?;
        if !(self.click_blur_delay > 0.0) {
            return Err(ConfigError::InvalidBlurDelay(self.click_blur_delay));
        }
        if !(self.max_frame_dt > 0.0) {
            return Err(ConfigError::InvalidMaxFrameDt(self.max_frame_dt));
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::InvalidOrigin);
        }
        Ok(())
    }
}
