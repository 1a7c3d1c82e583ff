use crate::config::{ConfigError, SceneConfig};
use crate::constants::{STAR_HEIGHT_OFFSET, TREE_HEIGHT};
use crate::foliage::FoliageField;
use crate::gallery::{Gallery, GalleryEvent, GalleryEvents};
use crate::ornaments::{OrnamentBatch, OrnamentKind};
use crate::photo::{BackFace, FrameId, PhotoDescriptor};
use crate::star::StarCenterpiece;
use crate::state::{AssemblyState, Camera, FrameClock};
use glam::Vec3;
use rand::prelude::*;

/// Derive an independent seed per component from the base seed.
#[inline]
fn component_seed(seed: u64, stream: u64) -> u64 {
    seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn component_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(component_seed(seed, stream))
}

/// Top-level composer: owns every animated component and the assembly signal.
pub struct Scene {
    config: SceneConfig,
    assembly: AssemblyState,
    processing: bool,
    foliage: FoliageField,
    ornaments: [OrnamentBatch; 3],
    star: StarCenterpiece,
    gallery: Gallery,
    elapsed: f64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed;
        let rates = config.rates.clone();

        let foliage = FoliageField::new(
            &mut component_rng(seed, 1),
            config.foliage_count,
            rates.assembly,
        );
        let mut ornament_rng = component_rng(seed, 2);
        let ornaments = [
            OrnamentBatch::new(&mut ornament_rng, OrnamentKind::Box, config.box_count),
            OrnamentBatch::new(&mut ornament_rng, OrnamentKind::Ball, config.ball_count),
            OrnamentBatch::new(&mut ornament_rng, OrnamentKind::Light, config.light_count),
        ];
        let star_anchor = config.origin + Vec3::Y * (TREE_HEIGHT * 0.5 + STAR_HEIGHT_OFFSET);
        let star = StarCenterpiece::new(
            &mut component_rng(seed, 3),
            star_anchor,
            config.swarm_count,
            rates.star,
        );
        let gallery = Gallery::new(
            config.origin,
            rates,
            config.click_blur_delay,
            component_seed(seed, 4),
        );
        log::info!(
            "[scene] foliage={} ornaments={}/{}/{} swarm={}",
            foliage.len(),
            ornaments[0].len(),
            ornaments[1].len(),
            ornaments[2].len(),
            star.swarm().len()
        );

        Ok(Self {
            config,
            assembly: AssemblyState::Chaos,
            processing: false,
            foliage,
            ornaments,
            star,
            gallery,
            elapsed: 0.0,
        })
    }

    /// Advance every component by one frame.
    ///
    /// The assembly state is read once and shared by all components for the
    /// whole tick.
    pub fn tick(&mut self, clock: FrameClock, camera: &Camera, out: &mut Vec<GalleryEvent>) {
        let dt = clock.dt.clamp(0.0, self.config.max_frame_dt);
        let clock = FrameClock::new(clock.elapsed, dt);
        let assembly = self.assembly;
        self.elapsed = clock.elapsed;
        let elapsed = clock.elapsed as f32;

        self.foliage.update(assembly, dt);
        for batch in &mut self.ornaments {
            batch.update(assembly, elapsed, dt);
        }
        self.star.update(assembly, elapsed, dt);
        self.gallery.tick(assembly, camera, clock, out);
    }

    pub fn set_assembly(&mut self, assembly: AssemblyState) {
        if self.assembly != assembly {
            log::info!("[scene] assembly -> {:?}", assembly);
            self.assembly = assembly;
        }
    }

    pub fn toggle_assembly(&mut self) -> AssemblyState {
        self.set_assembly(self.assembly.toggled());
        self.assembly
    }

    #[inline]
    pub fn assembly(&self) -> AssemblyState {
        self.assembly
    }

    /// Apply a new photo list. Must be called between ticks.
    pub fn sync_photos(&mut self, photos: &[PhotoDescriptor]) -> GalleryEvents {
        self.gallery.sync_photos(photos)
    }

    pub fn set_clearing(&mut self, clearing: bool) -> GalleryEvents {
        self.gallery.set_clearing(clearing)
    }

    /// Environment-side upload/decode in flight; informational only.
    pub fn set_processing(&mut self, processing: bool) {
        self.processing = processing;
    }

    #[inline]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn set_back_face(&mut self, back_face: BackFace) {
        self.gallery.set_back_face(back_face);
    }

    pub fn click(&mut self, id: FrameId, now: f64) -> GalleryEvents {
        self.gallery.click(id, now)
    }

    pub fn double_click(&mut self, id: FrameId) -> GalleryEvents {
        self.gallery.double_click(id)
    }

    pub fn miss(&mut self) -> Option<GalleryEvent> {
        self.gallery.miss()
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.gallery.is_focused()
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.config.origin
    }

    #[inline]
    pub fn foliage(&self) -> &FoliageField {
        &self.foliage
    }

    #[inline]
    pub fn ornaments(&self) -> &[OrnamentBatch] {
        &self.ornaments
    }

    #[inline]
    pub fn star(&self) -> &StarCenterpiece {
        &self.star
    }

    #[inline]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }
}
