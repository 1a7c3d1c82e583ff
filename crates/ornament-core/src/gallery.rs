//! Gallery coordinator: owns every photo frame and the single focused id.
//!
//! Interaction intake (`click`, `double_click`, `miss`) and list changes
//! (`sync_photos`) happen between ticks; `tick` only advances animation and
//! fires deferred blurs. Requests naming an id that is no longer present are
//! ignored.

use crate::config::MotionRates;
use crate::constants::*;
use crate::photo::{BackFace, FrameId, FrameTick, PhotoDescriptor, PhotoFrame};
use crate::spatial::{spiral_point, uniform_sphere_point};
use crate::state::{AssemblyState, Camera, FrameClock};
use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent {
    Focused(FrameId),
    Blurred(FrameId),
    Flipped { id: FrameId, flipped: bool },
    /// Every frame has shrunk away; image resources may be released.
    ClearComplete,
}

/// Events produced by a single interaction (at most a blur plus a focus).
pub type GalleryEvents = SmallVec<[GalleryEvent; 2]>;

pub struct Gallery {
    frames: Vec<PhotoFrame>,
    index: FnvHashMap<FrameId, usize>,
    focused: Option<FrameId>,
    clearing: bool,
    clear_reported: bool,
    back_face: BackFace,
    origin: Vec3,
    rates: MotionRates,
    blur_delay: f64,
    rng: StdRng,
    next_id: u64,
}

impl Gallery {
    pub fn new(origin: Vec3, rates: MotionRates, blur_delay: f64, seed: u64) -> Self {
        Self {
            frames: Vec::new(),
            index: FnvHashMap::default(),
            focused: None,
            clearing: false,
            clear_reported: false,
            back_face: BackFace::default(),
            origin,
            rates,
            blur_delay,
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Rebuild the frame list from the environment's ordered photo list.
    ///
    /// Frames whose image is still present keep their id and current pose;
    /// every frame gets a fresh spiral slot for the new total.
    pub fn sync_photos(&mut self, photos: &[PhotoDescriptor]) -> GalleryEvents {
        let mut events = GalleryEvents::new();
        let mut old: Vec<Option<PhotoFrame>> = self.frames.drain(..).map(Some).collect();
        let total = photos.len();
        let mut frames = Vec::with_capacity(total);

        for (i, photo) in photos.iter().enumerate() {
            let placement = spiral_point(i, total, PHOTO_SPIRAL_HEIGHT, PHOTO_SPIRAL_RADIUS);
            let reused = old
                .iter_mut()
                .find(|slot| matches!(slot, Some(f) if f.image() == photo.image))
                .and_then(Option::take);
            let frame = match reused {
                Some(mut frame) => {
                    frame.retarget(placement, self.origin, photo);
                    frame
                }
                None => {
                    let id = FrameId(self.next_id);
                    self.next_id += 1;
                    let chaos = uniform_sphere_point(&mut self.rng, PHOTO_CHAOS_RADIUS);
                    PhotoFrame::new(id, photo, chaos, placement, self.origin, self.rates.clone())
                }
            };
            frames.push(frame);
        }

        for mut gone in old.into_iter().flatten() {
            gone.teardown();
            if self.focused == Some(gone.id()) {
                self.focused = None;
                events.push(GalleryEvent::Blurred(gone.id()));
            }
        }

        self.frames = frames;
        self.index = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id(), i))
            .collect();
        log::info!("[gallery] synced {} photo(s)", self.frames.len());
        events
    }

    /// Focus `id`, implicitly blurring any other frame.
    pub fn request_focus(&mut self, id: FrameId) -> GalleryEvents {
        let mut events = GalleryEvents::new();
        if !self.index.contains_key(&id) || self.focused == Some(id) {
            return events;
        }
        if let Some(prev) = self.request_blur() {
            events.push(prev);
        }
        self.focused = Some(id);
        log::debug!("[gallery] focus {}", id);
        events.push(GalleryEvent::Focused(id));
        events
    }

    pub fn request_blur(&mut self) -> Option<GalleryEvent> {
        let prev = self.focused.take()?;
        if let Some(frame) = self.frame_mut(prev) {
            frame.cancel_pending_blur();
        }
        log::debug!("[gallery] blur {}", prev);
        Some(GalleryEvent::Blurred(prev))
    }

    /// Single click on a frame, at `now` seconds on the frame clock.
    pub fn click(&mut self, id: FrameId, now: f64) -> GalleryEvents {
        let mut events = GalleryEvents::new();
        if self.clearing {
            return events;
        }
        let focused = self.focused == Some(id);
        let window = self.blur_delay;
        let Some(frame) = self.frame_mut(id) else {
            return events;
        };
        let paired = frame.register_click(now, window);
        if !focused {
            return self.request_focus(id);
        }
        if paired {
            frame.cancel_pending_blur();
            let flipped = frame.toggle_flip();
            log::debug!("[gallery] double click on {} -> flipped={}", id, flipped);
            events.push(GalleryEvent::Flipped { id, flipped });
        } else {
            frame.arm_blur(now, window);
        }
        events
    }

    /// Native double-click on a frame. Only meaningful while it is focused.
    pub fn double_click(&mut self, id: FrameId) -> GalleryEvents {
        let mut events = GalleryEvents::new();
        if self.clearing || self.focused != Some(id) {
            return events;
        }
        if let Some(frame) = self.frame_mut(id) {
            frame.cancel_pending_blur();
            let flipped = frame.toggle_flip();
            events.push(GalleryEvent::Flipped { id, flipped });
        }
        events
    }

    /// A click that hit nothing.
    pub fn miss(&mut self) -> Option<GalleryEvent> {
        if self.clearing {
            return None;
        }
        self.request_blur()
    }

    pub fn set_clearing(&mut self, clearing: bool) -> GalleryEvents {
        let mut events = GalleryEvents::new();
        if clearing == self.clearing {
            return events;
        }
        self.clearing = clearing;
        self.clear_reported = false;
        if clearing {
            log::info!("[gallery] clearing {} photo(s)", self.frames.len());
            if let Some(ev) = self.request_blur() {
                events.push(ev);
            }
        }
        events
    }

    pub fn tick(
        &mut self,
        assembly: AssemblyState,
        camera: &Camera,
        clock: FrameClock,
        out: &mut Vec<GalleryEvent>,
    ) {
        if self.clearing {
            if let Some(ev) = self.request_blur() {
                out.push(ev);
            }
        }

        let now = clock.elapsed;
        let mut due_blur = false;
        for frame in &mut self.frames {
            if frame.take_due_blur(now) && self.focused == Some(frame.id()) {
                log::debug!("[gallery] deferred blur fired for {}", frame.id());
                due_blur = true;
            }
        }
        if due_blur {
            if let Some(ev) = self.request_blur() {
                out.push(ev);
            }
        }

        let frame_tick = FrameTick {
            assembly,
            clearing: self.clearing,
            camera,
            dt: clock.dt,
        };
        let focused = self.focused;
        for frame in &mut self.frames {
            let is_focused = focused == Some(frame.id());
            frame.update(&frame_tick, is_focused);
        }

        if self.clearing && !self.clear_reported && self.clear_finished() {
            self.clear_reported = true;
            log::info!("[gallery] clear complete");
            out.push(GalleryEvent::ClearComplete);
        }
    }

    /// True while clearing once every frame has shrunk to (almost) nothing.
    pub fn clear_finished(&self) -> bool {
        self.clearing
            && self
                .frames
                .iter()
                .all(|f| f.visibility() < CLEAR_COMPLETE_EPSILON)
    }

    /// What hosts should show on the back of flipped frames. The reference is
    /// stored for the host only; nothing in the tick reads it.
    pub fn set_back_face(&mut self, back_face: BackFace) {
        self.back_face = back_face;
    }

    #[inline]
    pub fn back_face(&self) -> &BackFace {
        &self.back_face
    }

    #[inline]
    pub fn focused(&self) -> Option<FrameId> {
        self.focused
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused.is_some()
    }

    #[inline]
    pub fn is_clearing(&self) -> bool {
        self.clearing
    }

    #[inline]
    pub fn frames(&self) -> &[PhotoFrame] {
        &self.frames
    }

    pub fn frame(&self, id: FrameId) -> Option<&PhotoFrame> {
        self.index.get(&id).map(|&i| &self.frames[i])
    }

    fn frame_mut(&mut self, id: FrameId) -> Option<&mut PhotoFrame> {
        let i = *self.index.get(&id)?;
        self.frames.get_mut(i)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
