use crate::camera::OrbitCamera;
use crate::events;
use crate::input::PressTracker;
use crate::overlay;
use crate::render;
use crate::upload::{self, PhotoLibrary};
use instant::Instant;
use ornament_core::{Camera, FoliagePoint, FrameClock, GalleryEvent, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub library: Rc<RefCell<PhotoLibrary>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub press: Rc<RefCell<PressTracker>>,
    pub last_camera: Rc<RefCell<Camera>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,

    pub epoch: Instant,
    pub last_instant: Instant,
    pub events: Vec<GalleryEvent>,
    pub last_hint: String,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.epoch).as_secs_f64();

        // photo list changes land between ticks
        self.apply_pending_photos();

        if self.press.borrow_mut().poll_hold(elapsed) {
            let state = self.scene.borrow_mut().toggle_assembly();
            log::info!("[gesture] hold -> {:?}", state);
        }

        let focused = self.scene.borrow().is_focused();
        let aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
        let camera = {
            let mut orbit = self.orbit.borrow_mut();
            orbit.update(dt_sec, focused);
            orbit.camera(aspect)
        };
        *self.last_camera.borrow_mut() = camera;

        let mut tick_events = std::mem::take(&mut self.events);
        tick_events.clear();
        self.scene
            .borrow_mut()
            .tick(FrameClock::new(elapsed, dt_sec), &camera, &mut tick_events);
        events::log_gallery_events(&tick_events);
        if tick_events.contains(&GalleryEvent::ClearComplete) {
            self.finish_clear();
        }
        self.events = tick_events;

        self.update_hint();

        if let Some(g) = &mut self.gpu {
            let scene = self.scene.borrow();
            g.set_focus_dim(scene.is_focused());
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&scene, &camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn apply_pending_photos(&mut self) {
        let Some(photos) = self.library.borrow_mut().take_sync() else {
            return;
        };
        let mut scene = self.scene.borrow_mut();
        let events = scene.sync_photos(&photos);
        events::log_gallery_events(&events);
        scene.set_processing(false);
    }

    /// Frames are gone: release their images and leave clearing mode.
    fn finish_clear(&mut self) {
        let released = self.library.borrow_mut().finish_clear();
        upload::revoke_all(&released);
        self.apply_pending_photos();
        self.scene.borrow_mut().set_clearing(false);
    }

    fn update_hint(&mut self) {
        let text = {
            let scene = self.scene.borrow();
            overlay::hint_text(
                scene.assembly(),
                scene.gallery().len(),
                scene.gallery().focused(),
                scene.is_processing(),
            )
        };
        if text != self.last_hint {
            overlay::update_hint(&self.document, &text);
            self.last_hint = text;
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    foliage_points: &[FoliagePoint],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, foliage_points).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
