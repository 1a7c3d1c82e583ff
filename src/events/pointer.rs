use crate::camera::{screen_to_world_ray, OrbitCamera};
use crate::input::{self, PressOutcome, PressTracker};
use instant::Instant;
use ornament_core::{Camera, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub press: Rc<RefCell<PressTracker>>,
    /// Camera used for the most recently rendered frame.
    pub last_camera: Rc<RefCell<Camera>>,
    pub epoch: Instant,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if let Some(delta) = w.press.borrow_mut().motion(pos) {
            w.orbit.borrow_mut().drag(delta.x, delta.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.press
            .borrow_mut()
            .press(pos, super::clock_seconds(w.epoch));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let outcome = w.press.borrow_mut().release(pos);
        if let Some(PressOutcome::Click(at)) = outcome {
            handle_click(&w, at.x, at.y);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let press = w.press.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        press.borrow_mut().cancel();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn handle_click(w: &InputWiring, sx: f32, sy: f32) {
    let camera = *w.last_camera.borrow();
    let width = w.canvas.width() as f32;
    let height = w.canvas.height() as f32;
    let (ro, rd) = screen_to_world_ray(&camera, width, height, sx, sy);
    let now = super::clock_seconds(w.epoch);

    let mut scene = w.scene.borrow_mut();
    let hit = input::pick_frame(ro, rd, scene.gallery().frames());
    match hit {
        Some(id) => {
            log::info!("[click] hit {}", id);
            let events = scene.click(id, now);
            super::log_gallery_events(&events);
        }
        None => {
            if let Some(blurred) = scene.miss() {
                super::log_gallery_events([&blurred]);
            }
        }
    }
}
