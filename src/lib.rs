#![cfg(target_arch = "wasm32")]
use crate::camera::OrbitCamera;
use crate::constants::CAMERA_LOOK_OFFSET;
use crate::input::PressTracker;
use crate::upload::PhotoLibrary;
use instant::Instant;
use ornament_core::{Scene, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod batch;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod upload;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        _ = dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_clear_button(
    document: &web::Document,
    library: &Rc<RefCell<PhotoLibrary>>,
    scene: &Rc<RefCell<Scene>>,
) {
    let library = library.clone();
    let scene = scene.clone();
    dom::on_click(document, "clear-button", move || {
        upload::start_clear(&library, &scene);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ornament-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = SceneConfig {
        seed: rand::random(),
        ..SceneConfig::default()
    };
    let scene = Rc::new(RefCell::new(Scene::new(config)?));
    let library = Rc::new(RefCell::new(PhotoLibrary::default()));
    let orbit = Rc::new(RefCell::new(OrbitCamera::new(
        scene.borrow().origin() + CAMERA_LOOK_OFFSET,
    )));
    let press = Rc::new(RefCell::new(PressTracker::default()));
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let last_camera = Rc::new(RefCell::new(orbit.borrow().camera(aspect)));
    let epoch = Instant::now();

    upload::wire_photo_input(&document, library.clone(), scene.clone());
    wire_clear_button(&document, &library, &scene);
    events::wire_global_keydown(scene.clone(), library.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        orbit: orbit.clone(),
        press: press.clone(),
        last_camera: last_camera.clone(),
        epoch,
    });

    // copied so no scene borrow is held across the await
    let foliage_points = scene.borrow().foliage().points().to_vec();
    let gpu = frame::init_gpu(&canvas, &foliage_points).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        library,
        orbit,
        press,
        last_camera,
        canvas,
        document,
        gpu,
        epoch,
        last_instant: Instant::now(),
        events: Vec::new(),
        last_hint: String::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
