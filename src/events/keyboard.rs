use crate::overlay;
use crate::upload::{self, PhotoLibrary};
use ornament_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleAssembly,
    Clear,
    Blur,
    ToggleHint,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::ToggleAssembly),
        "c" | "C" => Some(KeyAction::Clear),
        "Escape" => Some(KeyAction::Blur),
        "h" | "H" => Some(KeyAction::ToggleHint),
        _ => None,
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<Scene>>,
    library: &Rc<RefCell<PhotoLibrary>>,
) {
    if ev.repeat() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleAssembly => {
            let state = scene.borrow_mut().toggle_assembly();
            log::info!("[keys] assembly={:?}", state);
            ev.prevent_default();
        }
        KeyAction::Clear => upload::start_clear(library, scene),
        KeyAction::Blur => {
            if let Some(blurred) = scene.borrow_mut().miss() {
                super::log_gallery_events([&blurred]);
            }
        }
        KeyAction::ToggleHint => {
            if let Some(document) = crate::dom::window_document() {
                overlay::toggle(&document);
            }
        }
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>, library: Rc<RefCell<PhotoLibrary>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &scene, &library);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
