use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Typed lookup of a page element; `None` if it is missing or of another type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach a click handler to `#id`. A missing control is logged and skipped.
pub fn on_click(document: &web::Document, id: &str, mut handler: impl FnMut() + 'static) {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("[dom] missing #{}", id);
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Match the canvas backing store to its CSS box, with the pixel ratio capped
/// so high-density screens don't multiply the foliage fill cost.
/// Returns true when the size changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let dpr = window.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
    let rect = canvas.get_bounding_client_rect();
    let width = ((rect.width() * dpr) as u32).max(1);
    let height = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() == width && canvas.height() == height {
        return false;
    }
    canvas.set_width(width);
    canvas.set_height(height);
    log::debug!("[dom] canvas backing {}x{} (dpr {:.2})", width, height, dpr);
    true
}
