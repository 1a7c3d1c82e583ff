use ornament_core::{PhotoDescriptor, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Ordered image references owned by the page, plus the pending-sync flag.
///
/// Uploads that arrive while a clear is running are held back and become the
/// new list once the clear finishes, so a clear only releases the images that
/// existed when it started.
#[derive(Default, Debug)]
pub struct PhotoLibrary {
    images: Vec<String>,
    deferred: Vec<String>,
    clearing: bool,
    dirty: bool,
}

impl PhotoLibrary {
    pub fn add(&mut self, images: impl IntoIterator<Item = String>) {
        if self.clearing {
            self.deferred.extend(images);
        } else {
            let before = self.images.len();
            self.images.extend(images);
            self.dirty |= self.images.len() != before;
        }
    }

    /// True while accepted images are waiting to reach the scene, either for
    /// the next sync or for the end of a running clear.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.dirty || !self.deferred.is_empty()
    }

    /// Returns false if a clear is already running.
    pub fn begin_clear(&mut self) -> bool {
        if self.clearing {
            return false;
        }
        self.clearing = true;
        true
    }

    /// End the clear; returns the images that can now be released.
    pub fn finish_clear(&mut self) -> Vec<String> {
        if !self.clearing {
            return Vec::new();
        }
        self.clearing = false;
        self.dirty = true;
        let released = std::mem::take(&mut self.images);
        self.images = std::mem::take(&mut self.deferred);
        released
    }

    /// The descriptor list to hand to the scene, if it changed since last taken.
    pub fn take_sync(&mut self) -> Option<Vec<PhotoDescriptor>> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.images.iter().map(PhotoDescriptor::new).collect())
    }

    #[inline]
    pub fn is_clearing(&self) -> bool {
        self.clearing
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn object_urls(files: &web::FileList) -> Vec<String> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .filter(|f| f.type_().starts_with("image/"))
        .filter_map(|f| match web::Url::create_object_url_with_blob(&f) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("[upload] object url failed for {}: {:?}", f.name(), e);
                None
            }
        })
        .collect()
}

pub fn revoke_all(urls: &[String]) {
    for url in urls {
        _ = web::Url::revoke_object_url(url);
    }
    if !urls.is_empty() {
        log::info!("[upload] released {} image(s)", urls.len());
    }
}

/// `#photo-input` change → object URLs appended to the library.
pub fn wire_photo_input(
    document: &web::Document,
    library: Rc<RefCell<PhotoLibrary>>,
    scene: Rc<RefCell<Scene>>,
) {
    let Some(input) = crate::dom::element_by_id::<web::HtmlInputElement>(document, "photo-input")
    else {
        log::warn!("[upload] missing #photo-input");
        return;
    };
    let input_for_cb = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(files) = input_for_cb.files() else {
            return;
        };
        let urls = object_urls(&files);
        log::info!("[upload] {} new image(s)", urls.len());
        let mut lib = library.borrow_mut();
        lib.add(urls);
        // processing only while something is waiting for a sync
        scene.borrow_mut().set_processing(lib.has_pending());
        // allow picking the same files again
        input_for_cb.set_value("");
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Start the clearing animation for every photo currently shown.
pub fn start_clear(library: &Rc<RefCell<PhotoLibrary>>, scene: &Rc<RefCell<Scene>>) {
    if library.borrow_mut().begin_clear() {
        log::info!("[upload] clearing {} image(s)", library.borrow().len());
        scene.borrow_mut().set_clearing(true);
    }
}
