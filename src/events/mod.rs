pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use instant::Instant;
use ornament_core::GalleryEvent;

/// Seconds on the frame clock shared by the render loop and input handlers.
#[inline]
pub fn clock_seconds(epoch: Instant) -> f64 {
    epoch.elapsed().as_secs_f64()
}

pub fn log_gallery_events<'a>(events: impl IntoIterator<Item = &'a GalleryEvent>) {
    for ev in events {
        match ev {
            GalleryEvent::Focused(id) => log::info!("[gallery] focused {}", id),
            GalleryEvent::Blurred(id) => log::info!("[gallery] blurred {}", id),
            GalleryEvent::Flipped { id, flipped } => {
                log::info!("[gallery] {} flipped={}", id, flipped)
            }
            GalleryEvent::ClearComplete => log::info!("[gallery] clear complete"),
        }
    }
}
