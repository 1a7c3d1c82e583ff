use ornament_core::{AssemblyState, FrameId};
use web_sys as web;

const HINT_ID: &str = "hint-overlay";

/// Status line shown in the hint overlay.
pub fn hint_text(
    assembly: AssemblyState,
    photo_count: usize,
    focused: Option<FrameId>,
    processing: bool,
) -> String {
    let state = match assembly {
        AssemblyState::Chaos => "Scattered",
        AssemblyState::Formed => "Formed",
    };
    let photos = match photo_count {
        0 => "No photos".to_string(),
        1 => "1 photo".to_string(),
        n => format!("{} photos", n),
    };
    let mut text = format!("{} • {}", state, photos);
    if let Some(id) = focused {
        text.push_str(&format!(" • Viewing {}", id));
    }
    if processing {
        text.push_str(" • Loading…");
    }
    text
}

/// Update the hint overlay with current scene state
pub fn update_hint(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let hint_html = format!(
            "<div style='color: #f3ead2; font: 13px system-ui; background: rgba(12, 18, 14, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(200, 170, 90, 0.35);'>{}</div>",
            text
        );
        el.set_inner_html(&hint_html);
    }
}

#[inline]
pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().toggle("hidden");
    }
}
