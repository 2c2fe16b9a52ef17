// ============================================================================
// FINGERPRINT - Scan animation used by login, splash and re-authentication
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_el, ElementBuilder};

/// `progress` of `None` renders an indeterminate (looping) scan
pub fn render_fingerprint(caption: &str, progress: Option<u8>) -> Result<Element, JsValue> {
    let scanner = ElementBuilder::new("div")?
        .class("fingerprint")
        .class_if("fingerprint-looping", progress.is_none())?
        .class_if("fingerprint-done", progress == Some(100))?
        .child(text_el("div", "fingerprint-icon", "🖐️")?)?
        .child(ElementBuilder::new("div")?.class("fingerprint-scanline").build())?
        .build();

    let mut panel = ElementBuilder::new("div")?
        .class("fingerprint-panel")
        .child(scanner)?
        .child(text_el("p", "fingerprint-caption", caption)?)?;

    if let Some(progress) = progress {
        let fill = ElementBuilder::new("div")?
            .class("progress-fill")
            .attr("style", &format!("width: {}%", progress))?
            .build();
        let bar = ElementBuilder::new("div")?
            .class("progress-bar")
            .attr("role", "progressbar")?
            .attr("aria-valuenow", &progress.to_string())?
            .child(fill)?
            .build();
        panel = panel
            .child(bar)?
            .child(text_el("span", "progress-label", &format!("{}%", progress))?)?;
    }

    Ok(panel.build())
}
