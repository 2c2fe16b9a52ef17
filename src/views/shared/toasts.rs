// ============================================================================
// TOASTS
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_el, ElementBuilder};
use crate::state::{AppState, ToastKind};

pub fn render_toasts(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("toast-stack")
        .attr("aria-live", "polite")?
        .build();

    for toast in state.toasts.visible() {
        let (class, icon) = match toast.kind {
            ToastKind::Success => ("toast toast-success", "✅"),
            ToastKind::Error => ("toast toast-error", "⚠️"),
        };

        let close = text_el("button", "toast-close", "×")?;
        let toasts = state.toasts.clone();
        let id = toast.id;
        on_click(&close, move |_| toasts.dismiss(id))?;

        let item = ElementBuilder::new("div")?
            .class(class)
            .child(text_el("span", "toast-icon", icon)?)?
            .child(text_el("span", "toast-message", &toast.message)?)?
            .child(close)?
            .build();
        container.append_child(&item)?;
    }

    Ok(container)
}
