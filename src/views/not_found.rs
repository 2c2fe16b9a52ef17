// ============================================================================
// NOT FOUND VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, text_el, ElementBuilder};
use crate::models::Route;
use crate::state::AppState;
use crate::viewmodels::RouterViewModel;

pub fn render_not_found(state: &AppState, path: &str) -> Result<Element, JsValue> {
    let home = text_el("button", "btn-primary", "Return to Home")?;
    {
        let state = state.clone();
        on_click(&home, move |_| RouterViewModel::new(&state).navigate(Route::Entry))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("not-found")
        .child(text_el("h1", "", "404")?)?
        .child(text_el("p", "", "Oops! Page not found")?)?
        .child(text_el("code", "not-found-path", path)?)?
        .child(home)?
        .build())
}
