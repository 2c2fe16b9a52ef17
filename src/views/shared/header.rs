// ============================================================================
// HEADER - Brand bar shared by the inner pages
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_el, ElementBuilder};

/// `trailing` goes on the right (clock, back button...)
pub fn render_header(title: &str, trailing: Vec<Element>) -> Result<Element, JsValue> {
    let brand = ElementBuilder::new("div")?
        .class("brand")
        .child(text_el("span", "brand-icon", "🏥")?)?
        .child(text_el("span", "brand-name", "MediSync")?)?
        .build();

    let actions = ElementBuilder::new("div")?
        .class("header-actions")
        .children(trailing)?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(brand)?
        .child(text_el("h1", "header-title", title)?)?
        .child(actions)?
        .build())
}
