// ============================================================================
// APP VIEW - Route dispatch
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Route;
use crate::state::AppState;
use crate::views::shared::render_toasts;
use crate::views::{
    render_dashboard, render_health_monitor, render_login, render_not_found, render_patient,
};

/// Whole page for the current route, toasts on top
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let page = match state.router.current() {
        Route::Entry => render_login(state)?,
        Route::Dashboard => render_dashboard(state)?,
        Route::Patient(_) => render_patient(state)?,
        Route::HealthMonitor => render_health_monitor(state)?,
        Route::NotFound(path) => render_not_found(state, &path)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(page)?
        .child(render_toasts(state)?)?
        .build())
}
