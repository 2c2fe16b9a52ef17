// ============================================================================
// MEDISYNC - Healthcare dashboard PWA (Rust + WASM, MVVM)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: UI logic, created on demand over AppState
// - State: Rc<RefCell> containers with change notification
// - Services: platform access (storage, timers, geolocation, history) + mock data
// - Models: plain data
// ============================================================================

mod config;
mod error;
mod models;
mod services;
mod state;
mod viewmodels;
mod dom;
mod views;
mod utils;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::AppConfig;
use crate::services::Services;
use crate::state::AppState;
use crate::viewmodels::RouterViewModel;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 MediSync - Rust + WASM");

    let state = AppState::new(config, Services::browser());
    let app = App::new(state.clone())?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    RouterViewModel::new(&state).start();
    rerender_app();

    // Registered once; lives for the whole page
    if let Some(win) = web_sys::window() {
        let popstate_state = state.clone();
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            RouterViewModel::new(&popstate_state).sync_from_location();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Full re-render of the current route
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Render failed on {}: {:?}", app.state().router.current(), e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App not initialized"),
    });
}
