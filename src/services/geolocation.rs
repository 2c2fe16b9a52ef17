// ============================================================================
// GEOLOCATION - One-shot device position
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::LocationError;
use crate::models::GeoPosition;

/// Receives exactly one outcome
pub type LocationCallback = Box<dyn FnOnce(Result<GeoPosition, LocationError>)>;

pub trait LocationProvider {
    /// Request the current position. `on_result` is called exactly once,
    /// possibly synchronously when the capability is missing.
    fn current_position(&self, on_result: LocationCallback);
}

/// `navigator.geolocation.getCurrentPosition`
#[derive(Clone, Copy, Default)]
pub struct BrowserGeolocation;

impl LocationProvider for BrowserGeolocation {
    fn current_position(&self, on_result: LocationCallback) {
        let navigator = match web_sys::window() {
            Some(window) => window.navigator(),
            None => return on_result(Err(LocationError::Unsupported)),
        };

        let supported = Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
        let geolocation = match navigator.geolocation() {
            Ok(geolocation) if supported => geolocation,
            _ => {
                log::warn!("📍 [GEO] navigator.geolocation not available");
                return on_result(Err(LocationError::Unsupported));
            }
        };

        // Shared so whichever callback the browser fires consumes it. The
        // callback that never fires stays allocated, one per request.
        let slot: Rc<RefCell<Option<LocationCallback>>> = Rc::new(RefCell::new(Some(on_result)));

        let on_success = {
            let slot = slot.clone();
            Closure::once_into_js(move |position: JsValue| {
                let pending = slot.borrow_mut().take();
                if let Some(callback) = pending {
                    callback(parse_position(&position));
                }
            })
        };

        let on_error = {
            let slot = slot.clone();
            Closure::once_into_js(move |error: JsValue| {
                let pending = slot.borrow_mut().take();
                if let Some(callback) = pending {
                    callback(Err(parse_error(&error)));
                }
            })
        };

        if let Err(e) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            log::error!("❌ [GEO] getCurrentPosition threw: {:?}", e);
            let pending = slot.borrow_mut().take();
            if let Some(callback) = pending {
                callback(Err(LocationError::Other(format!("{:?}", e))));
            }
        }
    }
}

fn parse_position(position: &JsValue) -> Result<GeoPosition, LocationError> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| LocationError::PositionUnavailable)?;
    let read = |field: &str| {
        Reflect::get(&coords, &JsValue::from_str(field))
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or(LocationError::PositionUnavailable)
    };
    Ok(GeoPosition::new(read("latitude")?, read("longitude")?))
}

fn parse_error(error: &JsValue) -> LocationError {
    let code = Reflect::get(error, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u16;
    let message = Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    LocationError::from_code(code, message)
}
