// ============================================================================
// HISTORY - Address bar / History API
// ============================================================================

use wasm_bindgen::JsValue;

pub trait HistoryPort {
    /// Pathname currently shown in the address bar
    fn current_path(&self) -> String;

    /// Push a new entry without reloading
    fn push(&self, path: &str);

    /// Replace the current entry (used for redirects)
    fn replace(&self, path: &str);
}

#[derive(Clone, Copy, Default)]
pub struct BrowserHistory;

impl HistoryPort for BrowserHistory {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, path: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("⚠️ [ROUTER] pushState({}) failed: {:?}", path, e);
        }
    }

    fn replace(&self, path: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("⚠️ [ROUTER] replaceState({}) failed: {:?}", path, e);
        }
    }
}
