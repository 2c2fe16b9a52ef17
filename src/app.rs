// ============================================================================
// APP - Root element + full re-render on state change
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, clear_children, document, get_element_by_id, release_view_listeners};
use crate::state::AppState;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new(state: AppState) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        // Batch every notification of the same tick into one render
        let scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if scheduled.replace(true) {
                return;
            }
            let scheduled = scheduled.clone();
            Timeout::new(0, move || {
                scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let focused = focused_input_id();

        release_view_listeners();
        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;

        if let Some(id) = focused {
            restore_focus(&id);
        }
        Ok(())
    }
}

fn focused_input_id() -> Option<String> {
    let active = document()?.active_element()?;
    let id = active.id();
    (active.dyn_ref::<HtmlInputElement>().is_some() && !id.is_empty()).then_some(id)
}

/// Re-focus an input rebuilt by the render, caret at the end
fn restore_focus(id: &str) {
    let Some(input) = get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let _ = input.focus();
    let end = input.value().chars().count() as u32;
    // Not supported by every input type
    let _ = input.set_selection_range(end, end);
}
