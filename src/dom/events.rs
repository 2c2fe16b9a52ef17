// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners on view elements belong to the rendered tree: they are kept in
// a registry and released right before the next render clears the tree.
// Removing an element alone would not free its Wasm closures. Window-level
// listeners are registered once from `lib.rs`.
// ============================================================================

use std::any::Any;
use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, MouseEvent};

use crate::models::SelectedFile;

thread_local! {
    static VIEW_LISTENERS: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

fn retain_for_view(listener: impl Any) {
    VIEW_LISTENERS.with(|listeners| listeners.borrow_mut().push(Box::new(listener)));
}

/// Free every listener attached by the previous render
pub fn release_view_listeners() {
    let released = VIEW_LISTENERS.with(|listeners| std::mem::take(&mut *listeners.borrow_mut()));
    drop(released);
}

fn listen<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    retain_for_view(closure);
    Ok(())
}

pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", move |event: Event| handler(event.unchecked_into()))
}

/// Calls `handler` with the input's current value
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "input", move |event: Event| {
        if let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        {
            handler(input.value());
        }
    })
}

/// Form submit without the page reload
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |event: Event| {
        event.prevent_default();
        handler();
    })
}

/// `<input type="file">` change, reduced to the metadata we keep
pub fn on_file_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(SelectedFile) + 'static,
{
    listen(element, "change", move |event: Event| {
        let file = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if let Some(file) = file {
            handler(SelectedFile {
                file_name: file.name(),
                mime: file.type_(),
                size_bytes: file.size() as u64,
            });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_release_frees_retained_listeners() {
        let captured = Rc::new(());
        retain_for_view(captured.clone());
        retain_for_view(captured.clone());
        assert_eq!(Rc::strong_count(&captured), 3);

        release_view_listeners();
        assert_eq!(Rc::strong_count(&captured), 1);
        VIEW_LISTENERS.with(|listeners| assert!(listeners.borrow().is_empty()));
    }
}
