//! Thin web-sys helpers shared by the wiring modules.
//!
//! Every behavior in this crate degrades to a no-op when its target element
//! is missing, so lookups return `Option` and selector errors are swallowed.
//! Event listeners are wired once at startup and live for the page's
//! lifetime, so their closures are intentionally leaked.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// The element with the given id, if present.
#[must_use]
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// First element matching `selector`, if any.
#[must_use]
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for index in 0..list.length() {
        if let Some(node) = list.get(index)
            && let Ok(element) = node.dyn_into::<Element>()
        {
            found.push(element);
        }
    }
    found
}

/// Attach `handler` to `event` on `target` and leak the closure.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `callback` on the next animation frame.
pub fn on_next_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = window() else {
        return;
    };
    let closure = Closure::once_into_js(callback);
    let _ = window.request_animation_frame(closure.unchecked_ref());
}

/// Set one inline style or CSS custom property, ignoring failures.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}
