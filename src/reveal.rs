//! One-shot reveal of sections entering the viewport.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::REVEAL_THRESHOLD;
use crate::dom;

/// Observe every `.reveal` element. Each gains `visible` the first time it
/// crosses the visibility threshold and is then unobserved, so the
/// transition fires at most once per element.
pub fn wire() {
    let marked = dom::query_all(".reveal");
    if marked.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for element in &marked {
        observer.observe(element);
    }
}
