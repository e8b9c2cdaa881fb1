//! Contact form submission folded into a mailto navigation.

use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement};

use crate::dom;
use crate::mailto::{self, ContactDraft};

fn field(data: &FormData, name: &str) -> Option<String> {
    data.get(name).as_string()
}

/// Intercept submission of the contact form and navigate to a mailto URI
/// built from its fields instead of performing a network request.
pub fn wire() {
    let Some(form) = dom::query(".contact-card form") else {
        return;
    };
    let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
        return;
    };

    let handle = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let Ok(data) = FormData::new_with_form(&handle) else {
            return;
        };
        let draft = ContactDraft::from_fields(
            field(&data, "name"),
            field(&data, "email"),
            field(&data, "message"),
        );
        if let Some(window) = dom::window() {
            let _ = window.location().set_href(&mailto::url(&draft));
        }
    });
}
