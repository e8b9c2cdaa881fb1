//! Welcome overlay lifecycle.
//!
//! The overlay fades in on load and leaves through a fixed-length exit
//! transition, triggered by the enter button or the Escape key. Once the
//! transition ends the overlay is hidden, loses interactivity, and the page
//! scrolls to the home section.

use gloo_timers::callback::Timeout;
use web_sys::{Element, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::consts::{BACK_VANISH_MS, WELCOME_EXIT_MS};
use crate::dom;

/// Dismiss the overlay; no-op when it is already on its way out.
fn close(overlay: &Element) {
    if overlay.class_list().contains("exit") {
        return;
    }
    let _ = overlay.class_list().add_1("exit");

    let overlay = overlay.clone();
    Timeout::new(WELCOME_EXIT_MS, move || {
        let _ = overlay.class_list().add_1("hidden");
        let _ = overlay.set_attribute("aria-hidden", "true");
        if let Some(body) = dom::document().and_then(|d| d.body()) {
            let _ = body.class_list().remove_1("welcome-active");
        }
        if let Some(home) = dom::by_id("home") {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            home.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
    .forget();
}

/// Reveal the overlay and wire its dismissal paths. Skipped entirely when
/// the page has no welcome screen.
pub fn wire() {
    let Some(overlay) = dom::by_id("welcome-screen") else {
        return;
    };

    {
        let overlay = overlay.clone();
        dom::on_next_frame(move || {
            let _ = overlay.class_list().add_1("visible");
            let _ = overlay.remove_attribute("aria-hidden");
        });
    }

    if let Some(enter) = dom::by_id("enter-site") {
        let overlay = overlay.clone();
        dom::listen(&enter, "click", move |_event: MouseEvent| close(&overlay));
    }

    if let Some(back) = dom::by_id("welcome-back") {
        let button = back.clone();
        dom::listen(&back, "click", move |_event: MouseEvent| {
            let _ = button.class_list().add_1("vanish");
            let _ = button.set_attribute("disabled", "true");
            let button = button.clone();
            Timeout::new(BACK_VANISH_MS, move || button.remove()).forget();
        });
    }

    if let Some(document) = dom::document() {
        dom::listen(&document, "keydown", move |event: KeyboardEvent| {
            let welcome_active = dom::document()
                .and_then(|d| d.body())
                .is_some_and(|body| body.class_list().contains("welcome-active"));
            if event.key() == "Escape" && welcome_active {
                close(&overlay);
            }
        });
    }
}
