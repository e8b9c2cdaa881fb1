//! Scroll-linked hero parallax.

use web_sys::Event;

use crate::dom;
use crate::motion;

/// Shift and fade `.hero-content` as the window scrolls, clamped at the
/// parallax range.
pub fn wire() {
    let Some(hero) = dom::query(".hero-content") else {
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };

    dom::listen(&window, "scroll", move |_event: Event| {
        let scroll_y = dom::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        let frame = motion::hero_parallax(scroll_y);
        dom::set_style(&hero, "transform", &format!("translateY({}px)", frame.translate_y_px));
        dom::set_style(&hero, "opacity", &frame.opacity.to_string());
    });
}
