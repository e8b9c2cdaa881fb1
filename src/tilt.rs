//! Pointer-driven tilt and glow on the contact card.

use web_sys::PointerEvent;

use crate::consts::{GLOW_OPACITY_HOVER, GLOW_OPACITY_REST};
use crate::dom;
use crate::motion;

/// Rotate `.contact-card` toward the pointer and track the glow under it;
/// both reset when the pointer leaves.
pub fn wire() {
    let Some(card) = dom::query(".contact-card") else {
        return;
    };

    {
        let handle = card.clone();
        dom::listen(&card, "pointermove", move |event: PointerEvent| {
            let rect = handle.get_bounding_client_rect();
            let frame = motion::card_tilt(
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            );
            dom::set_style(&handle, "--ry", &format!("{}deg", frame.rotate_y_deg));
            dom::set_style(&handle, "--rx", &format!("{}deg", frame.rotate_x_deg));
            dom::set_style(&handle, "--mouse-x", &format!("{}%", frame.glow_x_pct));
            dom::set_style(&handle, "--mouse-y", &format!("{}%", frame.glow_y_pct));
            dom::set_style(&handle, "--glow-opacity", GLOW_OPACITY_HOVER);
        });
    }

    let handle = card.clone();
    dom::listen(&card, "pointerleave", move |_event: PointerEvent| {
        dom::set_style(&handle, "--ry", "0deg");
        dom::set_style(&handle, "--rx", "0deg");
        dom::set_style(&handle, "--glow-opacity", GLOW_OPACITY_REST);
    });
}
