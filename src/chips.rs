//! Staggered chip entrance and hover activation.

use web_sys::MouseEvent;

use crate::dom;
use crate::motion;

/// Give each `.chips span` an entrance delay proportional to its position,
/// reveal it on the next frame, and toggle its active state on hover.
pub fn wire() {
    for (index, chip) in dom::query_all(".chips span").into_iter().enumerate() {
        dom::set_style(&chip, "--delay", &format!("{}ms", motion::chip_delay_ms(index)));

        {
            let chip = chip.clone();
            dom::on_next_frame(move || {
                let _ = chip.class_list().add_1("visible");
            });
        }

        {
            let handle = chip.clone();
            dom::listen(&chip, "mouseenter", move |_event: MouseEvent| {
                let _ = handle.class_list().add_1("active");
            });
        }

        let handle = chip.clone();
        dom::listen(&chip, "mouseleave", move |_event: MouseEvent| {
            let _ = handle.class_list().remove_1("active");
        });
    }
}
