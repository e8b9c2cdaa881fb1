//! Cursor-glow follower eased toward the pointer every animation frame.
//!
//! The frame callback re-schedules itself indefinitely; there is no
//! cancellation path, it runs for the page's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, PointerEvent};

use crate::consts::CURSOR_GLOW_OPACITY;
use crate::dom;
use crate::motion;

struct FollowerState {
    x: f64,
    y: f64,
    target_x: f64,
    target_y: f64,
}

/// Start the follower loop on `.cursor-glow` and track the pointer through
/// window-level events. The glow fades out when the pointer leaves.
pub fn wire() {
    let Some(glow) = dom::query(".cursor-glow") else {
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };

    let center_x = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) / 2.0;
    let center_y = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) / 2.0;
    let state = Rc::new(RefCell::new(FollowerState {
        x: center_x,
        y: center_y,
        target_x: center_x,
        target_y: center_y,
    }));

    start_follower(&glow, &state);

    {
        let state = Rc::clone(&state);
        let glow = glow.clone();
        dom::listen(&window, "pointermove", move |event: PointerEvent| {
            let mut state = state.borrow_mut();
            state.target_x = f64::from(event.client_x());
            state.target_y = f64::from(event.client_y());
            dom::set_style(&glow, "opacity", CURSOR_GLOW_OPACITY);
        });
    }

    dom::listen(&window, "pointerleave", move |_event: PointerEvent| {
        dom::set_style(&glow, "opacity", "0");
    });
}

/// Kick off the self-rescheduling frame loop. The closure holds itself via
/// the shared holder so it can re-request the next frame.
fn start_follower(glow: &Element, state: &Rc<RefCell<FollowerState>>) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let glow = glow.clone();
    let state = Rc::clone(state);

    *holder.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        {
            let mut state = state.borrow_mut();
            state.x = motion::ease_toward(state.x, state.target_x);
            state.y = motion::ease_toward(state.y, state.target_y);
            dom::set_style(&glow, "left", &format!("{}px", state.x));
            dom::set_style(&glow, "top", &format!("{}px", state.y));
        }
        request_next(&holder_for_cb);
    }) as Box<dyn FnMut(f64)>));

    request_next(&holder);
}

fn request_next(holder: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(window) = dom::window() else {
        return;
    };
    if let Some(callback) = holder.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
