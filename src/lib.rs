//! Cosmetic interactivity for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It attaches
//! event-driven effects to an existing static document: a welcome overlay,
//! one-shot reveal animations, chip/parallax/cursor flourishes, a persisted
//! light/dark theme, a tilting contact card, and a mailto contact form.
//! Every behavior degrades to a no-op when its target element is missing.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`welcome`] | Welcome overlay lifecycle |
//! | [`reveal`] | One-shot reveal of sections entering the viewport |
//! | [`chips`] | Staggered chip entrance and hover activation |
//! | [`hero`] | Scroll-linked hero parallax |
//! | [`theme`] | Light/dark theme with a persisted preference |
//! | [`tilt`] | Pointer-driven contact-card tilt |
//! | [`contact`] | Form submission folded into a mailto navigation |
//! | [`glow`] | Cursor-glow follower loop |
//! | [`motion`] | Pure motion math shared by the effects |
//! | [`mailto`] | Contact draft and mailto URI construction |
//! | [`dom`] | Shared web-sys helpers |
//! | [`consts`] | Shared numeric constants and fixed strings |

pub mod chips;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod glow;
pub mod hero;
pub mod mailto;
pub mod motion;
pub mod reveal;
pub mod theme;
pub mod tilt;
pub mod welcome;

use wasm_bindgen::prelude::wasm_bindgen;

/// Wire every page behavior once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    stamp_year();
    welcome::wire();
    reveal::wire();
    chips::wire();
    hero::wire();
    theme::wire();
    tilt::wire();
    contact::wire();
    glow::wire();

    log::info!("page effects wired");
}

/// Stamp the current year into the footer.
fn stamp_year() {
    if let Some(year) = dom::by_id("year") {
        year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
    }
}
