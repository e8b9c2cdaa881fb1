//! Light/dark theme with a persisted preference.
//!
//! Precedence for the initial mode: explicit stored preference, then the
//! system `prefers-color-scheme` signal, then dark. While no explicit
//! preference is stored, a `change` listener keeps following the system.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use web_sys::{MediaQueryList, MediaQueryListEvent, MouseEvent, Storage};

use crate::consts::{LIGHT_SCHEME_QUERY, THEME_STORAGE_KEY};
use crate::dom;

/// The two renderable color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Storage string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything but the two valid forms is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The mode a toggle click switches to.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label shown on the toggle control. Names the mode a click leads to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }

    /// Whether the light scheme is active; doubles as the toggle's
    /// `aria-pressed` state.
    #[must_use]
    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

/// Resolve the initial mode from the three preference sources.
///
/// `system_prefers_light` is `None` when the environment exposes no
/// `matchMedia` signal at all, which falls through to the dark default.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, system_prefers_light: Option<bool>) -> ThemeMode {
    if let Some(mode) = stored.and_then(ThemeMode::parse) {
        return mode;
    }
    match system_prefers_light {
        Some(true) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

fn storage() -> Option<Storage> {
    dom::window().and_then(|w| w.local_storage().ok().flatten())
}

fn stored_preference() -> Option<String> {
    storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn persist(mode: ThemeMode) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
    }
}

fn light_scheme_query() -> Option<MediaQueryList> {
    dom::window()?.match_media(LIGHT_SCHEME_QUERY).ok().flatten()
}

/// The mode currently rendered on `<body>`.
fn current() -> ThemeMode {
    let is_light = dom::document()
        .and_then(|d| d.body())
        .is_some_and(|body| body.class_list().contains("light"));
    if is_light { ThemeMode::Light } else { ThemeMode::Dark }
}

/// Render `mode` on `<body>` and sync the toggle control's label and
/// pressed state.
fn apply(mode: ThemeMode) {
    let Some(document) = dom::document() else {
        return;
    };
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force("light", mode.is_light());
    }
    if let Some(toggle) = document.get_element_by_id("theme-toggle") {
        toggle.set_text_content(Some(mode.toggle_label()));
        let _ = toggle.set_attribute("aria-pressed", if mode.is_light() { "true" } else { "false" });
    }
}

/// Apply the resolved initial mode, then wire the toggle control and the
/// live system-preference listener.
pub fn wire() {
    let query = light_scheme_query();
    let initial = resolve_initial(
        stored_preference().as_deref(),
        query.as_ref().map(MediaQueryList::matches),
    );
    apply(initial);

    if let Some(toggle) = dom::by_id("theme-toggle") {
        dom::listen(&toggle, "click", move |_event: MouseEvent| {
            let next = current().opposite();
            apply(next);
            persist(next);
        });
    }

    if let Some(query) = query {
        dom::listen(&query, "change", move |event: MediaQueryListEvent| {
            // An explicit preference outranks the system signal.
            if stored_preference().is_some() {
                return;
            }
            apply(if event.matches() { ThemeMode::Light } else { ThemeMode::Dark });
        });
    }
}
