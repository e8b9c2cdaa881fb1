//! Pure motion math behind the decorative effects.
//!
//! Everything here is a plain function of its inputs so it can be tested
//! natively; the wiring modules feed in scroll offsets and pointer positions
//! and write the resulting frames back to the DOM.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{
    CHIP_STAGGER_MS, CURSOR_EASE, PARALLAX_OPACITY_DROP, PARALLAX_RANGE_PX, PARALLAX_SHIFT_PX,
    TILT_DAMPEN_DEG,
};

/// Vertical offset and opacity of the hero block at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    /// Downward offset in CSS pixels.
    pub translate_y_px: f64,
    /// Opacity in `[0.8, 1.0]`.
    pub opacity: f64,
}

/// Map a scroll position onto the hero parallax frame.
///
/// Progress grows linearly over [`PARALLAX_RANGE_PX`] and clamps there, so
/// scrolling past the range (or rubber-banding above the top) holds the
/// end-state frame.
#[must_use]
pub fn hero_parallax(scroll_y: f64) -> ParallaxFrame {
    let progress = (scroll_y / PARALLAX_RANGE_PX).clamp(0.0, 1.0);
    ParallaxFrame {
        translate_y_px: progress * PARALLAX_SHIFT_PX,
        opacity: 1.0 - progress * PARALLAX_OPACITY_DROP,
    }
}

/// Rotation and glow placement of the contact card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltFrame {
    /// Rotation around the horizontal axis, positive when the pointer is
    /// above center.
    pub rotate_x_deg: f64,
    /// Rotation around the vertical axis, positive when the pointer is
    /// right of center.
    pub rotate_y_deg: f64,
    /// Glow center, percent of the card width.
    pub glow_x_pct: f64,
    /// Glow center, percent of the card height.
    pub glow_y_pct: f64,
}

impl TiltFrame {
    /// The resting frame: no rotation, glow centered.
    #[must_use]
    pub fn neutral() -> Self {
        Self { rotate_x_deg: 0.0, rotate_y_deg: 0.0, glow_x_pct: 50.0, glow_y_pct: 50.0 }
    }
}

/// Map a pointer position (relative to the card's bounding box) onto a tilt
/// frame. Rotation is zero at the exact center and reaches
/// [`TILT_DAMPEN_DEG`] / 2 at the box edges. A degenerate box yields the
/// neutral frame rather than non-finite values.
#[must_use]
pub fn card_tilt(local_x: f64, local_y: f64, width: f64, height: f64) -> TiltFrame {
    if width <= 0.0 || height <= 0.0 {
        return TiltFrame::neutral();
    }
    TiltFrame {
        rotate_x_deg: ((height / 2.0 - local_y) / height) * TILT_DAMPEN_DEG,
        rotate_y_deg: ((local_x - width / 2.0) / width) * TILT_DAMPEN_DEG,
        glow_x_pct: local_x / width * 100.0,
        glow_y_pct: local_y / height * 100.0,
    }
}

/// Entrance delay for the chip at `index`, proportional to its position.
#[must_use]
pub fn chip_delay_ms(index: usize) -> u64 {
    index as u64 * CHIP_STAGGER_MS
}

/// One exponential smoothing step of the cursor follower toward `target`.
///
/// The follower covers [`CURSOR_EASE`] of the remaining distance per frame,
/// so the target itself is a fixed point.
#[must_use]
pub fn ease_toward(current: f64, target: f64) -> f64 {
    current + (target - current) * CURSOR_EASE
}
