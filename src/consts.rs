//! Shared numeric constants and fixed strings for the page effects.

// ── Welcome overlay ─────────────────────────────────────────────

/// Length of the overlay exit transition before it is fully hidden.
pub const WELCOME_EXIT_MS: u32 = 900;

/// Length of the back-button vanish transition before removal.
pub const BACK_VANISH_MS: u32 = 400;

// ── Reveal-on-scroll ────────────────────────────────────────────

/// Fraction of a `.reveal` element that must be visible to trigger it.
pub const REVEAL_THRESHOLD: f64 = 0.15;

// ── Chips ───────────────────────────────────────────────────────

/// Entrance delay between consecutive chips, in milliseconds.
pub const CHIP_STAGGER_MS: u64 = 90;

// ── Hero parallax ───────────────────────────────────────────────

/// Scroll distance over which the parallax runs before clamping.
pub const PARALLAX_RANGE_PX: f64 = 400.0;

/// Vertical offset of the hero block at full parallax progress.
pub const PARALLAX_SHIFT_PX: f64 = 15.0;

/// Opacity lost by the hero block at full parallax progress.
pub const PARALLAX_OPACITY_DROP: f64 = 0.2;

// ── Contact card tilt ───────────────────────────────────────────

/// Peak-to-center rotation of the card at its bounding-box edge, in degrees.
pub const TILT_DAMPEN_DEG: f64 = 25.0;

/// Card glow opacity while the pointer is over the card.
pub const GLOW_OPACITY_HOVER: &str = "0.35";

/// Card glow opacity after the pointer leaves.
pub const GLOW_OPACITY_REST: &str = "0.15";

// ── Cursor glow ─────────────────────────────────────────────────

/// Fraction of the remaining distance the follower covers per frame.
pub const CURSOR_EASE: f64 = 0.1;

/// Follower opacity while the pointer is inside the window.
pub const CURSOR_GLOW_OPACITY: &str = "0.4";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme preference.
pub const THEME_STORAGE_KEY: &str = "ghf-theme-pref";

/// Media query consulted when no explicit preference is stored.
pub const LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";

// ── Contact form ────────────────────────────────────────────────

/// Recipient of the generated mailto link.
pub const CONTACT_ADDRESS: &str = "gigihhaidarfalah14@gmail.com";

/// Substituted for a blank name field.
pub const FALLBACK_NAME: &str = "Anonymous";

/// Substituted for a blank email field.
pub const FALLBACK_EMAIL: &str = "No email provided";
