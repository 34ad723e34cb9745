// SPDX-License-Identifier: MPL-2.0
//! Centralized bounds and defaults for the settings file and the desktop UI.
//!
//! Scheduler defaults live in [`crate::toast::defaults`] and are re-exported
//! here so settings code reads every value from one place.
//!
//! # Categories
//!
//! - **Timing**: Bounds applied to values read from `settings.toml`
//! - **Rendering**: Frame interval and text estimation
//! - **Image Animation**: Bounce period and amplitude
//! - **Gestures**: Swipe distance that dismisses the banner

pub use crate::toast::defaults::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DEADLINE_SECS, DEFAULT_SETTLE_DELAY_MS,
};

// ==========================================================================
// Timing Bounds
// ==========================================================================

/// Minimum animation duration (in milliseconds). Zero means "jump".
pub const MIN_ANIMATION_DURATION_MS: u64 = 0;

/// Maximum animation duration accepted from the settings file (in milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 5_000;

/// Maximum auto-dismiss deadline accepted from the settings file (in seconds).
/// Zero keeps a toast sticky.
pub const MAX_DEADLINE_SECS: f64 = 600.0;

/// Maximum settle delay accepted from the settings file (in milliseconds).
pub const MAX_SETTLE_DELAY_MS: u64 = 2_000;

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Refresh interval used by hosts while a toast animation or timer is pending.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Average glyph advance relative to the font size, used for estimation.
pub const GLYPH_ADVANCE_FACTOR: f32 = 0.55;

// ==========================================================================
// Image Animation Defaults
// ==========================================================================

/// Half period of the image bounce (in milliseconds).
pub const IMAGE_BOUNCE_PERIOD_MS: u64 = 800;

/// Smallest scale reached by the bouncing image.
pub const IMAGE_BOUNCE_MIN_SCALE: f32 = 0.9;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Upward travel (in logical pixels) of a held pointer that dismisses the banner.
pub const SWIPE_DISMISS_DISTANCE: f32 = 24.0;

const _: () = {
    assert!(MIN_ANIMATION_DURATION_MS <= DEFAULT_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(DEFAULT_DEADLINE_SECS <= MAX_DEADLINE_SECS);
    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
    assert!(IMAGE_BOUNCE_MIN_SCALE > 0.0 && IMAGE_BOUNCE_MIN_SCALE < 1.0);
    assert!(SWIPE_DISMISS_DISTANCE > 0.0);
};
