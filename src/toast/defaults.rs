// SPDX-License-Identifier: MPL-2.0
//! Default timings and metrics of a toast banner.
//!
//! # Categories
//!
//! - **Timing**: Animation duration, auto-dismiss deadline, settle delay
//! - **Layout**: Banner paddings and image reservation
//! - **Text**: Placeholder and line height used for measurement
//! - **Appearance**: Corner radius and background opacity of the presets

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default slide-in/slide-out animation duration (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// Default auto-dismiss deadline (in seconds).
pub const DEFAULT_DEADLINE_SECS: f64 = 4.0;

/// Pause between a toast leaving and the next queued toast entering
/// (in milliseconds).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Padding between the screen edges and the banner text.
pub const HORIZONTAL_PADDING: f32 = 16.0;

/// Width reserved beside the text for the image.
pub const IMAGE_SIDE_RESERVATION: f32 = 100.0;

/// Padding below the message.
pub const BOTTOM_PADDING: f32 = 16.0;

/// Gap between title and message.
pub const VERTICAL_SPACING: f32 = 8.0;

/// Margin added to the top safe-area inset.
pub const TOP_MARGIN: f32 = 16.0;

/// Extra height granted to the image over the message height.
pub const IMAGE_HEIGHT_ALLOWANCE: f32 = 8.0;

// ==========================================================================
// Text Defaults
// ==========================================================================

/// Single-character stand-in measured for empty text.
pub const PLACEHOLDER_TEXT: &str = "X";

/// Line height relative to the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.3;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Radius of the banner's bottom corners.
pub const CORNER_RADIUS: f32 = 21.0;

/// Opacity of the preset backgrounds.
pub const BACKGROUND_OPACITY: f32 = 0.95;

const _: () = {
    assert!(DEFAULT_DEADLINE_SECS > 0.0);
    assert!(IMAGE_SIDE_RESERVATION > HORIZONTAL_PADDING * 2.0);
    assert!(LINE_HEIGHT_FACTOR >= 1.0);
    assert!(BACKGROUND_OPACITY > 0.0 && BACKGROUND_OPACITY < 1.0);
};
