// SPDX-License-Identifier: MPL-2.0
//! Banner sizing from text content.
//!
//! The banner spans the full screen width and is pinned to the top edge.
//! Its height is derived from the measured title and message:
//!
//! ```text
//! total = title + message + (title ? spacing : 0) + (inset.top + margin) + bottom
//! ```
//!
//! Text is measured through the [`TextMeasure`] collaborator within a width
//! that depends on whether an image is shown beside it.

use super::style::{FontSpec, LineLimit, TextAlignment, ToastStyle};
use super::defaults::{
    BOTTOM_PADDING, HORIZONTAL_PADDING, IMAGE_HEIGHT_ALLOWANCE, IMAGE_SIDE_RESERVATION,
    PLACEHOLDER_TEXT, TOP_MARGIN, VERTICAL_SPACING,
};
use iced::{Rectangle, Size};

/// Safe-area insets of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Provides the dimensions the banner is laid out against.
pub trait ScreenGeometry {
    fn screen_size(&self) -> Size;
    fn safe_area_insets(&self) -> Insets;
}

/// Maps text and its typography to a rendered height.
///
/// Implementations must be deterministic: identical inputs yield identical
/// heights. The scheduler relies on exact equality to detect truncation.
pub trait TextMeasure {
    fn measure(
        &self,
        text: &str,
        line_limit: LineLimit,
        alignment: TextAlignment,
        font: &FontSpec,
        max_width: f32,
    ) -> f32;
}

/// Fixed paddings of the banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub horizontal_padding: f32,
    /// Width reserved for the image column.
    pub image_side_reservation: f32,
    pub bottom_padding: f32,
    pub vertical_spacing: f32,
    /// Added below the top safe-area inset.
    pub top_margin: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            horizontal_padding: HORIZONTAL_PADDING,
            image_side_reservation: IMAGE_SIDE_RESERVATION,
            bottom_padding: BOTTOM_PADDING,
            vertical_spacing: VERTICAL_SPACING,
            top_margin: TOP_MARGIN,
        }
    }
}

impl Metrics {
    #[must_use]
    pub fn top_padding(&self, insets: Insets) -> f32 {
        insets.top + self.top_margin
    }

    /// Width available to the title and message.
    ///
    /// The image reservation applies whichever side the image is pinned to.
    #[must_use]
    pub fn text_width(&self, screen_width: f32, insets: Insets, has_image: bool) -> f32 {
        let width = if has_image {
            screen_width - self.horizontal_padding - self.image_side_reservation
        } else {
            screen_width - self.horizontal_padding * 2.0
        };
        (width - insets.left - insets.right).max(0.0)
    }

    /// Edge length of the square image drawn beside the message.
    #[must_use]
    pub fn image_side(&self, message_height: f32) -> f32 {
        (self.image_side_reservation - self.horizontal_padding * 2.0)
            .min(message_height + IMAGE_HEIGHT_ALLOWANCE)
    }
}

/// The text content a banner is sized for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Content<'a> {
    pub title: Option<&'a str>,
    pub message: &'a str,
    pub has_image: bool,
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Heights {
    pub title: f32,
    pub message: f32,
    pub total: f32,
}

/// Computes the title, message and total banner heights.
///
/// An absent title takes no room. A present but empty title, like an empty
/// message, is measured as a one-character placeholder so the row keeps its
/// line height.
///
/// With an image, a message that renders exactly as tall as the placeholder
/// gets its height doubled so the image beside it is not squeezed into a
/// single line.
pub fn compute_heights(
    content: Content<'_>,
    style: &ToastStyle,
    metrics: &Metrics,
    geometry: &(impl ScreenGeometry + ?Sized),
    measure: &(impl TextMeasure + ?Sized),
) -> Heights {
    let insets = geometry.safe_area_insets();
    let width = metrics.text_width(geometry.screen_size().width, insets, content.has_image);

    let title = match content.title {
        None => 0.0,
        Some(title) => measure.measure(
            non_empty(title),
            style.title_line_limit,
            style.title_alignment,
            &style.title_font,
            width,
        ),
    };

    let measure_message = |text: &str| {
        measure.measure(
            text,
            style.message_line_limit,
            style.message_alignment,
            &style.message_font,
            width,
        )
    };

    let mut message = measure_message(non_empty(content.message));
    if content.has_image {
        let placeholder = measure_message(PLACEHOLDER_TEXT);
        if (placeholder - message).abs() <= f32::EPSILON {
            message *= 2.0;
        }
    }

    let spacing = if content.title.is_some() {
        metrics.vertical_spacing
    } else {
        0.0
    };

    Heights {
        title,
        message,
        total: title + message + spacing + metrics.top_padding(insets) + metrics.bottom_padding,
    }
}

/// Frame of a banner of `height`, either parked above the screen or resting
/// against its top edge.
#[must_use]
pub fn banner_frame(height: f32, screen_width: f32, offscreen: bool) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: if offscreen { -height } else { 0.0 },
        width: screen_width,
        height,
    }
}

fn non_empty(text: &str) -> &str {
    if text.is_empty() {
        PLACEHOLDER_TEXT
    } else {
        text
    }
}
