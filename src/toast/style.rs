// SPDX-License-Identifier: MPL-2.0
//! Presentation configuration for a toast banner.

use super::defaults::{BACKGROUND_OPACITY, CORNER_RADIUS, LINE_HEIGHT_FACTOR};
use super::resources::{FontRole, NamedColor, ResourceResolver};
use iced::alignment;
use iced::{Color, Font};
use serde::{Deserialize, Serialize};

/// Named style presets selectable from the settings file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    #[default]
    Space,
    Mars,
}

impl std::str::FromStr for StylePreset {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "space" => Ok(StylePreset::Space),
            "mars" => Ok(StylePreset::Mars),
            other => Err(format!("unknown style preset: {other}")),
        }
    }
}

/// Horizontal text alignment, expressed relative to the reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl TextAlignment {
    #[must_use]
    pub fn to_horizontal(self) -> alignment::Horizontal {
        match self {
            TextAlignment::Leading => alignment::Horizontal::Left,
            TextAlignment::Center => alignment::Horizontal::Center,
            TextAlignment::Trailing => alignment::Horizontal::Right,
        }
    }
}

/// Side of the banner the image is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageAlignment {
    Leading,
    #[default]
    Trailing,
}

/// Maximum number of rendered lines. Zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineLimit(u32);

impl LineLimit {
    pub const UNLIMITED: Self = Self(0);

    #[must_use]
    pub const fn new(lines: u32) -> Self {
        Self(lines)
    }

    /// Returns the line cap, or `None` when unlimited.
    #[must_use]
    pub fn max_lines(self) -> Option<u32> {
        (self.0 > 0).then_some(self.0)
    }

    #[must_use]
    pub fn is_unlimited(self) -> bool {
        self.0 == 0
    }
}

/// A font face together with its point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub font: Font,
    pub size: f32,
}

impl FontSpec {
    #[must_use]
    pub fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }

    /// Height of one rendered line.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR
    }
}

/// Visual configuration of a toast. Freely cloned and shared.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastStyle {
    pub title_color: Color,
    pub title_alignment: TextAlignment,
    pub title_font: FontSpec,
    pub title_line_limit: LineLimit,
    pub message_color: Color,
    pub message_alignment: TextAlignment,
    pub message_font: FontSpec,
    pub message_line_limit: LineLimit,
    pub background: Color,
    pub corner_radius: f32,
    pub image_alignment: ImageAlignment,
    /// Whether the image bounces while the toast is visible.
    pub image_animation: bool,
}

impl ToastStyle {
    /// Builds a style from the two mandatory colors.
    ///
    /// The title inherits the message color; fonts come from `resources`.
    #[must_use]
    pub fn new(message_color: Color, background: Color, resources: &dyn ResourceResolver) -> Self {
        Self {
            title_color: message_color,
            title_alignment: TextAlignment::Leading,
            title_font: resources.font(FontRole::Title),
            title_line_limit: LineLimit::new(1),
            message_color,
            message_alignment: TextAlignment::Leading,
            message_font: resources.font(FontRole::Message),
            message_line_limit: LineLimit::UNLIMITED,
            background,
            corner_radius: CORNER_RADIUS,
            image_alignment: ImageAlignment::Trailing,
            image_animation: false,
        }
    }

    /// Light text on the translucent "space" background.
    #[must_use]
    pub fn space(resources: &dyn ResourceResolver) -> Self {
        Self::new(
            resources.color(NamedColor::Day),
            translucent_space(resources),
            resources,
        )
    }

    /// Like [`ToastStyle::space`] with a tomato-red title.
    #[must_use]
    pub fn mars(resources: &dyn ResourceResolver) -> Self {
        Self {
            title_color: resources.color(NamedColor::Tomato),
            ..Self::space(resources)
        }
    }

    #[must_use]
    pub fn preset(preset: StylePreset, resources: &dyn ResourceResolver) -> Self {
        match preset {
            StylePreset::Space => Self::space(resources),
            StylePreset::Mars => Self::mars(resources),
        }
    }

    #[must_use]
    pub fn image_on_trailing_side(&self) -> bool {
        self.image_alignment == ImageAlignment::Trailing
    }
}

fn translucent_space(resources: &dyn ResourceResolver) -> Color {
    Color {
        a: BACKGROUND_OPACITY,
        ..resources.color(NamedColor::Space)
    }
}
