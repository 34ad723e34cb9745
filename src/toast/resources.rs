// SPDX-License-Identifier: MPL-2.0
//! Injected resolution of named colors and fonts.
//!
//! Styles never read a global resource table; callers hand a
//! [`ResourceResolver`] to the style constructors instead.

use super::style::FontSpec;

/// Colors referenced by the built-in style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Day,
    Space,
    Tomato,
}

/// Text roles inside a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Message,
}

pub trait ResourceResolver {
    fn color(&self, name: NamedColor) -> iced::Color;
    fn font(&self, role: FontRole) -> FontSpec;
}
