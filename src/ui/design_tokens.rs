// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens used by the toast banner, following
the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the named toast colors
- **Spacing**: Spacing scale (8px grid) for the demo screen
- **Typography**: Font size scale

[`DesignTokens`] resolves the named toast colors and fonts from these tokens.

## Examples

```
use iced_toast::toast::ToastStyle;
use iced_toast::ui::design_tokens::{palette, DesignTokens};

let style = ToastStyle::mars(&DesignTokens);
assert_eq!(style.title_color, palette::TOMATO);
```
"#]

use crate::toast::{FontRole, FontSpec, NamedColor, ResourceResolver};
use iced::{font, Color, Font};

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Named toast colors
    pub const DAY: Color = Color::from_rgb(0.96, 0.96, 0.94); // Off-white text
    pub const SPACE: Color = Color::from_rgb(0.08, 0.09, 0.16); // Deep navy
    pub const TOMATO: Color = Color::from_rgb(1.0, 0.39, 0.28); // Mars red
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes for the two text roles of a toast.

    /// Toast title
    pub const TOAST_TITLE: f32 = 24.0;

    /// Toast message body
    pub const TOAST_MESSAGE: f32 = 16.0;

    /// Demo buttons and labels
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Resource Resolution
// ============================================================================

/// Resolver backed by the crate's design tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignTokens;

impl ResourceResolver for DesignTokens {
    fn color(&self, name: NamedColor) -> Color {
        match name {
            NamedColor::Day => palette::DAY,
            NamedColor::Space => palette::SPACE,
            NamedColor::Tomato => palette::TOMATO,
        }
    }

    fn font(&self, role: FontRole) -> FontSpec {
        match role {
            FontRole::Title => FontSpec::new(
                Font {
                    weight: font::Weight::Medium,
                    ..Font::DEFAULT
                },
                typography::TOAST_TITLE,
            ),
            FontRole::Message => FontSpec::new(Font::DEFAULT, typography::TOAST_MESSAGE),
        }
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::MD > 0.0);
    assert!(spacing::LG > spacing::MD);


    assert!(typography::TOAST_TITLE > typography::TOAST_MESSAGE);
    assert!(typography::TOAST_MESSAGE > typography::BODY);

    assert!(palette::TOMATO.r >= 0.0 && palette::TOMATO.r <= 1.0);
};
