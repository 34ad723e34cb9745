// SPDX-License-Identifier: MPL-2.0
//! Deterministic text height estimation.
//!
//! Glyphs are assumed to share an average advance proportional to the font
//! size. Text is wrapped greedily on whitespace; words wider than a line are
//! broken. Explicit newlines start new lines.

use crate::config::GLYPH_ADVANCE_FACTOR;
use crate::toast::{FontSpec, LineLimit, TextAlignment, TextMeasure};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMeasure {
    /// Average glyph advance relative to the font size.
    pub advance_factor: f32,
}

impl Default for EstimatedMeasure {
    fn default() -> Self {
        Self {
            advance_factor: GLYPH_ADVANCE_FACTOR,
        }
    }
}

impl EstimatedMeasure {
    /// Number of lines `text` wraps to at `columns` glyphs per line.
    #[must_use]
    pub fn line_count(text: &str, columns: usize) -> u32 {
        let columns = columns.max(1);
        text.split('\n')
            .map(|paragraph| paragraph_lines(paragraph, columns))
            .sum()
    }
}

fn paragraph_lines(paragraph: &str, columns: usize) -> u32 {
    let mut lines = 1;
    let mut used = 0;

    for word in paragraph.split_whitespace() {
        let mut len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };

        if needed <= columns {
            used = needed;
            continue;
        }
        if used > 0 {
            lines += 1;
        }
        while len > columns {
            lines += 1;
            len -= columns;
        }
        used = len;
    }
    lines
}

impl TextMeasure for EstimatedMeasure {
    fn measure(
        &self,
        text: &str,
        line_limit: LineLimit,
        _alignment: TextAlignment,
        font: &FontSpec,
        max_width: f32,
    ) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let advance = (font.size * self.advance_factor).max(f32::EPSILON);
        let columns = (max_width / advance).floor() as usize;

        let mut lines = Self::line_count(text, columns);
        if let Some(max) = line_limit.max_lines() {
            lines = lines.min(max);
        }
        lines as f32 * font.line_height()
    }
}
