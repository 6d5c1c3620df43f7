//! Text measurement
//!
//! Font rasterization belongs to the backend. The compose engine only needs
//! run widths to align labels and place the text cursor.

use crate::core::config::StyleMetrics;

/// Measures text runs
pub trait TextMeasure {
    /// Width of `text` in pixels
    fn text_width(&self, text: &str) -> f32;

    /// Height of one line in pixels
    fn line_height(&self) -> f32;
}

/// Fixed-advance measure used when the backend offers none
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Advance per character
    pub advance: f32,
    /// Line height
    pub line_height: f32,
}

impl MonospaceMeasure {
    /// Build from the configured style metrics
    pub fn from_style(style: &StyleMetrics) -> Self {
        Self { advance: style.glyph_advance, line_height: style.line_height }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_chars_not_bytes() {
        let measure = MonospaceMeasure { advance: 8.0, line_height: 16.0 };
        assert_eq!(measure.text_width("héllo"), 40.0);
        assert_eq!(measure.text_width(""), 0.0);
    }
}
