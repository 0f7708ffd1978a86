//! Colored spans over plain text.

use std::ops::Range;

use crate::paint::Color;

/// A foreground color applied to a byte range of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpan {
    pub range: Range<usize>,
    pub color: Color,
}

/// Text with foreground color spans layered on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedText {
    text: String,
    spans: Vec<ColorSpan>,
}

impl AttributedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Spans in the order they were added. Later spans win where they overlap.
    pub fn spans(&self) -> &[ColorSpan] {
        &self.spans
    }

    /// Colors the first case-insensitive occurrence of `needle`.
    ///
    /// Returns `false` and leaves the text untouched when there is no match.
    pub fn set_color_for(&mut self, needle: &str, color: Color) -> bool {
        let Some(range) = find_case_insensitive(&self.text, needle) else {
            log::trace!("no occurrence of {needle:?} to color");
            return false;
        };
        self.spans.push(ColorSpan { range, color });
        true
    }

    /// The slice of text a span covers.
    pub fn span_text(&self, span: &ColorSpan) -> Option<&str> {
        self.text.get(span.range.clone())
    }
}

/// Byte range of the first occurrence of `needle` in `haystack`, comparing
/// chars by their lowercase mapping.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        for n in needle.chars() {
            let (offset, h) = rest.next()?;
            if !h.to_lowercase().eq(n.to_lowercase()) {
                return None;
            }
            end = start + offset + h.len_utf8();
        }
        Some(start..end)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::from_rgba(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn colors_first_match_case_insensitively() {
        let mut text = AttributedText::new("Terms and TERMS of service");
        assert!(text.set_color_for("terms", red()));
        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.spans()[0].range, 0..5);
        assert_eq!(text.span_text(&text.spans()[0]), Some("Terms"));
    }

    #[test]
    fn match_in_the_middle() {
        let mut text = AttributedText::new("Accept the Privacy Policy");
        assert!(text.set_color_for("privacy policy", red()));
        assert_eq!(text.span_text(&text.spans()[0]), Some("Privacy Policy"));
    }

    #[test]
    fn no_match_leaves_spans_empty() {
        let mut text = AttributedText::new("hello");
        assert!(!text.set_color_for("world", red()));
        assert!(!text.set_color_for("", red()));
        assert!(text.spans().is_empty());
    }

    #[test]
    fn needle_longer_than_remainder() {
        let mut text = AttributedText::new("abc");
        assert!(!text.set_color_for("bcd", red()));
    }

    #[test]
    fn multibyte_ranges_are_byte_offsets() {
        let mut text = AttributedText::new("café CAFÉ");
        assert!(text.set_color_for("É", red()));
        assert_eq!(text.spans()[0].range, 3..5);
        assert_eq!(text.span_text(&text.spans()[0]), Some("é"));
    }

    #[test]
    fn spans_keep_insertion_order() {
        let mut text = AttributedText::new("red green");
        text.set_color_for("green", Color::black());
        text.set_color_for("red", red());
        let ranges: Vec<_> = text.spans().iter().map(|s| s.range.clone()).collect();
        assert_eq!(ranges, vec![4..9, 0..3]);
    }
}
