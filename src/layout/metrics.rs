//! Text measurement seam.
//!
//! The engine never rasterizes text. It asks a [`TextMeasurer`] - normally
//! the host's font stack - how wide a string is, and memoizes the answers per
//! paragraph in [`WordWidths`]. [`MonospaceMetrics`] is the bundled measurer:
//! deterministic grapheme-cell counting scaled by font size, good enough for
//! tests, demos, and fixed-pitch hosts.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::types::TextStyle;

// =============================================================================
// Measurement seam
// =============================================================================

/// External text-metrics service.
///
/// Implementations must be deterministic: identical `(text, style)` inputs
/// return identical widths. The engine relies on that to reuse measurements
/// across relayouts.
pub trait TextMeasurer {
    /// Advance width of `text` in layout units.
    fn measure(&self, text: &str, style: &TextStyle) -> f32;
}

// =============================================================================
// Grapheme cells
// =============================================================================

/// Display width of one codepoint in monospace cells.
#[inline]
fn char_cells(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of one grapheme cluster in monospace cells.
///
/// Single codepoints delegate to the Unicode width tables. Multi-codepoint
/// clusters are either emoji sequences (ZWJ, VS16, skin tone, keycap, flag
/// pairs - two cells) or a base character with combining marks (the base
/// character's width).
fn grapheme_cells(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };
    if grapheme.len() == first.len_utf8() {
        return char_cells(first);
    }

    // Regional indicator pair (flag emoji).
    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }
    for c in chars {
        match c as u32 {
            0x200D => return 2,            // Zero-Width Joiner sequence
            0xFE0F => return 2,            // VS16 emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // skin tone modifier
            0x20E3 => return 2,            // combining enclosing keycap
            _ => {}
        }
    }
    char_cells(first)
}

/// Display width of a string in monospace cells.
///
/// Pure-ASCII strings take a byte-counting fast path; everything else goes
/// through grapheme segmentation so emoji sequences and combining marks
/// count as one user-perceived character.
pub fn text_cells(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    if text.is_ascii() {
        return text.bytes().filter(|&b| b >= 0x20).count();
    }
    text.graphemes(true).map(grapheme_cells).sum()
}

// =============================================================================
// Bundled measurer
// =============================================================================

/// Fixed-pitch measurer: grapheme cells times `font_size * aspect`.
///
/// The 0.6 default aspect is the usual monospace advance-to-em ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    aspect: f32,
}

impl MonospaceMetrics {
    pub const fn new() -> Self {
        Self { aspect: 0.6 }
    }

    /// Override the advance-to-em ratio. `1.0` makes one cell cost exactly
    /// `font_size` units, which keeps test arithmetic readable.
    pub const fn with_aspect(aspect: f32) -> Self {
        Self { aspect }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for MonospaceMetrics {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        text_cells(text) as f32 * style.font_size * self.aspect
    }
}

// =============================================================================
// Per-paragraph memoization
// =============================================================================

/// Measured widths for one paragraph's words, plus the separator space.
///
/// Built once per distinct text. Relayouts triggered by mask movement or
/// origin shifts reuse it, so the measurement service is consulted again
/// only when the text itself changes.
#[derive(Debug, Clone, PartialEq)]
pub struct WordWidths {
    words: Vec<f32>,
    space: f32,
}

impl WordWidths {
    /// Measure every word of `text` (split on single spaces, order kept)
    /// and the separator space.
    pub fn measure<M: TextMeasurer>(text: &str, style: &TextStyle, measurer: &M) -> Self {
        Self {
            words: text
                .split(' ')
                .map(|word| measurer.measure(word, style))
                .collect(),
            space: measurer.measure(" ", style),
        }
    }

    /// Width of the word at `index` in the paragraph's split order.
    #[inline]
    pub fn word(&self, index: usize) -> f32 {
        self.words.get(index).copied().unwrap_or(0.0)
    }

    /// Width of the single separator space.
    #[inline]
    pub fn space(&self) -> f32 {
        self.space
    }

    /// Number of words measured (split on spaces; empty text counts one).
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Cell counting
    // =========================================================================

    #[test]
    fn test_text_cells_ascii() {
        assert_eq!(text_cells(""), 0);
        assert_eq!(text_cells("hello"), 5);
        assert_eq!(text_cells("hello world"), 11);
    }

    #[test]
    fn test_text_cells_wide_and_combining() {
        assert_eq!(text_cells("你好"), 4); // CJK: two cells each
        assert_eq!(text_cells("café"), 4);
        assert_eq!(text_cells("e\u{0301}"), 1); // e + combining acute
    }

    #[test]
    fn test_text_cells_emoji_sequences() {
        assert_eq!(text_cells("👍"), 2);
        assert_eq!(text_cells("👍🏽"), 2); // skin tone
        assert_eq!(text_cells("👨‍👩‍👧‍👦"), 2); // ZWJ family
        assert_eq!(text_cells("🇺🇸"), 2); // flag pair
    }

    // =========================================================================
    // MonospaceMetrics
    // =========================================================================

    #[test]
    fn test_monospace_measure() {
        let style = TextStyle::new(10.0);
        let metrics = MonospaceMetrics::with_aspect(1.0);
        assert_eq!(metrics.measure("hello", &style), 50.0);
        assert_eq!(metrics.measure(" ", &style), 10.0);
        assert_eq!(metrics.measure("", &style), 0.0);

        // The 0.6 default aspect is not exactly representable in f32, so the
        // product lands near 30, not on it.
        let default = MonospaceMetrics::new();
        assert_eq!(default, MonospaceMetrics::with_aspect(0.6));
        assert!((default.measure("hello", &style) - 30.0).abs() < 1e-4);
    }

    // =========================================================================
    // WordWidths
    // =========================================================================

    #[test]
    fn test_word_widths_split_order() {
        let style = TextStyle::new(10.0);
        let widths = WordWidths::measure("a bb ccc", &style, &MonospaceMetrics::with_aspect(1.0));
        assert_eq!(widths.len(), 3);
        assert_eq!(widths.word(0), 10.0);
        assert_eq!(widths.word(1), 20.0);
        assert_eq!(widths.word(2), 30.0);
        assert_eq!(widths.space(), 10.0);
    }

    #[test]
    fn test_word_widths_empty_text_has_one_empty_word() {
        let style = TextStyle::default();
        let widths = WordWidths::measure("", &style, &MonospaceMetrics::new());
        assert_eq!(widths.len(), 1);
        assert_eq!(widths.word(0), 0.0);
    }

    #[test]
    fn test_word_out_of_range_is_zero() {
        let style = TextStyle::default();
        let widths = WordWidths::measure("one", &style, &MonospaceMetrics::new());
        assert_eq!(widths.word(7), 0.0);
    }
}
