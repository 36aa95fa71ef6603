//! Core types for maskflow.
//!
//! These types carry the contract between the layout engine and a host
//! renderer: where text may not flow, and what a layout pass produced.

// =============================================================================
// Interval
// =============================================================================

/// A horizontal span in content coordinates.
///
/// Produced by mask queries and band aggregation. Invariant: `start <= end`.
/// The aggregator never emits inverted or empty spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
}

impl Interval {
    /// Create a new interval.
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Horizontal extent of the span.
    #[inline]
    pub fn width(&self) -> f32 {
        self.end - self.start
    }
}

// =============================================================================
// Line Segments
// =============================================================================

/// How a segment occupies horizontal space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentWidth {
    /// The segment is exactly as wide as its rendered text.
    Natural,
    /// The renderer must give the segment this width regardless of content.
    /// Used for spans cut short at a mask edge and for the gap fillers.
    Fixed(f32),
}

/// One flowed piece of a text line.
///
/// A line is a sequence of segments: text spans (natural or fixed width) and
/// empty-text fillers standing in for masked spans. Rendering the segments
/// inline, in order, reproduces the line geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    /// Segment text. Empty for gap fillers.
    pub text: String,
    /// 0-based index of the visual band (line) this segment belongs to.
    /// Parity gives the alternating tint debug renderers use.
    pub line: usize,
    /// Width policy for the renderer.
    pub width: SegmentWidth,
}

impl LineSegment {
    /// A span that takes its content's width.
    pub fn natural(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
            width: SegmentWidth::Natural,
        }
    }

    /// A span pinned to an explicit width.
    pub fn fixed(text: impl Into<String>, line: usize, width: f32) -> Self {
        Self {
            text: text.into(),
            line,
            width: SegmentWidth::Fixed(width),
        }
    }

    /// An empty spacer covering a masked span.
    pub fn filler(line: usize, width: f32) -> Self {
        Self::fixed(String::new(), line, width)
    }

    /// True for the empty spacer segments that stand in for masked spans.
    #[inline]
    pub fn is_filler(&self) -> bool {
        self.text.is_empty() && matches!(self.width, SegmentWidth::Fixed(_))
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// The style facts the measurement seam needs.
///
/// Deliberately tiny: the engine never rasterizes text, it only asks a
/// measurer how wide a string is at a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in layout units.
    pub font_size: f32,
}

impl TextStyle {
    pub const fn new(font_size: f32) -> Self {
        Self { font_size }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font_size: 16.0 }
    }
}
