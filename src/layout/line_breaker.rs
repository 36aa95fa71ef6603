//! Greedy obstacle-aware line breaking.
//!
//! Words flow left to right across fixed-height bands. Masked spans split a
//! band into gaps the text must jump: the span accumulated so far is cut
//! short at the masked edge, a filler covers the masked width, and flow
//! resumes on its far side. Whatever does not fit moves down one band.
//!
//! # Algorithm
//!
//! Per word, against the hypothetical line width with the word appended:
//!
//! 1. Mask rule first: while the next masked span starts inside the
//!    hypothetical width, cut the current span at the masked edge, cover the
//!    masked width with a filler, and resume after it - or on a fresh band
//!    when the masked span runs to the column edge.
//! 2. Overflow rule second: a non-empty line that cannot take the word
//!    flushes with a trailing space and the word retries on a fresh band.
//!    A word wider than the whole column is placed alone and overflows;
//!    words are never split.
//! 3. Append the word to the running span.
//!
//! Masked spans are fetched once per band. One accounting quirk is
//! deliberate: the hypothetical width charges a separator space whenever the
//! line is non-empty, even right after a gap where no space will render.

use crate::layout::metrics::WordWidths;
use crate::types::{Interval, LineSegment};

/// Output of one paragraph layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// Flowed segments, in reading order.
    pub segments: Vec<LineSegment>,
    /// Bottom of the last band: its top plus one line height.
    pub total_height: f32,
}

impl LineLayout {
    /// Number of bands the paragraph occupies. At least one, even when empty.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.segments.last().map_or(0, |s| s.line + 1)
    }
}

/// Flow `text` word by word through bands of `line_height`, around the
/// masked spans `mask_query` reports per band.
///
/// `widths` must have been measured from this same `text`; `mask_query`
/// receives each band's top and bottom in paragraph-relative coordinates and
/// returns spans sorted, disjoint, and cropped to `[0, content_width]`.
pub fn break_lines(
    text: &str,
    widths: &WordWidths,
    content_width: f32,
    line_height: f32,
    mask_query: impl FnMut(f32, f32) -> Vec<Interval>,
) -> LineLayout {
    debug_assert_eq!(
        widths.len(),
        text.split(' ').count(),
        "widths measured from different text"
    );

    let mut breaker = Breaker::new(widths, content_width, line_height, mask_query);
    for (index, word) in text.split(' ').enumerate() {
        breaker.place_word(word, widths.word(index));
    }
    breaker.finish()
}

/// Line-breaking state machine.
struct Breaker<'a, Q: FnMut(f32, f32) -> Vec<Interval>> {
    widths: &'a WordWidths,
    content_width: f32,
    line_height: f32,
    mask_query: Q,
    segments: Vec<LineSegment>,
    /// Index of the current band.
    line: usize,
    /// Paragraph-relative top of the current band.
    line_top: f32,
    /// Occupied width on the current line, including any phantom separators.
    line_width: f32,
    /// End of the previous masked span on this line, 0.0 before the first.
    gap_end: f32,
    /// Words accumulated since the last flush.
    span: String,
    /// Masked spans for the current band, cursor into them.
    line_spans: Vec<Interval>,
    mask_cursor: usize,
}

impl<'a, Q: FnMut(f32, f32) -> Vec<Interval>> Breaker<'a, Q> {
    fn new(
        widths: &'a WordWidths,
        content_width: f32,
        line_height: f32,
        mut mask_query: Q,
    ) -> Self {
        let line_spans = mask_query(0.0, line_height);
        Self {
            widths,
            content_width,
            line_height,
            mask_query,
            segments: Vec::new(),
            line: 0,
            line_top: 0.0,
            line_width: 0.0,
            gap_end: 0.0,
            span: String::new(),
            line_spans,
            mask_cursor: 0,
        }
    }

    /// Line width if `word_width` were appended here. The separator space is
    /// charged whenever the line is non-empty.
    #[inline]
    fn hypothetical(&self, word_width: f32) -> f32 {
        if self.line_width == 0.0 {
            word_width
        } else {
            self.line_width + self.widths.space() + word_width
        }
    }

    /// Move flow to the top of the next band.
    fn break_line(&mut self) {
        self.line += 1;
        self.line_top += self.line_height;
        self.line_width = 0.0;
        self.gap_end = 0.0;
        self.mask_cursor = 0;
        self.line_spans = (self.mask_query)(self.line_top, self.line_top + self.line_height);
    }

    /// Cut the running span at a masked edge, then cover the masked width.
    ///
    /// The cut segment is pinned to the distance between the previous gap
    /// (or line start) and the masked edge - zero is fine, the segment is
    /// flushed regardless so the filler lands in reading order.
    fn flush_to_mask(&mut self, masked: Interval) {
        let reach = masked.start - self.gap_end;
        debug_assert!(reach >= 0.0, "masked spans out of order");
        self.segments
            .push(LineSegment::fixed(std::mem::take(&mut self.span), self.line, reach));
        self.segments
            .push(LineSegment::filler(self.line, masked.width()));
    }

    /// Flush the running span at a width overflow: natural width, one
    /// trailing space.
    fn flush_overflow(&mut self) {
        let mut text = std::mem::take(&mut self.span);
        text.push(' ');
        self.segments.push(LineSegment::natural(text, self.line));
    }

    fn place_word(&mut self, word: &str, word_width: f32) {
        loop {
            let new_width = self.hypothetical(word_width);

            // Mask rule comes first: the word may not straddle a masked span.
            if let Some(masked) = self.line_spans.get(self.mask_cursor).copied() {
                if masked.start < new_width {
                    self.flush_to_mask(masked);
                    if masked.end >= self.content_width {
                        // Nothing left of this band.
                        self.break_line();
                    } else {
                        self.line_width = masked.end;
                        self.gap_end = masked.end;
                        self.mask_cursor += 1;
                    }
                    continue;
                }
            }

            // Overflow rule. An oversized word on an empty line is placed
            // anyway - single words are never split.
            if new_width > self.content_width && self.line_width > 0.0 {
                self.flush_overflow();
                self.break_line();
                continue;
            }

            if !self.span.is_empty() {
                self.span.push(' ');
            }
            self.span.push_str(word);
            self.line_width = new_width;
            return;
        }
    }

    /// Flush whatever remains. Even an empty span closes the paragraph with
    /// an explicit final segment, so every layout has at least one.
    fn finish(mut self) -> LineLayout {
        let text = std::mem::take(&mut self.span);
        self.segments.push(LineSegment::natural(text, self.line));
        LineLayout {
            segments: self.segments,
            total_height: self.line_top + self.line_height,
        }
    }
}
