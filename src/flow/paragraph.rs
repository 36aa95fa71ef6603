//! One paragraph and its cached layout.
//!
//! The paragraph is the relayout decision point. It keeps the inputs of its
//! last layout pass - column width, origin, mask geometry - and skips the
//! line breaker whenever none of them changed. Word widths are memoized
//! separately; only a text change discards those.

use crate::flow::options::FlowOptions;
use crate::layout::{TextMeasurer, WordWidths, break_lines};
use crate::mask::{Mask, MaskSet};
use crate::types::LineSegment;

// =============================================================================
// Relayout causes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Why a paragraph needs a fresh line-break run.
    ///
    /// Computed against the last layout snapshot; empty means the cached
    /// segments are still valid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Dirty: u8 {
        const TEXT = 1 << 0;
        const WIDTH = 1 << 1;
        const ORIGIN = 1 << 2;
        const MASKS = 1 << 3;
    }
}

// =============================================================================
// Snapshot and height report
// =============================================================================

/// Inputs of the most recent layout pass.
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    content_width: f32,
    top_y: f32,
    masks: Vec<Mask>,
}

/// Reported when a layout pass changed a paragraph's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightChange {
    pub old: f32,
    pub new: f32,
}

impl HeightChange {
    /// Signed difference downstream origins shift by.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.new - self.old
    }
}

// =============================================================================
// Paragraph
// =============================================================================

/// One paragraph: its text, flow position, and cached layout.
#[derive(Debug)]
pub struct Paragraph {
    text: String,
    /// Top of the paragraph in content coordinates. `None` until every
    /// preceding paragraph has reported a height.
    top_y: Option<f32>,
    height: f32,
    segments: Vec<LineSegment>,
    /// Memoized word measurements; cleared only by a text change.
    widths: Option<WordWidths>,
    /// Inputs of the last layout pass; `None` before the first.
    snapshot: Option<Snapshot>,
    /// Bumped once per actual line-break run.
    revision: u64,
}

impl Paragraph {
    pub(crate) fn new(text: impl Into<String>, top_y: Option<f32>) -> Self {
        Self {
            text: text.into(),
            top_y,
            height: 0.0,
            segments: Vec::new(),
            widths: None,
            snapshot: None,
            revision: 0,
        }
    }

    // =========================================================================
    // Render boundary
    // =========================================================================

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top of the paragraph, or `None` while its position is unresolved -
    /// an unresolved paragraph is not renderable yet.
    #[inline]
    pub fn top_y(&self) -> Option<f32> {
        self.top_y
    }

    /// Height of the last layout, 0.0 before the first.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Flowed segments of the last layout, in reading order.
    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Changes exactly when `segments()` may have. Hosts can skip re-drawing
    /// paragraphs whose revision did not move.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // =========================================================================
    // Mutation (document-internal)
    // =========================================================================

    /// Replace the text, discarding the memoized measurements.
    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.widths = None;
    }

    pub(crate) fn resolve_top_y(&mut self, top_y: f32) {
        self.top_y = Some(top_y);
    }

    /// Shift a resolved origin by `delta`. Returns false when the origin is
    /// unresolved, which ends the caller's propagation walk.
    pub(crate) fn shift_top_y(&mut self, delta: f32) -> bool {
        match &mut self.top_y {
            Some(top_y) => {
                *top_y += delta;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Relayout
    // =========================================================================

    /// Causes for a fresh line-break run, measured against the last pass.
    fn dirty(&self, content_width: f32, top_y: f32, masks: &[Mask]) -> Dirty {
        let Some(snapshot) = &self.snapshot else {
            return Dirty::all();
        };
        let mut dirty = Dirty::empty();
        if self.widths.is_none() {
            dirty |= Dirty::TEXT;
        }
        if snapshot.content_width != content_width {
            dirty |= Dirty::WIDTH;
        }
        if snapshot.top_y != top_y {
            dirty |= Dirty::ORIGIN;
        }
        if snapshot.masks.as_slice() != masks {
            dirty |= Dirty::MASKS;
        }
        dirty
    }

    /// Lay the paragraph out if anything relevant changed since the last
    /// pass. Returns the height change when the result is taller or shorter
    /// than the cached layout.
    ///
    /// An origin shift in a document without any masks is a pure vertical
    /// translation: the cached segments stay valid and only the snapshot
    /// origin is refreshed. With masks anywhere, the shifted bands may see
    /// different spans, so the paragraph relayouts.
    pub(crate) fn ensure_layout<M: TextMeasurer>(
        &mut self,
        measurer: &M,
        masks: &MaskSet,
        options: &FlowOptions,
    ) -> Option<HeightChange> {
        let top_y = self.top_y?;
        let dirty = self.dirty(options.content_width, top_y, masks.masks());
        if dirty.is_empty() {
            return None;
        }
        if dirty == Dirty::ORIGIN && masks.is_empty() {
            // The snapshot's mask list is empty too, or MASKS would be set.
            if let Some(snapshot) = &mut self.snapshot {
                snapshot.top_y = top_y;
            }
            return None;
        }

        let widths = self
            .widths
            .get_or_insert_with(|| WordWidths::measure(&self.text, &options.style, measurer));
        let layout = break_lines(
            &self.text,
            widths,
            options.content_width,
            options.line_height,
            |band_top, band_bottom| {
                masks.occluded_spans(top_y + band_top, top_y + band_bottom, options.content_width)
            },
        );

        self.segments = layout.segments;
        self.snapshot = Some(Snapshot {
            content_width: options.content_width,
            top_y,
            masks: masks.snapshot(),
        });
        self.revision += 1;

        let old = self.height;
        self.height = layout.total_height;
        (self.height != old).then_some(HeightChange {
            old,
            new: self.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceMetrics;
    use crate::types::TextStyle;
    use std::cell::Cell;

    /// 10 units per character and per space.
    fn options() -> FlowOptions {
        FlowOptions::new(600.0).with_style(TextStyle::new(10.0))
    }

    fn measurer() -> MonospaceMetrics {
        MonospaceMetrics::with_aspect(1.0)
    }

    struct CountingMeasurer {
        calls: Cell<usize>,
        inner: MonospaceMetrics,
    }

    impl CountingMeasurer {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                inner: MonospaceMetrics::with_aspect(1.0),
            }
        }
    }

    impl TextMeasurer for CountingMeasurer {
        fn measure(&self, text: &str, style: &TextStyle) -> f32 {
            self.calls.set(self.calls.get() + 1);
            self.inner.measure(text, style)
        }
    }

    // =========================================================================
    // Layout gating
    // =========================================================================

    #[test]
    fn test_unresolved_paragraph_never_lays_out() {
        let mut paragraph = Paragraph::new("hello world", None);
        let change = paragraph.ensure_layout(&measurer(), &MaskSet::new(), &options());
        assert_eq!(change, None);
        assert!(paragraph.segments().is_empty());
        assert_eq!(paragraph.revision(), 0);
        assert_eq!(paragraph.height(), 0.0);
    }

    #[test]
    fn test_first_layout_reports_height() {
        let mut paragraph = Paragraph::new("hello world", Some(0.0));
        let change = paragraph.ensure_layout(&measurer(), &MaskSet::new(), &options());
        assert_eq!(change, Some(HeightChange { old: 0.0, new: 20.0 }));
        assert_eq!(paragraph.revision(), 1);
        assert_eq!(paragraph.segments(), [LineSegment::natural("hello world", 0)]);
    }

    #[test]
    fn test_clean_inputs_reuse_segments_verbatim() {
        let counting = CountingMeasurer::new();
        let masks = MaskSet::new();
        let mut paragraph = Paragraph::new("hello wrapped world", Some(0.0));

        paragraph.ensure_layout(&counting, &masks, &options());
        let first_calls = counting.calls.get();
        let first_segments = paragraph.segments().to_vec();
        assert!(first_calls > 0);

        let change = paragraph.ensure_layout(&counting, &masks, &options());
        assert_eq!(change, None);
        assert_eq!(paragraph.revision(), 1);
        assert_eq!(paragraph.segments(), first_segments.as_slice());
        // The measurement service was not consulted a second time.
        assert_eq!(counting.calls.get(), first_calls);
    }

    #[test]
    fn test_width_change_relayouts_without_remeasuring() {
        let counting = CountingMeasurer::new();
        let masks = MaskSet::new();
        let mut paragraph = Paragraph::new(
            "aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd eeeeeeeeee ffffffffff",
            Some(0.0),
        );

        paragraph.ensure_layout(&counting, &masks, &options());
        let first_calls = counting.calls.get();
        let wide_height = paragraph.height();

        let narrow = FlowOptions::new(220.0).with_style(TextStyle::new(10.0));
        let change = paragraph.ensure_layout(&counting, &masks, &narrow);
        assert!(change.is_some());
        assert_eq!(paragraph.revision(), 2);
        assert!(paragraph.height() > wide_height);
        // Word widths came from the memo, not the service.
        assert_eq!(counting.calls.get(), first_calls);
    }

    #[test]
    fn test_text_change_remeasures() {
        let counting = CountingMeasurer::new();
        let masks = MaskSet::new();
        let mut paragraph = Paragraph::new("one two", Some(0.0));

        paragraph.ensure_layout(&counting, &masks, &options());
        let first_calls = counting.calls.get();

        paragraph.set_text("three four five");
        let change = paragraph.ensure_layout(&counting, &masks, &options());
        assert_eq!(change, None); // still one line tall
        assert_eq!(paragraph.revision(), 2);
        assert!(counting.calls.get() > first_calls);
        assert_eq!(
            paragraph.segments(),
            [LineSegment::natural("three four five", 0)]
        );
    }

    // =========================================================================
    // Origin shifts
    // =========================================================================

    #[test]
    fn test_origin_shift_without_masks_reuses_segments() {
        let masks = MaskSet::new();
        let mut paragraph = Paragraph::new("hello world", Some(0.0));
        paragraph.ensure_layout(&measurer(), &masks, &options());
        let segments = paragraph.segments().to_vec();

        paragraph.resolve_top_y(36.0);
        let change = paragraph.ensure_layout(&measurer(), &masks, &options());
        assert_eq!(change, None);
        assert_eq!(paragraph.revision(), 1);
        assert_eq!(paragraph.segments(), segments.as_slice());

        // The snapshot origin was refreshed: staying put stays clean.
        let change = paragraph.ensure_layout(&measurer(), &masks, &options());
        assert_eq!(change, None);
        assert_eq!(paragraph.revision(), 1);
    }

    #[test]
    fn test_origin_shift_with_masks_relayouts() {
        let mut masks = MaskSet::new();
        masks.add(Mask::rect(100.0, 33.0, 250.0, 0.0));
        let text = "aaaaaa bbbbbb cccccc dddddd eeeeee";
        let mut paragraph = Paragraph::new(text, Some(0.0));

        paragraph.ensure_layout(&measurer(), &masks, &options());
        assert!(paragraph.segments().iter().any(|s| s.is_filler()));

        // Far below the mask the flow is clean again.
        paragraph.resolve_top_y(500.0);
        paragraph.ensure_layout(&measurer(), &masks, &options());
        assert_eq!(paragraph.revision(), 2);
        assert!(!paragraph.segments().iter().any(|s| s.is_filler()));
    }

    #[test]
    fn test_mask_move_relayouts() {
        let mut masks = MaskSet::new();
        let id = masks.add(Mask::rect(100.0, 33.0, 250.0, 250.0));
        let text = "aaaaaa bbbbbb cccccc dddddd eeeeee";
        let mut paragraph = Paragraph::new(text, Some(0.0));

        paragraph.ensure_layout(&measurer(), &masks, &options());
        assert!(!paragraph.segments().iter().any(|s| s.is_filler()));

        masks.move_to(id, 250.0, 0.0);
        paragraph.ensure_layout(&measurer(), &masks, &options());
        assert_eq!(paragraph.revision(), 2);
        assert!(paragraph.segments().iter().any(|s| s.is_filler()));
    }

    // =========================================================================
    // Dirty causes
    // =========================================================================

    #[test]
    fn test_dirty_causes() {
        let masks = MaskSet::new();
        let mut paragraph = Paragraph::new("hello", Some(0.0));
        assert_eq!(paragraph.dirty(600.0, 0.0, masks.masks()), Dirty::all());

        paragraph.ensure_layout(&measurer(), &masks, &options());
        assert_eq!(paragraph.dirty(600.0, 0.0, &[]), Dirty::empty());
        assert_eq!(paragraph.dirty(300.0, 0.0, &[]), Dirty::WIDTH);
        assert_eq!(paragraph.dirty(600.0, 36.0, &[]), Dirty::ORIGIN);
        assert_eq!(
            paragraph.dirty(600.0, 0.0, &[Mask::circle(50.0, 0.0, 0.0)]),
            Dirty::MASKS
        );
        assert_eq!(
            paragraph.dirty(300.0, 36.0, &[]),
            Dirty::WIDTH | Dirty::ORIGIN
        );
    }
}
