//! Band aggregation: from individual mask spans to the ordered, disjoint
//! interval list one text line must flow around.
//!
//! # Algorithm
//!
//! 1. Query every mask at the band's top and at its bottom (two samples).
//! 2. Sort the hits by start.
//! 3. Sweep once, merging every span that starts inside the accumulated one.
//! 4. Clamp to `[0, content_width]`, dropping spans that end up empty.
//!
//! Sampling only the band edges means a mask whose vertical extent lies
//! strictly between them is missed for that band. That is a known limit of
//! the two-sample scheme; callers accept it in exchange for two queries per
//! mask per line.

use super::shape::Mask;
use crate::types::Interval;

/// Collect, merge, and crop the spans masks occlude within one band.
///
/// `band_top` and `band_bottom` are absolute y coordinates. The result is
/// sorted by start, pairwise disjoint, and contained in `[0, content_width]`.
/// No masks, or none intersecting the band, yields an empty vector.
pub fn occluded_spans_in_band(
    masks: &[Mask],
    band_top: f32,
    band_bottom: f32,
    content_width: f32,
) -> Vec<Interval> {
    let mut spans = Vec::new();
    for mask in masks {
        if let Some(span) = mask.horizontal_span_at(band_top) {
            spans.push(span);
        }
        if let Some(span) = mask.horizontal_span_at(band_bottom) {
            spans.push(span);
        }
    }
    spans.sort_by(|a, b| a.start.total_cmp(&b.start));
    clamp_spans(merge_spans(spans), content_width)
}

/// Merge a start-sorted span list in one sweep.
///
/// A span merges into the one being accumulated only if it starts strictly
/// inside it; touching spans stay separate.
pub(crate) fn merge_spans(sorted: Vec<Interval>) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start < last.end => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Clamp every span to `[0, content_width]` and drop the ones that no longer
/// cover anything (shapes dragged fully outside the column).
pub(crate) fn clamp_spans(spans: Vec<Interval>, content_width: f32) -> Vec<Interval> {
    let mut cropped = Vec::with_capacity(spans.len());
    for span in spans {
        let start = span.start.max(0.0);
        let end = span.end.min(content_width);
        if end > start {
            cropped.push(Interval::new(start, end));
        }
    }
    cropped
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 600.0;

    // =========================================================================
    // Sampling
    // =========================================================================

    #[test]
    fn test_no_masks_is_empty() {
        assert!(occluded_spans_in_band(&[], 0.0, 20.0, WIDTH).is_empty());
    }

    #[test]
    fn test_mask_outside_band_is_empty() {
        let masks = [Mask::rect(100.0, 33.0, 250.0, 250.0)];
        assert!(occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH).is_empty());
    }

    #[test]
    fn test_both_samples_of_one_mask_merge() {
        // The rectangle covers the whole band, so top and bottom samples
        // report the same span; one interval comes out.
        let masks = [Mask::rect(100.0, 33.0, 250.0, 0.0)];
        let spans = occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH);
        assert_eq!(spans, vec![Interval::new(245.0, 355.0)]);
    }

    #[test]
    fn test_mask_caught_by_bottom_sample_only() {
        let masks = [Mask::rect(50.0, 5.0, 100.0, 18.0)];
        let spans = occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH);
        assert_eq!(spans, vec![Interval::new(95.0, 155.0)]);
    }

    #[test]
    fn test_thin_mask_between_samples_is_missed() {
        // Vertical extent [8, 13] lies strictly between the sampled edges
        // 0 and 20. The two-sample scheme cannot see it.
        let masks = [Mask::rect(50.0, 5.0, 100.0, 8.0)];
        assert!(occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH).is_empty());
    }

    // =========================================================================
    // Ordering and merging
    // =========================================================================

    #[test]
    fn test_spans_sorted_by_start() {
        let masks = [
            Mask::rect(40.0, 30.0, 300.0, 0.0),
            Mask::rect(40.0, 30.0, 50.0, 0.0),
        ];
        let spans = occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH);
        assert_eq!(
            spans,
            vec![Interval::new(45.0, 95.0), Interval::new(295.0, 345.0)]
        );
    }

    #[test]
    fn test_overlapping_masks_merge() {
        let masks = [
            Mask::rect(100.0, 30.0, 100.0, 0.0), // [95, 205]
            Mask::rect(100.0, 30.0, 150.0, 0.0), // [145, 255]
        ];
        let spans = occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH);
        assert_eq!(spans, vec![Interval::new(95.0, 255.0)]);
    }

    #[test]
    fn test_contained_span_is_absorbed() {
        let mixed = vec![
            Interval::new(10.0, 200.0),
            Interval::new(50.0, 80.0),
            Interval::new(150.0, 180.0),
        ];
        assert_eq!(merge_spans(mixed), vec![Interval::new(10.0, 200.0)]);
    }

    #[test]
    fn test_touching_spans_stay_separate() {
        let touching = vec![Interval::new(45.0, 155.0), Interval::new(155.0, 265.0)];
        assert_eq!(merge_spans(touching.clone()), touching);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let raw = vec![
            Interval::new(0.0, 50.0),
            Interval::new(40.0, 90.0),
            Interval::new(200.0, 260.0),
            Interval::new(210.0, 220.0),
        ];
        let once = merge_spans(raw);
        let twice = merge_spans(once.clone());
        assert_eq!(once, twice);
    }

    // =========================================================================
    // Cropping
    // =========================================================================

    #[test]
    fn test_clamp_left_edge() {
        // Mask partly off the left edge of the column.
        let masks = [Mask::rect(30.0, 30.0, -20.0, 0.0)]; // [-25, 15]
        let spans = occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH);
        assert_eq!(spans, vec![Interval::new(0.0, 15.0)]);
    }

    #[test]
    fn test_clamp_right_edge() {
        let masks = [Mask::rect(100.0, 30.0, 550.0, 0.0)]; // [545, 655]
        let spans = occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH);
        assert_eq!(spans, vec![Interval::new(545.0, 600.0)]);
    }

    #[test]
    fn test_mask_fully_outside_column_dropped() {
        let masks = [
            Mask::rect(50.0, 30.0, -100.0, 0.0), // entirely left
            Mask::rect(50.0, 30.0, 700.0, 0.0),  // entirely right
        ];
        assert!(occluded_spans_in_band(&masks, 0.0, 20.0, WIDTH).is_empty());
    }
}
