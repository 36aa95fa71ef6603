//! The document-level shape collection.
//!
//! Owns every mask in display order and is their sole writer. Mutations bump
//! a revision counter - the change token the flow coordinator watches instead
//! of masks calling back into host state.

use super::band::occluded_spans_in_band;
use super::shape::Mask;
use crate::types::Interval;

/// Ordered, owned collection of masks.
///
/// Indices are stable: the list is append-only and never reordered, so a
/// mask's index is its identity for the lifetime of the document.
#[derive(Debug, Default)]
pub struct MaskSet {
    masks: Vec<Mask>,
    revision: u64,
}

impl MaskSet {
    pub fn new() -> Self {
        Self {
            masks: Vec::new(),
            revision: 0,
        }
    }

    /// Append a mask, returning its stable index.
    pub fn add(&mut self, mask: Mask) -> usize {
        self.masks.push(mask);
        self.revision += 1;
        self.masks.len() - 1
    }

    /// Move the mask at `index`, bumping the revision exactly once.
    ///
    /// Returns the new revision - the change token that tells subscribers a
    /// relayout decision is due. Out-of-range indices are a no-op.
    pub fn move_to(&mut self, index: usize, x: f32, y: f32) -> u64 {
        if let Some(mask) = self.masks.get_mut(index) {
            mask.set_position(x, y);
            self.revision += 1;
        }
        self.revision
    }

    /// Current change token. Bumped once per mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Mask> {
        self.masks.get(index)
    }

    /// All masks in display order.
    #[inline]
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    /// Copy of the current geometry, in order. Cheap: `Mask` is `Copy`.
    pub fn snapshot(&self) -> Vec<Mask> {
        self.masks.clone()
    }

    /// Spans no text in the band `[band_top, band_bottom]` may enter.
    pub fn occluded_spans(
        &self,
        band_top: f32,
        band_bottom: f32,
        content_width: f32,
    ) -> Vec<Interval> {
        occluded_spans_in_band(&self.masks, band_top, band_bottom, content_width)
    }
}
