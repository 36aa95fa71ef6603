//! Document flow - ordered paragraphs, lazy origins, height propagation.
//!
//! # Design Decisions
//!
//! - One owner, one writer. The document owns the options, the measurer, the
//!   mask set, and every paragraph; hosts mutate through it and read borrowed
//!   views back. No globals, no interior mutability.
//! - Mutations that the column visibly depends on (mask movement, text,
//!   width) reflow synchronously before returning. Building the document is
//!   the exception: push paragraphs first, then call [`DocumentFlow::reflow`]
//!   once - positions stay unresolved until that first pass, mirroring how
//!   heights only exist after layout.
//! - Origins resolve lazily. A paragraph anchors only once everything above
//!   it has reported a height; a height change shifts the already-resolved
//!   origins below it rigidly and stops at the first unresolved one.

use super::options::FlowOptions;
use super::paragraph::{HeightChange, Paragraph};
use crate::layout::TextMeasurer;
use crate::mask::{Mask, MaskSet};

/// The whole document: options, masks, and the ordered paragraph flow.
#[derive(Debug)]
pub struct DocumentFlow<M: TextMeasurer> {
    options: FlowOptions,
    measurer: M,
    masks: MaskSet,
    paragraphs: Vec<Paragraph>,
}

impl<M: TextMeasurer> DocumentFlow<M> {
    pub fn new(options: FlowOptions, measurer: M) -> Self {
        Self {
            options,
            measurer,
            masks: MaskSet::new(),
            paragraphs: Vec::new(),
        }
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Append a paragraph. The first one anchors at the top of the column;
    /// later ones stay unresolved until a reflow walks heights down to them.
    ///
    /// Does not reflow: push the whole document, then call [`reflow`] once.
    ///
    /// [`reflow`]: DocumentFlow::reflow
    pub fn push_paragraph(&mut self, text: impl Into<String>) -> usize {
        let top_y = if self.paragraphs.is_empty() {
            Some(0.0)
        } else {
            None
        };
        self.paragraphs.push(Paragraph::new(text, top_y));
        self.paragraphs.len() - 1
    }

    /// Add a mask over the column. Reflows.
    pub fn add_mask(&mut self, mask: Mask) -> usize {
        let index = self.masks.add(mask);
        self.reflow();
        index
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Move a mask - the drag path. Every affected paragraph has relayouted
    /// by the time this returns.
    pub fn move_mask(&mut self, index: usize, x: f32, y: f32) {
        self.masks.move_to(index, x, y);
        self.reflow();
    }

    /// Replace a paragraph's text. Reflows.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(paragraph) = self.paragraphs.get_mut(index) {
            paragraph.set_text(text);
            self.reflow();
        }
    }

    /// Resize the column. Reflows.
    pub fn set_content_width(&mut self, content_width: f32) {
        self.options.content_width = content_width;
        self.reflow();
    }

    // =========================================================================
    // Reading
    // =========================================================================

    #[inline]
    pub fn options(&self) -> &FlowOptions {
        &self.options
    }

    #[inline]
    pub fn masks(&self) -> &MaskSet {
        &self.masks
    }

    #[inline]
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    #[inline]
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    /// Paragraphs in flow order.
    #[inline]
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter()
    }

    /// Bottom of the last resolved paragraph; 0.0 before the first reflow.
    pub fn total_height(&self) -> f32 {
        self.paragraphs
            .iter()
            .rev()
            .find_map(|p| p.top_y().map(|top| top + p.height()))
            .unwrap_or(0.0)
    }

    // =========================================================================
    // Reflow
    // =========================================================================

    /// One synchronous pass: lay out every resolved paragraph in order,
    /// resolving and shifting downstream origins as heights land.
    ///
    /// Origins settle strictly before the paragraphs they position are
    /// visited, so a single forward pass leaves the document consistent.
    pub fn reflow(&mut self) {
        for index in 0..self.paragraphs.len() {
            if index > 0 && self.paragraphs[index].top_y().is_none() {
                // A paragraph pushed after its predecessor already had a
                // height anchors here instead of waiting for another height
                // change above it.
                let previous = &self.paragraphs[index - 1];
                if previous.revision() > 0 {
                    if let Some(base) = previous.top_y() {
                        let top = base + previous.height() + self.options.paragraph_margin;
                        self.paragraphs[index].resolve_top_y(top);
                    }
                }
            }

            let change = {
                let paragraph = &mut self.paragraphs[index];
                paragraph.ensure_layout(&self.measurer, &self.masks, &self.options)
            };
            if let Some(change) = change {
                self.propagate_height(index, change);
            }
        }
    }

    /// Apply one paragraph's height change to everything below it.
    fn propagate_height(&mut self, index: usize, change: HeightChange) {
        let next = index + 1;
        if next >= self.paragraphs.len() {
            return;
        }
        if self.paragraphs[next].top_y().is_none() {
            // First height this paragraph ever reported: its successor can
            // anchor now. Nothing further down depended on the old value.
            if let Some(base) = self.paragraphs[index].top_y() {
                self.paragraphs[next]
                    .resolve_top_y(base + change.new + self.options.paragraph_margin);
            }
            return;
        }
        // Already-resolved successors shift rigidly; the first unresolved
        // one ends the resolved prefix.
        let delta = change.delta();
        for paragraph in &mut self.paragraphs[next..] {
            if !paragraph.shift_top_y(delta) {
                break;
            }
        }
    }
}
