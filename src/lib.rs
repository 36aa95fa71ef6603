//! # maskflow
//!
//! Obstacle-aware text layout: paragraphs that reflow around movable shapes.
//!
//! A document is a vertical column of paragraphs and a set of masks (rects
//! and circles) floating over it. Text fills each paragraph line by line and
//! jumps the horizontal spans the masks occlude; dragging a mask or editing a
//! paragraph relayouts exactly the paragraphs whose inputs changed and
//! translates the rest.
//!
//! ## Architecture
//!
//! The pipeline is pull-based - nothing renders, nothing subscribes:
//! ```text
//! MaskSet → occluded spans per band → break_lines → LineSegments
//!                                          ↑
//! DocumentFlow → Paragraph (dirty check) ──┘ → origins + total height
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Intervals, line segments, text style
//! - [`mask`] - Shapes, the owned mask set, band aggregation
//! - [`layout`] - Text measurement seam and the greedy line breaker
//! - [`flow`] - Paragraph caching and the document coordinator
//!
//! ## Example
//!
//! ```
//! use maskflow::{DocumentFlow, FlowOptions, Mask, MonospaceMetrics};
//!
//! let mut document = DocumentFlow::new(FlowOptions::new(600.0), MonospaceMetrics::new());
//! document.push_paragraph("the quick brown fox jumps over the lazy dog");
//! document.reflow();
//!
//! let mask = document.add_mask(Mask::rect(100.0, 33.0, 250.0, 250.0));
//! document.move_mask(mask, 250.0, 0.0); // drag it over the first line
//!
//! for segment in document.paragraph(0).unwrap().segments() {
//!     println!("{:?}", segment);
//! }
//! ```

pub mod flow;
pub mod layout;
pub mod mask;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use flow::{DocumentFlow, FlowOptions, Paragraph};

pub use layout::{
    break_lines, text_cells, LineLayout, MonospaceMetrics, TextMeasurer, WordWidths,
};

pub use mask::{Mask, MaskSet, MASK_CLEARANCE};
