//! Masks - movable shapes the text column flows around.
//!
//! Three layers:
//! - Shape: per-scanline occlusion geometry plus structural identity
//! - Set: the owned, ordered document collection with its change token
//! - Band: aggregation of per-mask spans into one line's interval list
//!
//! # Architecture
//!
//! ```text
//! Mask::horizontal_span_at(y)      one shape, one scanline
//!          |
//! occluded_spans_in_band(...)      all shapes, two samples, merge + crop
//!          |
//! MaskSet::occluded_spans(...)     what the line breaker actually calls
//! ```
//!
//! Everything here is plain data. Movement goes through [`MaskSet::move_to`],
//! which bumps the set revision exactly once per call; downstream layers
//! compare geometry snapshots instead of listening for callbacks.

mod band;
mod set;
mod shape;

pub use band::*;
pub use set::*;
pub use shape::*;
