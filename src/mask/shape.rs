//! Mask shapes and their occlusion geometry.
//!
//! A mask is a movable shape sitting over the text column. For any horizontal
//! scanline it reports the span text must keep clear of, already widened by
//! the standoff margin.
//!
//! # Design Decisions
//!
//! - Shapes are a tagged enum, not a trait object: there are exactly two and
//!   the engine matches on them in one place.
//! - Identity is structural. `Mask` is `Copy` and derives `PartialEq`, so a
//!   geometry snapshot is a plain copy and "did it change" is `!=`.

use crate::types::Interval;

/// Standoff margin between mask geometry and text, in layout units.
/// Applied to both ends of every reported span.
pub const MASK_CLEARANCE: f32 = 5.0;

/// A movable shape that text must flow around.
///
/// Positions are top-left corners in content coordinates. For a circle,
/// `(x, y)` is the top-left of its bounding box, so the box is `2r x 2r`.
/// Dimensions are fixed at construction; only the position moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mask {
    Rect {
        width: f32,
        height: f32,
        x: f32,
        y: f32,
    },
    Circle {
        radius: f32,
        x: f32,
        y: f32,
    },
}

impl Mask {
    /// A rectangular mask with its top-left at `(x, y)`.
    pub const fn rect(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self::Rect {
            width,
            height,
            x,
            y,
        }
    }

    /// A circular mask whose bounding box has its top-left at `(x, y)`.
    pub const fn circle(radius: f32, x: f32, y: f32) -> Self {
        Self::Circle { radius, x, y }
    }

    /// The span this mask occludes on the scanline at `y`, widened by
    /// [`MASK_CLEARANCE`] per side. `None` when the scanline misses the shape.
    ///
    /// Vertical bounds are inclusive at both ends: a scanline exactly on the
    /// top or bottom edge still reports a span.
    pub fn horizontal_span_at(&self, y: f32) -> Option<Interval> {
        match *self {
            Self::Rect {
                width,
                height,
                x,
                y: top,
            } => {
                if y < top || y > top + height {
                    return None;
                }
                Some(Interval::new(
                    x - MASK_CLEARANCE,
                    x + width + MASK_CLEARANCE,
                ))
            }
            Self::Circle { radius, x, y: top } => {
                if y < top || y > top + 2.0 * radius {
                    return None;
                }
                // Chord of the circle at this scanline.
                let dy = top + radius - y;
                let dx = (radius * radius - dy * dy).sqrt();
                let cx = x + radius;
                Some(Interval::new(
                    cx - dx - MASK_CLEARANCE,
                    cx + dx + MASK_CLEARANCE,
                ))
            }
        }
    }

    /// Current top-left position.
    #[inline]
    pub fn position(&self) -> (f32, f32) {
        match *self {
            Self::Rect { x, y, .. } => (x, y),
            Self::Circle { x, y, .. } => (x, y),
        }
    }

    /// Move the shape. Dimensions never change after construction.
    pub fn set_position(&mut self, new_x: f32, new_y: f32) {
        match self {
            Self::Rect { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
            Self::Circle { x, y, .. } => {
                *x = new_x;
                *y = new_y;
            }
        }
    }
}
