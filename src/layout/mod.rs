//! Layout - measurement and obstacle-aware line breaking.
//!
//! Two halves:
//! - Metrics: the external measurement seam ([`TextMeasurer`]), the bundled
//!   fixed-pitch measurer, and per-paragraph width memoization
//! - Line breaker: the greedy word flow that routes text around masked spans
//!
//! # Architecture
//!
//! ```text
//! TextMeasurer::measure(word, style)      host font stack (or monospace)
//!          |
//! WordWidths::measure(text, ...)          once per distinct paragraph text
//!          |
//! break_lines(text, widths, ...)          every relayout, no re-measuring
//! ```

mod line_breaker;
mod metrics;

pub use line_breaker::*;
pub use metrics::*;
