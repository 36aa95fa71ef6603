//! Flow - the paragraph column and the document that coordinates it.
//!
//! This is the caching layer between host mutations and the line breaker:
//! paragraphs remember what they were last laid out against and skip the
//! breaker when nothing they depend on moved.
//!
//! # Architecture
//!
//! ```text
//! DocumentFlow            ordered paragraphs + masks + options
//!      |
//! Paragraph               dirty check against last-layout snapshot
//!      |
//! break_lines(...)        only runs when the snapshot went stale
//! ```
//!
//! # Design Decisions
//!
//! - Heights flow strictly downward. A paragraph's origin is its
//!   predecessor's bottom plus the margin, so a height change translates the
//!   resolved suffix and leaves everything else untouched.
//! - Staleness is structural. A paragraph compares the mask geometry it last
//!   saw against the current set; an origin-only shift with no masks in play
//!   reuses segments verbatim.

mod document;
mod options;
mod paragraph;

pub use document::*;
pub use options::*;
pub use paragraph::*;
