//! Unibound - Unicode text boundary analysis and bidirectional run resolution
//!
//! Two independent resolvers over a shared UTF-16 text buffer:
//!
//! - [`boundary::BreakIterator`] walks character (grapheme cluster) or
//!   line-break boundaries of a bound text, forward or backward.
//! - [`bidi::BidiContext`] resolves the embedding levels of one paragraph
//!   and exposes its directional runs.
//!
//! Rule data must be loaded once per process with [`rules::load`] before
//! any locale-aware constructor is used.

pub mod bidi;
pub mod boundary;
pub mod constants;
pub mod error;
pub mod locale;
pub mod rules;
pub mod text;
