//! Extract module: Pattern-based declaration extraction
//!
//! Finds declarations in raw file text with a fixed table of regular
//! expressions, collects member names for each one and records the
//! line of its opening keyword.

mod extractor;
mod lines;
mod patterns;
mod scope;

pub use extractor::{ExtractStats, Extractor};
pub use lines::LineIndex;
pub use scope::{MemberScope, braced_body_end};

#[cfg(test)]
mod tests;
