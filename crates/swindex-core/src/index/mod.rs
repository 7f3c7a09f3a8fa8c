//! Index module: Declaration data model and persistence
//!
//! Defines the fixed-shape index produced by a run and the
//! writer that serializes it to `index.json`.

pub mod model;
pub mod writer;
