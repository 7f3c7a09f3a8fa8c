//! Scanner module: Source file discovery
//!
//! Walks a directory tree and yields every file carrying the
//! configured extension, in a stable order.

mod walker;

pub use walker::{DiscoveredFile, Scanner};
