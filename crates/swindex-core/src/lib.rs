//! swindex-core: Core library for pattern-based declaration indexing
//!
//! Scans Swift source trees with a small set of textual patterns and
//! records type declarations, their members and named constants in a
//! JSON index for lookup and navigation tooling.
//!
//! This is not a parser. Matching is purely textual, so comments, string
//! literals and multi-line declarations can produce spurious or partial
//! entries.

pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod run;
pub mod scanner;

// Re-export commonly used types
pub use config::IndexerConfig;
pub use error::IndexError;
pub use extract::{ExtractStats, Extractor, MemberScope};
pub use index::model::{Category, DeclarationRecord, Index};
pub use index::writer::{read_index, write_index};
pub use run::{Indexer, RunSummary, run};
pub use scanner::{DiscoveredFile, Scanner};
