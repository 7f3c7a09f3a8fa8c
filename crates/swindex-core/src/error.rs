//! Error types for indexing runs

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while indexing a source tree
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to write index to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse index {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IndexError {
    /// Whether this error only affects a single input file.
    ///
    /// Per-file errors are logged and skipped; everything else aborts the run.
    #[must_use]
    pub const fn is_per_file(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Decode { .. })
    }
}
