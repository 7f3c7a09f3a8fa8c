//! Index writer: JSON persistence for a finished index

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::model::Index;
use crate::error::IndexError;

/// Indentation used for the output file
const INDENT: &[u8] = b"    ";

/// Render the index as pretty-printed JSON with a trailing newline.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json_bytes(index: &Index) -> Result<Vec<u8>, IndexError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    index.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write the index to `path`.
///
/// The parent directory must already exist.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_index(index: &Index, path: &Path) -> Result<(), IndexError> {
    let json = to_json_bytes(index)?;
    fs::write(path, json).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a previously written index back from `path`.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid index.
pub fn read_index(path: &Path) -> Result<Index, IndexError> {
    let content = fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
