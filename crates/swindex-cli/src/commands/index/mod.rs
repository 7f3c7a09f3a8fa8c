//! Index command: Index a source tree and write `index.json`

use std::path::PathBuf;

use anyhow::{Context, Result};
use swindex_core::{IndexerConfig, RunSummary};
use tracing::{info, warn};

/// Run the index command, returning the path the index was written to
///
/// # Errors
/// Returns an error if the root is not a directory or the index cannot be written.
pub fn run(config: &IndexerConfig) -> Result<PathBuf> {
    if !config.root.is_dir() {
        anyhow::bail!("Not a directory: {}", config.root.display());
    }
    info!("Indexing source tree: {}", config.root.display());

    let summary = swindex_core::run(config.clone())
        .with_context(|| format!("Failed to index {}", config.root.display()))?;

    log_summary(&summary);
    Ok(summary.output_path)
}

fn log_summary(summary: &RunSummary) {
    if summary.files_skipped > 0 {
        warn!(
            "{} files could not be read and were skipped",
            summary.files_skipped
        );
    }
    info!(
        "✓ Recorded {} declarations from {} files",
        summary.declarations.total(),
        summary.files_indexed
    );
}

#[cfg(test)]
mod tests;
