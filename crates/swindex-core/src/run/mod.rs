//! Indexing run: Walks a tree, extracts every file and writes the index
//!
//! The `Indexer` is the context object for one run. It owns the index
//! exclusively, so files are applied strictly in traversal order and the
//! last-written record for a name is the last one the walk reached.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::IndexerConfig;
use crate::error::IndexError;
use crate::extract::{ExtractStats, Extractor};
use crate::index::model::Index;
use crate::index::writer::write_index;
use crate::scanner::Scanner;

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_indexed: usize,
    pub files_skipped: usize,
    /// Records written, counting overwrites
    pub declarations: ExtractStats,
    pub output_path: PathBuf,
}

/// Per-run indexing context
#[derive(Debug)]
pub struct Indexer {
    config: IndexerConfig,
    extractor: Extractor,
    index: Index,
    summary: RunSummary,
}

impl Indexer {
    /// Create an indexer with an empty index
    #[must_use]
    pub fn new(config: IndexerConfig) -> Self {
        let extractor = Extractor::new().with_scope(config.member_scope);
        let summary = RunSummary {
            output_path: config.output_path(),
            ..RunSummary::default()
        };
        Self {
            config,
            extractor,
            index: Index::new(),
            summary,
        }
    }

    /// Read, decode and extract a single file into the index.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    /// The index is left unchanged in that case.
    pub fn index_file(&mut self, path: &Path) -> Result<ExtractStats, IndexError> {
        let text = read_source(path)?;
        let stats = self
            .extractor
            .process(&mut self.index, &path.display().to_string(), &text);
        self.summary.files_indexed += 1;
        self.summary.declarations.accumulate(&stats);
        Ok(stats)
    }

    /// Index every matching file under the configured root.
    ///
    /// Files that cannot be read or decoded are logged and skipped.
    ///
    /// # Errors
    /// Returns the first error that is not confined to a single file.
    pub fn index_directory(&mut self) -> Result<(), IndexError> {
        let scanner = Scanner::new(&self.config.root)
            .with_extension(&self.config.extension)
            .respect_gitignore(self.config.respect_gitignore);

        for file in scanner.scan() {
            let result = self.index_file(&file.path);
            self.handle_file_result(result, &file.path)?;
        }
        Ok(())
    }

    /// Count a per-file failure as skipped, or hand back anything else
    fn handle_file_result(
        &mut self,
        result: Result<ExtractStats, IndexError>,
        path: &Path,
    ) -> Result<(), IndexError> {
        match result {
            Ok(_) => Ok(()),
            Err(e) if e.is_per_file() => {
                warn!("Skipping {}: {}", path.display(), e);
                self.summary.files_skipped += 1;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Write the index to the configured output path
    ///
    /// # Errors
    /// Returns an error if the index cannot be written.
    pub fn write(&self) -> Result<&Path, IndexError> {
        write_index(&self.index, &self.summary.output_path)?;
        Ok(&self.summary.output_path)
    }

    /// The index built so far
    #[must_use]
    pub const fn index(&self) -> &Index {
        &self.index
    }

    /// Counters for the run so far
    #[must_use]
    pub const fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Consume the indexer, returning the index and the summary
    #[must_use]
    pub fn into_parts(self) -> (Index, RunSummary) {
        (self.index, self.summary)
    }
}

/// Run a full indexing pass: walk, extract, write.
///
/// # Errors
/// Returns an error if the index cannot be written or a failure reaches
/// beyond a single file. Per-file failures are logged and counted in the
/// summary instead.
pub fn run(config: IndexerConfig) -> Result<RunSummary, IndexError> {
    info!(
        "Indexing *.{} files under {}",
        config.extension,
        config.root.display()
    );

    let mut indexer = Indexer::new(config);
    indexer.index_directory()?;
    indexer.write()?;

    let (index, summary) = indexer.into_parts();
    info!(
        "✓ Indexed {} files ({} skipped): {} classes, {} protocols, {} extensions, {} enums, {} structs, {} constants",
        summary.files_indexed,
        summary.files_skipped,
        index.classes.len(),
        index.protocols.len(),
        index.extensions.len(),
        index.enums.len(),
        index.structs.len(),
        index.constants.len()
    );
    Ok(summary)
}

fn read_source(path: &Path) -> Result<String, IndexError> {
    let bytes = fs::read(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| IndexError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
