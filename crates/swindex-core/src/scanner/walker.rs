//! File walker: Discovers files in a directory tree

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::warn;

use crate::config::DEFAULT_EXTENSION;

/// A file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
}

/// Scanner for discovering source files in a directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    /// File name suffix, including the leading dot
    suffix: String,
    respect_gitignore: bool,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{DEFAULT_EXTENSION}"),
            respect_gitignore: false,
        }
    }

    /// Only yield files whose name ends with `.<extension>`
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.suffix = format!(".{extension}");
        self
    }

    /// Honour `.gitignore`, global git excludes and `.git/info/exclude`
    #[must_use]
    pub const fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Whether `path` carries the extension this scanner looks for
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
    }

    /// Scan the directory and return discovered files.
    ///
    /// Entries are sorted by file name within each directory so the
    /// traversal order is the same on every platform. Symlinks to files
    /// are yielded under the link's own path.
    pub fn scan(&self) -> impl Iterator<Item = DiscoveredFile> + '_ {
        WalkBuilder::new(&self.root)
            .standard_filters(false)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .map(ignore::DirEntry::into_path)
            // Resolves symlinks to files; linked directories are not descended
            .filter(|path| path.is_file() && self.matches(path))
            .map(|path| DiscoveredFile { path })
    }
}
