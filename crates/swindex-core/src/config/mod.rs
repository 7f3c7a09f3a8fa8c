//! Run configuration

use std::path::{Path, PathBuf};

use crate::extract::MemberScope;

/// File extension indexed when none is configured
pub const DEFAULT_EXTENSION: &str = "swift";

/// Directory under the root that receives the index
pub const DEFAULT_OUTPUT_DIR: &str = "index";

/// File name of the index
pub const DEFAULT_OUTPUT_FILE: &str = "index.json";

/// Configuration for one indexing run
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub root: PathBuf,
    /// Extension without the leading dot
    pub extension: String,
    pub output: Option<PathBuf>,
    pub member_scope: MemberScope,
    pub respect_gitignore: bool,
}

impl IndexerConfig {
    /// Create a configuration for the given root with default settings
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            output: None,
            member_scope: MemberScope::default(),
            respect_gitignore: false,
        }
    }

    /// Set the file extension to index. A leading `.` is ignored.
    #[must_use]
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        let extension = extension.as_ref();
        self.extension = extension.strip_prefix('.').unwrap_or(extension).to_string();
        self
    }

    /// Set an explicit output path
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the member scope
    #[must_use]
    pub const fn with_member_scope(mut self, scope: MemberScope) -> Self {
        self.member_scope = scope;
        self
    }

    /// Skip files excluded by `.gitignore` and friends
    #[must_use]
    pub const fn with_respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Where the index is written: the explicit output, or `<root>/index/index.json`
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| default_output_path(&self.root))
    }
}

/// Default index location for a root directory
#[must_use]
pub fn default_output_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_OUTPUT_DIR).join(DEFAULT_OUTPUT_FILE)
}
