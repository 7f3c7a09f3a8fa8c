//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use swindex_core::config::{DEFAULT_EXTENSION, IndexerConfig};
use swindex_core::MemberScope;

#[derive(Debug, Parser)]
#[command(name = "swindex")]
#[command(author, version, about = "Index declarations in a Swift source tree", long_about = None)]
pub struct Cli {
    /// Root directory to index
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extension to index
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Output file [default: <PATH>/index/index.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only collect members between a declaration's own braces
    #[arg(long)]
    pub scoped_members: bool,

    /// Skip files excluded by .gitignore
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration from the parsed arguments
    #[must_use]
    pub fn to_config(&self) -> IndexerConfig {
        let scope = if self.scoped_members {
            MemberScope::Braced
        } else {
            MemberScope::ToEndOfFile
        };

        let mut config = IndexerConfig::new(&self.path)
            .with_extension(&self.extension)
            .with_member_scope(scope)
            .with_respect_gitignore(self.respect_gitignore);
        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        config
    }
}
