/*!
 * Configuration handling for treeclip
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{Result, TreeClipError};

/// Which sections of the output to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tree diagram, separator banner, then serialized contents
    Combined,
    /// Tree diagram only
    TreeOnly,
    /// Serialized contents only
    ContentsOnly,
}

/// Command-line arguments for treeclip
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treeclip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy a directory tree diagram and file contents as one text blob",
    long_about = "Serializes files or directory trees into a single text blob (directory diagram plus file contents) and writes it to stdout or the system clipboard."
)]
pub struct Args {
    /// Files or directories to serialize
    #[clap(default_value = ".")]
    pub paths: Vec<String>,

    /// Emit only the directory structure diagram
    #[clap(long, conflicts_with = "contents_only")]
    pub tree_only: bool,

    /// Emit only the serialized file contents
    #[clap(long)]
    pub contents_only: bool,

    /// Comma-separated list of extra name patterns to exclude
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Copy output to system clipboard instead of writing to stdout
    #[clap(long, help = "Copy output to system clipboard")]
    pub clip: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root paths to serialize
    pub roots: Vec<PathBuf>,

    /// Sections of the output to produce
    pub mode: OutputMode,

    /// Extra exclusion patterns
    pub ignore_patterns: Vec<String>,

    /// Copy output to clipboard
    pub clip: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mode = if args.tree_only {
            OutputMode::TreeOnly
        } else if args.contents_only {
            OutputMode::ContentsOnly
        } else {
            OutputMode::Combined
        };

        Self {
            roots: args.paths.iter().map(PathBuf::from).collect(),
            mode,
            ignore_patterns: args.ignore_patterns,
            clip: args.clip,
        }
    }

    /// Validate the configuration.
    ///
    /// Missing roots abort the whole invocation before any output is
    /// produced; read failures below a valid root are handled inline during
    /// traversal instead.
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(TreeClipError::InvalidArgument(
                "No paths supplied".to_string(),
            ));
        }

        for root in &self.roots {
            if !root.exists() {
                return Err(TreeClipError::PathNotFound(root.display().to_string()));
            }
        }

        Ok(())
    }
}
