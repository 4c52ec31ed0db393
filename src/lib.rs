/*!
 * TreeClip - Copy directory trees and file contents as one text blob
 *
 * This library serializes selected files or directory trees into a single
 * text representation (directory diagram plus file contents) suitable for
 * pasting into a text field.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod serializer;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use config::{Args, Config, OutputMode};
pub use error::{Result, TreeClipError};
pub use filter::{is_binary_extension, is_excluded, PathFilter};
pub use report::{CopyReport, FileReportInfo, ReportFormat, Reporter};
pub use serializer::{ContentSerializer, SerializeStatistics};
pub use tree::{TreeRenderer, TREE_TITLE};
pub use utils::{count_entries, format_file_size};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
