/*!
 * Recursive serialization of file and directory contents
 */

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use indicatif::ProgressBar;

use crate::error::Result;
use crate::filter::PathFilter;
use crate::report::FileReportInfo;
use crate::utils::base_name;

/// Separator between top-level root blocks
pub const ROOT_SEPARATOR_WIDTH: usize = 80;

/// Separator between a directory's direct children
pub const CHILD_SEPARATOR_WIDTH: usize = 40;

/// Placeholder emitted for binary-extension files
pub const BINARY_PLACEHOLDER: &str = "[Binary file content not copied]";

/// Aggregate statistics collected while serializing
#[derive(Debug, Clone, Default)]
pub struct SerializeStatistics {
    /// Number of file blocks emitted
    pub files_processed: usize,
    /// Total number of lines read
    pub total_lines: usize,
    /// Total number of characters read
    pub total_chars: usize,
    /// Details for each file, keyed by the displayed path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Serializes file contents with structural markers.
///
/// Directory children are visited in native listing order; only the tree
/// diagram sorts. Each entry is fully processed, descendants included,
/// before the next sibling begins.
pub struct ContentSerializer {
    filter: PathFilter,
    progress: Arc<ProgressBar>,
    statistics: Mutex<SerializeStatistics>,
}

impl ContentSerializer {
    /// Create a new serializer
    pub fn new(filter: PathFilter, progress: Arc<ProgressBar>) -> Self {
        Self {
            filter,
            progress,
            statistics: Mutex::new(SerializeStatistics::default()),
        }
    }

    /// Get a snapshot of the collected statistics
    pub fn get_statistics(&self) -> SerializeStatistics {
        self.statistics.lock().unwrap().clone()
    }

    /// Serialize the given roots into a single text blob.
    ///
    /// Roots are joined by an 80-character `=` banner. A root that cannot be
    /// `stat`ed aborts the whole call; failures deeper in the tree are
    /// reported inline and never discard the rest of the output.
    pub fn serialize(&self, roots: &[PathBuf]) -> Result<String> {
        let mut blocks = Vec::new();

        for root in roots {
            let metadata = fs::metadata(root)?;
            if metadata.is_dir() {
                blocks.push(self.process_directory(root, &PathBuf::from(base_name(root))));
            } else {
                blocks.push(self.process_file(root));
            }
        }

        let separator = format!("\n\n{}\n\n", "=".repeat(ROOT_SEPARATOR_WIDTH));
        Ok(blocks.join(separator.as_str()))
    }

    /// Serialize a directory: header plus the joined blocks of its children
    fn process_directory(&self, dir: &Path, rel_path: &Path) -> String {
        let mut blocks = vec![format!("# DIRECTORY: {}", rel_path.display())];

        match fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries {
                    let entry = match entry {
                        Ok(entry) => entry,
                        Err(e) => {
                            blocks.push(format!("[Error reading directory: {}]", e));
                            continue;
                        }
                    };

                    let entry_path = entry.path();
                    if self.filter.is_excluded(&entry_path) {
                        continue;
                    }

                    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                    if is_dir {
                        let entry_rel = rel_path.join(entry.file_name());
                        blocks.push(self.process_directory(&entry_path, &entry_rel));
                    } else {
                        blocks.push(self.process_file(&entry_path));
                    }
                }
            }
            Err(e) => {
                blocks.push(format!("[Error reading directory: {}]", e));
            }
        }

        let separator = format!("\n\n{}\n\n", "-".repeat(CHILD_SEPARATOR_WIDTH));
        blocks.join(separator.as_str())
    }

    /// Serialize a single file block.
    ///
    /// Read failures replace the content with a bracketed message under the
    /// same header rather than propagating.
    fn process_file(&self, path: &Path) -> String {
        self.progress.inc(1);
        self.advertise_current_file(path);

        if self.filter.is_binary_extension(path) {
            self.record_file(path, 0, 0);
            return format!("# FILE: {}\n{}", path.display(), BINARY_PLACEHOLDER);
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                let lines = content.lines().count();
                let chars = content.chars().count();
                self.record_file(path, lines, chars);
                format!("# FILE: {}\n\n{}", path.display(), content)
            }
            Err(e) => {
                self.record_file(path, 0, 0);
                format!("# FILE: {}\n\n[Error reading file: {}]", path.display(), e)
            }
        }
    }

    /// Show the file currently being read, truncated to keep the bar tidy
    fn advertise_current_file(&self, path: &Path) {
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let display_name = if file_name.len() > 40 {
            format!("...{}", &file_name[file_name.len().saturating_sub(37)..])
        } else {
            file_name
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));
    }

    /// Record per-file statistics
    fn record_file(&self, path: &Path, lines: usize, chars: usize) {
        let mut stats = self.statistics.lock().unwrap();
        stats.files_processed += 1;
        stats.total_lines += lines;
        stats.total_chars += chars;
        stats
            .file_details
            .insert(path.display().to_string(), FileReportInfo { lines, chars });
    }
}
