/*!
 * ASCII tree diagram of a directory structure
 */

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::filter::PathFilter;
use crate::utils::base_name;

/// Title line heading every diagram
pub const TREE_TITLE: &str = "# Directory Structure:";

/// Connector prefix repeated once per depth level
const INDENT_UNIT: &str = "│   ";

/// Renders a names-only diagram of one or more roots.
///
/// Children are listed directories first, then files, each group sorted by
/// name. Content serialization deliberately does not share this ordering.
pub struct TreeRenderer {
    filter: PathFilter,
}

impl TreeRenderer {
    /// Create a renderer sharing the given filter
    pub fn new(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Render the diagram for the given roots.
    ///
    /// A root that cannot be `stat`ed aborts the whole call; read failures
    /// deeper in the tree surface as inline diagnostic lines instead.
    pub fn render(&self, roots: &[PathBuf]) -> Result<String> {
        let mut parts = vec![TREE_TITLE.to_string()];

        for root in roots {
            let metadata = fs::metadata(root)?;
            if metadata.is_dir() {
                parts.push(self.build_directory_tree(root, 0, &base_name(root)));
            } else {
                parts.push(format!("├── {}", base_name(root)));
            }
        }

        Ok(parts.join("\n"))
    }

    /// Build the subtree rooted at `dir`, one line per visited entry
    fn build_directory_tree(&self, dir: &Path, depth: usize, name: &str) -> String {
        let indent = INDENT_UNIT.repeat(depth);
        let mut lines = vec![format!("{}├── {}/", indent, name)];

        match fs::read_dir(dir) {
            Ok(entries) => {
                let mut subdirs: Vec<(String, PathBuf)> = Vec::new();
                let mut files: Vec<String> = Vec::new();

                for entry in entries.flatten() {
                    let path = entry.path();
                    if self.filter.is_excluded(&path) {
                        continue;
                    }

                    let entry_name = entry.file_name().to_string_lossy().to_string();
                    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                    if is_dir {
                        subdirs.push((entry_name, path));
                    } else {
                        files.push(entry_name);
                    }
                }

                subdirs.sort_by(|a, b| compare_names(&a.0, &b.0));
                files.sort_by(|a, b| compare_names(a, b));

                for (entry_name, path) in &subdirs {
                    lines.push(self.build_directory_tree(path, depth + 1, entry_name));
                }
                for entry_name in &files {
                    lines.push(format!("{}{}├── {}", indent, INDENT_UNIT, entry_name));
                }
            }
            Err(e) => {
                // Diagnostic in place of the unreadable listing; siblings and
                // ancestors keep rendering.
                lines.push(format!(
                    "{}{}├── [Error reading directory: {}]",
                    indent, INDENT_UNIT, e
                ));
            }
        }

        lines.join("\n")
    }
}

/// Case-insensitive name ordering, raw byte order as tiebreak
fn compare_names(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
