/*!
 * Utility functions for treeclip
 */

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::filter::PathFilter;

/// Count the files a serialization pass will visit, for progress tracking.
///
/// Walks each root with the same filter the serializer applies, so the
/// progress bar length matches the number of `inc` calls.
pub fn count_entries(roots: &[PathBuf], filter: &PathFilter) -> u64 {
    let mut count = 0;

    for root in roots {
        // Roots are exempt from exclusion, matching the walkers: the filter
        // only ever applies to children.
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !filter.is_excluded(e.path()));

        for entry in walker.filter_map(Result::ok) {
            if entry.file_type().is_file() {
                count += 1;
            }
        }
    }

    count
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Display name for a root path.
///
/// Paths like `.` or `..` have no final component, so fall back to the
/// canonicalized path before giving up and using the path as written.
pub fn base_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }

    fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| path.display().to_string())
}
