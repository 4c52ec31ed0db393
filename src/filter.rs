/*!
 * Path filtering and binary-file classification
 */

use std::path::Path;

use glob_match::glob_match;
use once_cell::sync::Lazy;

/// Default entry names skipped during traversal
pub static DEFAULT_EXCLUDE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Dependencies
        "node_modules",
        "vendor",
        ".yarn",
        // Python
        "__pycache__",
        ".venv",
        "venv",
        "env",
        ".env",
        ".pytest_cache",
        ".mypy_cache",
        ".ruff_cache",
        // Version control
        ".git",
        // IDEs & Editors
        ".vs",
        ".vscode",
        ".idea",
        // Build & Dist
        "build",
        "dist",
        "out",
        "target",
        "bin",
        "obj",
        "debug",
        ".next",
        ".svelte-kit",
        ".nuxt",
        ".gradle",
        // Coverage & Caches
        "coverage",
        ".cache",
        ".parcel-cache",
        // OS files
        ".DS_Store",
        "Thumbs.db",
        // Infrastructure
        ".terraform",
        // Logs & Temp
        "logs",
        "tmp",
        "temp",
    ]
});

/// File extensions whose content is never read, only flagged
pub static BINARY_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "exe", "dll", "obj", "bin", "dat", "png", "jpg", "jpeg", "gif", "bmp", "ico", "pdf",
        "doc", "docx", "ppt", "pptx", "xls", "xlsx", "zip", "rar", "7z", "tar", "gz", "mp3",
        "mp4", "avi", "mov", "wav", "flac", "o", "so", "dylib",
    ]
});

/// Decides which filesystem entries are skipped during traversal.
///
/// Applied identically by the tree renderer and the content serializer,
/// so excluded entries never appear in either output.
#[derive(Debug, Clone)]
pub struct PathFilter {
    /// Entry names excluded when they appear as a complete path segment
    exclude_names: Vec<String>,
    /// User-supplied glob patterns, matched against the final segment
    extra_patterns: Vec<String>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PathFilter {
    /// Create a filter over the default exclusion list plus extra glob patterns
    pub fn new(extra_patterns: Vec<String>) -> Self {
        Self {
            exclude_names: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            extra_patterns,
        }
    }

    /// Create a filter with a custom exclusion list, replacing the default
    pub fn with_names(names: Vec<String>) -> Self {
        Self {
            exclude_names: names,
            extra_patterns: Vec::new(),
        }
    }

    /// Check whether a path should be skipped.
    ///
    /// An excluded name must match a complete path segment (the path split on
    /// both `/` and `\`). A segment merely containing the name does not match,
    /// so a directory named `build-tools` survives the `build` pattern.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        let mut segments = text.split(['/', '\\']).filter(|s| !s.is_empty());

        if segments.any(|segment| self.exclude_names.iter().any(|name| name == segment)) {
            return true;
        }

        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        self.extra_patterns
            .iter()
            .any(|pattern| glob_match(pattern, &file_name))
    }

    /// Check whether a file is classified as binary by its extension.
    ///
    /// Classification is by name only, case-insensitive; the file is never
    /// opened.
    pub fn is_binary_extension(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                BINARY_EXTENSIONS.iter().any(|&b| b == ext)
            }
            None => false,
        }
    }
}

/// Check a path against the default exclusion list
pub fn is_excluded(path: &Path) -> bool {
    static DEFAULT: Lazy<PathFilter> = Lazy::new(PathFilter::default);
    DEFAULT.is_excluded(path)
}

/// Check a path against the default binary-extension set
pub fn is_binary_extension(path: &Path) -> bool {
    static DEFAULT: Lazy<PathFilter> = Lazy::new(PathFilter::default);
    DEFAULT.is_binary_extension(path)
}
