//! Global error handling for treeclip
//!
//! Invocation-level failures (missing roots, clipboard placement) surface
//! through this type and abort the run; traversal-level failures are
//! rendered inline in the output text instead and never reach it.

use std::io;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for treeclip operations
#[derive(Error, Debug)]
pub enum TreeClipError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Clipboard placement errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Root path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for treeclip operations
pub type Result<T> = std::result::Result<T, TreeClipError>;
