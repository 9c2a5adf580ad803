//! Error types for the venuelint library.
//!
//! Only infrastructure-level failures are surfaced here: a missing page
//! directory, an unreadable file, an unparseable venue record file. Content
//! violations are never errors; they come back as [`crate::Finding`]s from a
//! successful run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for venuelint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for venuelint operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The venue record file could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The page directory does not exist or contains no pages.
    #[error("No pages found under {}", .0.display())]
    EmptyCorpus(PathBuf),

    /// Two venue records share the same slug.
    #[error("Duplicate venue slug: {0}")]
    DuplicateSlug(String),

    /// Invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Required input file is missing.
    #[error("Missing required file: {}", .0.display())]
    MissingFile(PathBuf),
}
