//! Error types for CSV intake.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an upload.
///
/// Parsing itself never fails; these cover the file boundary and the
/// opt-in strict header mode.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Upload file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured upload limit.
    #[error("file {path} is {size} bytes, limit is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File is not UTF-8 text.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Header Errors ===
    /// Header row repeats a column name (strict header mode only).
    #[error("duplicate column '{name}' in header row")]
    DuplicateHeader { name: String },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for intake operations.
pub type Result<T> = std::result::Result<T, IngestError>;
