//! Error types for expected-schema loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading expected schemas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Failed to read a schema file.
    #[error("failed to read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema file is not valid TOML or has the wrong shape.
    #[error("failed to parse schema file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A table lists no columns.
    #[error("table '{table}' in {path} has no columns")]
    EmptyColumns { table: String, path: PathBuf },

    /// A table lists the same column twice (after normalization).
    #[error("table '{table}' in {path} lists column '{column}' more than once")]
    DuplicateColumn {
        table: String,
        column: String,
        path: PathBuf,
    },
}

/// Result type for schema loading operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
