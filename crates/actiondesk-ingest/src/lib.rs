//! CSV intake for reference-data uploads.
//!
//! This crate turns the raw text of an uploaded CSV file into a header row
//! and a bounded sample of data rows that the dashboard can preview and hand
//! to the column validator.
//!
//! # Features
//!
//! - **Line Tokenizer**: Split a single line on unquoted commas
//! - **Row Preview**: Sample up to 50 well-formed rows, dropping ragged lines
//! - **File Intake**: Read an upload from disk with size and encoding checks
//!
//! # Example
//!
//! ```ignore
//! use actiondesk_ingest::{parse_preview, split_line};
//!
//! let fields = split_line("a,\"b,c\",d");
//! assert_eq!(fields, vec!["a", "b,c", "d"]);
//!
//! let preview = parse_preview("actionId,text\ngreet,Hello there\n");
//! assert_eq!(preview.rows.len(), 1);
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Tokenizer ===
pub use csv::{split_line, trim_field};

// === Row Preview ===
pub use csv::{
    CsvPreview, DuplicateHeaders, PREVIEW_ROW_LIMIT, ParseOptions, ParsedRow,
    find_duplicate_header, parse_preview, parse_preview_with_options,
};

// === File Intake ===
pub use csv::{
    MAX_UPLOAD_BYTES, check_file_size, check_file_size_with_limit, is_csv_file_name,
    read_preview_file, validate_encoding,
};
