//! Embedded default schemas.
//!
//! The default table set is compiled in with `include_str!()` so the
//! registry works without any files on disk.

/// Path label used in errors for the embedded schema file.
pub const EMBEDDED_ORIGIN: &str = "<embedded>/expected_headers.toml";

/// Default expected headers for the reference-data tables.
pub const EXPECTED_HEADERS_TOML: &str = include_str!("../data/expected_headers.toml");
