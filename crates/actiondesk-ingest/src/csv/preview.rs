//! Header extraction and bounded row sampling.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

use super::line::{split_line, trim_field};

/// Maximum number of candidate data lines examined for a preview.
pub const PREVIEW_ROW_LIMIT: usize = 50;

/// One data row keyed by column name.
pub type ParsedRow = BTreeMap<String, String>;

/// How repeated header names are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateHeaders {
    /// Later columns overwrite earlier ones with the same name.
    #[default]
    LastWins,
    /// Refuse the file when a header name repeats.
    Reject,
}

/// Options controlling preview parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Number of candidate data lines to examine, capped at
    /// [`PREVIEW_ROW_LIMIT`].
    pub row_limit: usize,
    /// Handling for repeated header names.
    pub duplicate_headers: DuplicateHeaders,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            row_limit: PREVIEW_ROW_LIMIT,
            duplicate_headers: DuplicateHeaders::default(),
        }
    }
}

impl ParseOptions {
    /// Set the candidate line limit. Values above [`PREVIEW_ROW_LIMIT`]
    /// are clamped; the limit can only shrink the window.
    #[must_use]
    pub fn with_row_limit(mut self, row_limit: usize) -> Self {
        self.row_limit = row_limit.min(PREVIEW_ROW_LIMIT);
        self
    }

    /// Set duplicate header handling.
    #[must_use]
    pub fn with_duplicate_headers(mut self, mode: DuplicateHeaders) -> Self {
        self.duplicate_headers = mode;
        self
    }
}

/// Header row plus a bounded sample of well-formed data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvPreview {
    /// Trimmed column names in file order.
    pub headers: Vec<String>,
    /// Retained rows; every key set equals the header set.
    pub rows: Vec<ParsedRow>,
    /// Non-blank data lines in the whole document.
    pub total_rows: usize,
    /// Ragged lines dropped inside the scan window.
    pub skipped_rows: usize,
}

impl CsvPreview {
    /// Returns true if no data rows were retained.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns in the header row.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Data lines beyond the scan window.
    pub fn unscanned_rows(&self) -> usize {
        self.total_rows
            .saturating_sub(self.rows.len() + self.skipped_rows)
    }

    /// Values of a row in header order; missing keys become empty strings.
    pub fn row_values<'a>(&'a self, row: &'a ParsedRow) -> Vec<&'a str> {
        self.headers
            .iter()
            .map(|h| row.get(h).map(String::as_str).unwrap_or(""))
            .collect()
    }
}

/// Parses CSV text into a header row and up to [`PREVIEW_ROW_LIMIT`] rows.
///
/// Blank lines are ignored, ragged lines are dropped and counted, and
/// repeated header names keep the last value. Never fails.
pub fn parse_preview(text: &str) -> CsvPreview {
    let lines = non_blank_lines(text);
    build_preview(&lines, PREVIEW_ROW_LIMIT)
}

/// Parses CSV text with explicit options.
///
/// Only [`DuplicateHeaders::Reject`] can produce an error.
pub fn parse_preview_with_options(text: &str, options: &ParseOptions) -> Result<CsvPreview> {
    let lines = non_blank_lines(text);
    let preview = build_preview(&lines, options.row_limit);

    if options.duplicate_headers == DuplicateHeaders::Reject
        && let Some(name) = find_duplicate_header(&preview.headers)
    {
        return Err(IngestError::DuplicateHeader {
            name: name.to_string(),
        });
    }

    Ok(preview)
}

/// Returns the first header name that appears more than once.
pub fn find_duplicate_header(headers: &[String]) -> Option<&str> {
    let mut seen = BTreeSet::new();
    headers
        .iter()
        .find(|h| !seen.insert(h.as_str()))
        .map(String::as_str)
}

/// Splits on `\n` (dropping a trailing `\r`) and keeps non-blank lines.
fn non_blank_lines(text: &str) -> Vec<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !trim_field(line).is_empty())
        .collect()
}

fn build_preview(lines: &[&str], row_limit: usize) -> CsvPreview {
    let Some((header_line, data_lines)) = lines.split_first() else {
        return CsvPreview::default();
    };

    let headers: Vec<String> = split_line(header_line)
        .iter()
        .map(|field| trim_field(field).to_string())
        .collect();
    let row_limit = row_limit.min(PREVIEW_ROW_LIMIT);

    let mut rows = Vec::new();
    let mut skipped_rows = 0usize;

    // The window counts candidate lines, not retained rows.
    for line in data_lines.iter().take(row_limit) {
        let fields = split_line(line);
        if fields.len() != headers.len() {
            skipped_rows += 1;
            continue;
        }
        let row: ParsedRow = headers
            .iter()
            .cloned()
            .zip(fields.iter().map(|value| trim_field(value).to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        total_rows = data_lines.len(),
        skipped_rows,
        "parsed CSV preview"
    );

    CsvPreview {
        headers,
        rows,
        total_rows: data_lines.len(),
        skipped_rows,
    }
}
