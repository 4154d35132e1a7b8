//! Upload gating.
//!
//! Combines the preview and the column validation into the decision the
//! dashboard shows an operator: refuse the file, warn about a column
//! mismatch, or offer the import.

use std::path::Path;

use actiondesk_ingest::{
    CsvPreview, IngestError, ParseOptions, ParsedRow, is_csv_file_name,
    parse_preview_with_options, read_preview_file,
};
use actiondesk_schema::SchemaRegistry;
use serde::{Deserialize, Serialize};

use crate::columns::{ColumnValidation, validate_for_table};

/// Number of preview rows shown to the operator.
pub const DISPLAY_ROW_LIMIT: usize = 8;

/// Why an upload was refused before column validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// File name does not end in `.csv`.
    NotCsv,
    /// No well-formed data rows were found.
    NoDataRows,
    /// Header row repeats a column (strict header mode).
    DuplicateHeader { name: String },
    /// The file could not be read.
    Unreadable { message: String },
}

impl RejectReason {
    /// Operator-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::NotCsv => "Please select a .csv file".to_string(),
            Self::NoDataRows => "No data rows found in the CSV".to_string(),
            Self::DuplicateHeader { name } => {
                format!("Column '{name}' appears more than once in the header row")
            }
            Self::Unreadable { message } => format!("Could not read the file: {message}"),
        }
    }
}

/// Gate decision for an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadStatus {
    /// Import may proceed.
    Ready,
    /// Columns differ too much from the expected schema.
    Mismatch,
    /// File refused before column validation.
    Rejected { reason: RejectReason },
}

/// Everything the dashboard needs to render an upload check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCheck {
    /// Target table identifier.
    pub table: String,
    /// Gate decision.
    pub status: UploadStatus,
    /// Parsed preview, absent when the file was refused.
    pub preview: Option<CsvPreview>,
    /// Column validation, absent when the file was refused.
    pub validation: Option<ColumnValidation>,
}

impl UploadCheck {
    fn rejected(table: &str, reason: RejectReason) -> Self {
        tracing::warn!(table = %table, reason = %reason.message(), "upload refused");
        Self {
            table: table.to_string(),
            status: UploadStatus::Rejected { reason },
            preview: None,
            validation: None,
        }
    }

    /// Whether the import action should be offered.
    pub fn can_import(&self) -> bool {
        self.status == UploadStatus::Ready
    }

    /// Rows that an import would write.
    pub fn import_rows(&self) -> usize {
        self.preview.as_ref().map_or(0, |p| p.rows.len())
    }

    /// Data lines detected in the whole file.
    pub fn detected_rows(&self) -> usize {
        self.preview.as_ref().map_or(0, |p| p.total_rows)
    }

    /// Preview rows shown to the operator.
    pub fn display_rows(&self) -> &[ParsedRow] {
        match &self.preview {
            Some(preview) => &preview.rows[..preview.rows.len().min(DISPLAY_ROW_LIMIT)],
            None => &[],
        }
    }

    /// Detected rows that are not displayed.
    pub fn hidden_rows(&self) -> usize {
        self.detected_rows().saturating_sub(self.display_rows().len())
    }

    /// Operator-facing status line.
    pub fn message(&self) -> String {
        match &self.status {
            UploadStatus::Ready => {
                let columns = self.preview.as_ref().map_or(0, CsvPreview::column_count);
                format!("{} rows detected, {} columns", self.detected_rows(), columns)
            }
            UploadStatus::Mismatch => {
                let mut parts = vec!["Column mismatch".to_string()];
                if let Some(validation) = &self.validation {
                    if !validation.missing.is_empty() {
                        parts.push(format!("missing: {}", validation.missing.join(", ")));
                    }
                    if !validation.unexpected.is_empty() {
                        parts.push(format!("unexpected: {}", validation.unexpected.join(", ")));
                    }
                }
                parts.join("; ")
            }
            UploadStatus::Rejected { reason } => reason.message(),
        }
    }

    /// Summary for rows beyond the display window, if any.
    pub fn hidden_rows_note(&self) -> Option<String> {
        let hidden = self.hidden_rows();
        (hidden > 0).then(|| {
            format!(
                "Showing first {} of {} rows ({} more rows not shown)",
                self.display_rows().len(),
                self.detected_rows(),
                hidden
            )
        })
    }
}

/// Check uploaded CSV text for `table`.
pub fn check_upload(
    file_name: &str,
    text: &str,
    table: &str,
    registry: &SchemaRegistry,
    options: &ParseOptions,
) -> UploadCheck {
    if !is_csv_file_name(file_name) {
        return UploadCheck::rejected(table, RejectReason::NotCsv);
    }
    gate(table, parse_preview_with_options(text, options), registry)
}

/// Check an upload file on disk for `table`.
pub fn check_upload_file(
    path: &Path,
    table: &str,
    registry: &SchemaRegistry,
    options: &ParseOptions,
) -> UploadCheck {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    if !is_csv_file_name(file_name) {
        return UploadCheck::rejected(table, RejectReason::NotCsv);
    }
    gate(table, read_preview_file(path, options), registry)
}

fn gate(
    table: &str,
    parsed: actiondesk_ingest::Result<CsvPreview>,
    registry: &SchemaRegistry,
) -> UploadCheck {
    let preview = match parsed {
        Ok(preview) => preview,
        Err(IngestError::DuplicateHeader { name }) => {
            return UploadCheck::rejected(table, RejectReason::DuplicateHeader { name });
        }
        Err(err) => {
            return UploadCheck::rejected(
                table,
                RejectReason::Unreadable {
                    message: err.to_string(),
                },
            );
        }
    };

    if preview.is_empty() {
        return UploadCheck::rejected(table, RejectReason::NoDataRows);
    }

    let validation = validate_for_table(&preview.headers, table, registry);
    let status = if validation.valid {
        UploadStatus::Ready
    } else {
        UploadStatus::Mismatch
    };

    tracing::info!(
        table = %table,
        rows = preview.rows.len(),
        total_rows = preview.total_rows,
        skipped_rows = preview.skipped_rows,
        ready = validation.valid,
        "upload checked"
    );

    UploadCheck {
        table: table.to_string(),
        status,
        preview: Some(preview),
        validation: Some(validation),
    }
}
