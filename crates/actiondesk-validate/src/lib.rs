//! Column validation and upload gating for reference-data CSV imports.
//!
//! This crate decides whether an uploaded CSV is close enough to the
//! expected schema of its target table to be imported.
//!
//! # Example
//!
//! ```ignore
//! use actiondesk_ingest::ParseOptions;
//! use actiondesk_schema::SchemaRegistry;
//! use actiondesk_validate::check_upload;
//!
//! let registry = SchemaRegistry::embedded()?;
//! let check = check_upload(
//!     "overrides.csv",
//!     "actionId,enabled,text\ngreet,true,Hi\n",
//!     "action_overrides",
//!     &registry,
//!     &ParseOptions::default(),
//! );
//! assert!(check.can_import());
//! ```

mod columns;
mod upload;
mod util;

// === Column Validation ===
pub use columns::{
    ColumnValidation, TolerancePolicy, validate_columns, validate_columns_with,
    validate_for_table,
};

// === Upload Gate ===
pub use upload::{
    DISPLAY_ROW_LIMIT, RejectReason, UploadCheck, UploadStatus, check_upload, check_upload_file,
};

// === Utilities ===
pub use util::{NormalizedSet, normalize_column};
