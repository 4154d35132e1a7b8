//! Expected column schemas for reference-data CSV uploads.
//!
//! Each target table has an ordered list of column names that an uploaded
//! file is compared against. The registry is built once, from the embedded
//! defaults plus an optional TOML override file, and is read-only after
//! that.
//!
//! # Schema File Format
//!
//! ```toml
//! [tables.quick_actions]
//! label = "Quick Actions"
//! columns = ["actionId", "label", "text", "enabled"]
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use actiondesk_schema::SchemaRegistry;
//!
//! let registry = SchemaRegistry::load_configured(None)?;
//! let columns = registry.columns("action_overrides");
//! ```

pub mod embedded;
pub mod error;
pub mod paths;
pub mod registry;

pub use crate::error::{Result, SchemaError};
pub use crate::paths::{SCHEMA_ENV_VAR, resolve_schema_path};
pub use crate::registry::{SchemaRegistry, TableSchema};
