//! Registry of expected columns keyed by table identifier.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::embedded::{EMBEDDED_ORIGIN, EXPECTED_HEADERS_TOML};
use crate::error::{Result, SchemaError};
use crate::paths::resolve_schema_path;

/// Expected columns for one target table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Human-readable table name for operator messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Column names in canonical order.
    pub columns: Vec<String>,
}

impl TableSchema {
    /// Create a schema from column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// On-disk shape of a schema file.
#[derive(Debug, Default, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    tables: BTreeMap<String, TableSchema>,
}

/// Expected schemas indexed by table identifier.
///
/// Unknown tables have no entry; callers treat that as "unchecked".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    tables: BTreeMap<String, TableSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Registry holding the compiled-in default tables.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EXPECTED_HEADERS_TOML, Path::new(EMBEDDED_ORIGIN))
    }

    /// Parse a registry from TOML text; `origin` is used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let file: SchemaFile = toml::from_str(text).map_err(|source| SchemaError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;

        for (table, schema) in &file.tables {
            check_columns(table, schema, origin)?;
        }

        Ok(Self {
            tables: file.tables,
        })
    }

    /// Load a registry from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml_str(&text, path)?;
        tracing::debug!(
            path = %path.display(),
            tables = registry.len(),
            "loaded schema file"
        );
        Ok(registry)
    }

    /// Embedded defaults overlaid with the resolved override file, if any.
    ///
    /// See [`resolve_schema_path`] for how the override file is found.
    pub fn load_configured(explicit: Option<&Path>) -> Result<Self> {
        let mut registry = Self::embedded()?;
        if let Some(path) = resolve_schema_path(explicit) {
            registry.merge(Self::load(&path)?);
        }
        Ok(registry)
    }

    /// Overlay another registry; its tables replace same-named entries.
    pub fn merge(&mut self, other: SchemaRegistry) {
        for (table, schema) in other.tables {
            if self.tables.contains_key(&table) {
                tracing::debug!(table = %table, "schema override replaces default");
            }
            self.tables.insert(table, schema);
        }
    }

    /// Insert or replace a table schema.
    pub fn insert(&mut self, table: impl Into<String>, schema: TableSchema) {
        self.tables.insert(table.into(), schema);
    }

    /// Get the schema for a table.
    pub fn get(&self, table: &str) -> Option<&TableSchema> {
        self.tables.get(table)
    }

    /// Expected columns for a table, if one is registered.
    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.get(table).map(|schema| schema.columns.as_slice())
    }

    /// Display label for a table, falling back to the identifier.
    pub fn label<'a>(&'a self, table: &'a str) -> &'a str {
        self.get(table)
            .and_then(|schema| schema.label.as_deref())
            .unwrap_or(table)
    }

    /// Iterate over tables in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableSchema)> {
        self.tables
            .iter()
            .map(|(table, schema)| (table.as_str(), schema))
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn check_columns(table: &str, schema: &TableSchema, origin: &Path) -> Result<()> {
    if schema.columns.is_empty() {
        return Err(SchemaError::EmptyColumns {
            table: table.to_string(),
            path: PathBuf::from(origin),
        });
    }
    let mut seen = BTreeSet::new();
    for column in &schema.columns {
        if !seen.insert(column.trim().to_lowercase()) {
            return Err(SchemaError::DuplicateColumn {
                table: table.to_string(),
                column: column.clone(),
                path: PathBuf::from(origin),
            });
        }
    }
    Ok(())
}
