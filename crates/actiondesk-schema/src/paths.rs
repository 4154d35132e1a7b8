//! Schema file path resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a schema override file.
pub const SCHEMA_ENV_VAR: &str = "ACTIONDESK_SCHEMA_FILE";

/// Resolve the schema override file, if any.
///
/// Resolution order:
/// 1. An explicitly supplied path (e.g. `--schema-file`)
/// 2. `ACTIONDESK_SCHEMA_FILE` environment variable
pub fn resolve_schema_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_from(explicit, std::env::var_os(SCHEMA_ENV_VAR))
}

fn resolve_from(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
