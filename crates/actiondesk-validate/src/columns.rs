//! Column schema validation.
//!
//! Compares the header row of an upload against the expected columns for
//! its target table. The comparison ignores case and surrounding
//! whitespace, and accepts a file when it is "close enough":
//!
//! - at least half of the expected columns are present, and
//! - no more than two expected columns are missing.
//!
//! Extra columns are reported but never cause rejection on their own.

use actiondesk_schema::SchemaRegistry;
use serde::{Deserialize, Serialize};

use crate::util::NormalizedSet;

/// Acceptance thresholds for column validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TolerancePolicy {
    /// Fraction of expected columns that must be present (rounded up).
    pub min_match_ratio: f64,
    /// Maximum number of expected columns that may be missing.
    pub max_missing: usize,
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self {
            min_match_ratio: 0.5,
            max_missing: 2,
        }
    }
}

impl TolerancePolicy {
    /// Number of matches required for `expected` columns.
    pub fn required_matches(&self, expected: usize) -> usize {
        (expected as f64 * self.min_match_ratio).ceil() as usize
    }

    /// Whether a result with these counts is accepted.
    pub fn accepts(&self, expected: usize, missing: usize) -> bool {
        let matched = expected.saturating_sub(missing);
        matched >= self.required_matches(expected) && missing <= self.max_missing
    }
}

/// Outcome of comparing uploaded headers with an expected schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValidation {
    /// Whether the upload may proceed.
    pub valid: bool,
    /// Expected columns absent from the upload, in schema order.
    pub missing: Vec<String>,
    /// Uploaded columns absent from the schema, in file order.
    pub unexpected: Vec<String>,
}

impl ColumnValidation {
    /// Result for a table with no registered schema.
    pub fn unchecked() -> Self {
        Self {
            valid: true,
            missing: Vec::new(),
            unexpected: Vec::new(),
        }
    }

    /// True when the headers matched the schema exactly (up to normalization).
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Validate headers against an expected schema with the default policy.
///
/// `None` means no schema is registered and always validates.
pub fn validate_columns(csv_headers: &[String], expected: Option<&[String]>) -> ColumnValidation {
    validate_columns_with(csv_headers, expected, &TolerancePolicy::default())
}

/// Validate headers against an expected schema with an explicit policy.
pub fn validate_columns_with(
    csv_headers: &[String],
    expected: Option<&[String]>,
    policy: &TolerancePolicy,
) -> ColumnValidation {
    let Some(expected) = expected else {
        return ColumnValidation::unchecked();
    };

    let present = NormalizedSet::from_names(csv_headers);
    let known = NormalizedSet::from_names(expected);

    let missing: Vec<String> = expected
        .iter()
        .filter(|name| !present.contains(name))
        .cloned()
        .collect();
    let unexpected: Vec<String> = csv_headers
        .iter()
        .filter(|name| !known.contains(name))
        .cloned()
        .collect();

    ColumnValidation {
        valid: policy.accepts(expected.len(), missing.len()),
        missing,
        unexpected,
    }
}

/// Validate headers against the schema registered for `table`.
pub fn validate_for_table(
    csv_headers: &[String],
    table: &str,
    registry: &SchemaRegistry,
) -> ColumnValidation {
    let expected = registry.columns(table);
    if expected.is_none() {
        tracing::debug!(table = %table, "no expected schema registered, skipping column check");
    }

    let result = validate_columns(csv_headers, expected);
    if !result.valid {
        tracing::warn!(
            table = %table,
            missing = result.missing.len(),
            unexpected = result.unexpected.len(),
            "column mismatch"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_required_matches_rounds_up() {
        let policy = TolerancePolicy::default();
        assert_eq!(policy.required_matches(0), 0);
        assert_eq!(policy.required_matches(1), 1);
        assert_eq!(policy.required_matches(3), 2);
        assert_eq!(policy.required_matches(4), 2);
        assert_eq!(policy.required_matches(5), 3);
    }

    #[test]
    fn test_small_schema_needs_majority() {
        // 3 expected, 2 missing: missing cap holds but only 1 of 2 required matches.
        let expected = names(&["a", "b", "c"]);
        let result = validate_columns(&names(&["a"]), Some(expected.as_slice()));
        assert_eq!(result.missing, names(&["b", "c"]));
        assert!(!result.valid);
    }

    #[test]
    fn test_custom_policy() {
        let expected = names(&["a", "b", "c", "d"]);
        let strict = TolerancePolicy {
            min_match_ratio: 1.0,
            max_missing: 0,
        };
        let result =
            validate_columns_with(&names(&["a", "b", "c"]), Some(expected.as_slice()), &strict);
        assert!(!result.valid);

        let headers = names(&["D", "c", "b", "a"]);
        let result = validate_columns_with(&headers, Some(expected.as_slice()), &strict);
        assert!(result.valid);
        assert!(result.is_exact());
    }

    #[test]
    fn test_unknown_table_is_unchecked() {
        let registry = SchemaRegistry::new();
        let result = validate_for_table(&names(&["anything"]), "nope", &registry);
        assert_eq!(result, ColumnValidation::unchecked());
    }
}
