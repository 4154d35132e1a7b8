//! Utility types for validation.

use std::collections::HashSet;

use actiondesk_ingest::trim_field;

/// Normalizes a column name for comparison: trimmed and lowercased.
pub fn normalize_column(name: &str) -> String {
    trim_field(name).to_lowercase()
}

/// A set of column names compared after [`normalize_column`].
///
/// Used for matching uploaded headers against expected columns, which
/// should ignore case and surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct NormalizedSet {
    inner: HashSet<String>,
}

impl NormalizedSet {
    /// Create a set from an iterator of strings.
    pub fn from_names<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            inner: iter
                .into_iter()
                .map(|s| normalize_column(s.as_ref()))
                .collect(),
        }
    }

    /// Check if the set contains a value after normalization.
    pub fn contains(&self, value: impl AsRef<str>) -> bool {
        self.inner.contains(&normalize_column(value.as_ref()))
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_set() {
        let set = NormalizedSet::from_names(["actionId", " Text ", "ENABLED"]);

        assert!(set.contains("actionid"));
        assert!(set.contains("ACTIONID "));
        assert!(set.contains("text"));
        assert!(set.contains("  enabled"));
        assert!(!set.contains("action id"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_normalized_set_collapses_variants() {
        let set = NormalizedSet::from_names(["Name", "name ", "NAME"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_normalize_column_strips_bom() {
        assert_eq!(normalize_column("\u{feff}ActionId "), "actionid");
    }
}
