use std::io::Write;

use actiondesk_schema::{SchemaError, SchemaRegistry};
use tempfile::NamedTempFile;

fn write_schema(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn embedded_action_overrides_snapshot() {
    let registry = SchemaRegistry::embedded().unwrap();
    insta::assert_json_snapshot!(registry.get("action_overrides").unwrap(), @r#"
    {
      "label": "Action Overrides",
      "columns": [
        "actionId",
        "enabled",
        "text"
      ]
    }
    "#);
}

#[test]
fn load_schema_file() {
    let file = write_schema(
        r#"
[tables.faq]
label = "FAQ Entries"
columns = ["question", "answer", "tags"]
"#,
    );
    let registry = SchemaRegistry::load(file.path()).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.label("faq"), "FAQ Entries");
    assert_eq!(registry.columns("faq").map(<[String]>::len), Some(3));
}

#[test]
fn load_configured_overlays_embedded_defaults() {
    let file = write_schema(
        r#"
[tables.clients]
columns = ["name", "email"]

[tables.faq]
columns = ["question", "answer"]
"#,
    );
    let embedded = SchemaRegistry::embedded().unwrap();
    let registry = SchemaRegistry::load_configured(Some(file.path())).unwrap();

    assert_eq!(registry.len(), embedded.len() + 1);
    assert_eq!(
        registry.columns("clients"),
        Some(["name".to_string(), "email".to_string()].as_slice())
    );
    assert_eq!(registry.get("quick_actions"), embedded.get("quick_actions"));
}

#[test]
fn load_missing_file_is_io_error() {
    let result = SchemaRegistry::load(std::path::Path::new("/no/such/schema.toml"));
    assert!(matches!(result, Err(SchemaError::Io { .. })));
}

#[test]
fn iteration_is_sorted_by_table() {
    let registry = SchemaRegistry::embedded().unwrap();
    let tables: Vec<&str> = registry.iter().map(|(table, _)| table).collect();
    let mut sorted = tables.clone();
    sorted.sort_unstable();
    assert_eq!(tables, sorted);
}
