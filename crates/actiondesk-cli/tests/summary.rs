//! Integration tests for the summary module.

use actiondesk_cli::summary::{
    extra_columns_note, mismatch_table, preview_table, skipped_rows_warning, status_line,
};
use actiondesk_ingest::{ParseOptions, parse_preview};
use actiondesk_schema::SchemaRegistry;
use actiondesk_validate::{UploadCheck, check_upload};

fn check(file_name: &str, text: &str, table: &str) -> UploadCheck {
    let registry = SchemaRegistry::embedded().unwrap();
    check_upload(file_name, text, table, &registry, &ParseOptions::default())
}

#[test]
fn test_status_line_ready() {
    let check = check(
        "overrides.csv",
        "actionId,enabled,text\ngreet,true,Hi\nbye,false,\n",
        "action_overrides",
    );
    insta::assert_snapshot!(status_line(&check), @"Ready to import 2 rows: 2 rows detected, 3 columns");
}

#[test]
fn test_status_line_rejected() {
    let check = check("overrides.txt", "", "action_overrides");
    insta::assert_snapshot!(status_line(&check), @"Rejected: Please select a .csv file");
}

#[test]
fn test_preview_table_contains_rows() {
    let check = check(
        "overrides.csv",
        "actionId,enabled,text\ngreet,true,Hi\nbye,false,\n",
        "action_overrides",
    );
    let rendered = preview_table(&check).unwrap().to_string();

    assert!(rendered.contains("actionId"));
    assert!(rendered.contains("greet"));
    assert!(rendered.contains("—"));
}

#[test]
fn test_preview_table_absent_when_rejected() {
    let check = check("overrides.csv", "actionId\n", "action_overrides");
    assert!(preview_table(&check).is_none());
}

#[test]
fn test_mismatch_table_lists_columns() {
    let check = check("clients.csv", "name,city\nJane,Oslo\n", "clients");
    let validation = check.validation.as_ref().unwrap();
    let rendered = mismatch_table(validation).to_string();

    assert!(rendered.contains("advocate"));
    assert!(rendered.contains("city"));
}

#[test]
fn test_extra_columns_note_within_tolerance() {
    let check = check(
        "overrides.csv",
        "actionId,text,notes
greet,Hi,x
",
        "action_overrides",
    );
    assert!(check.can_import());
    let validation = check.validation.as_ref().unwrap();
    insta::assert_snapshot!(
        extra_columns_note(validation).unwrap(),
        @"Columns within tolerance: missing enabled; ignored notes"
    );
}

#[test]
fn test_extra_columns_note_absent_for_exact_match() {
    let check = check(
        "overrides.csv",
        "actionId,enabled,text
greet,true,Hi
",
        "action_overrides",
    );
    assert!(extra_columns_note(check.validation.as_ref().unwrap()).is_none());
}

#[test]
fn test_skipped_rows_warning_reports_unscanned() {
    let mut text = String::from("a,b\nragged\n");
    for idx in 0..59 {
        text.push_str(&format!("{idx},{idx}\n"));
    }
    let preview = parse_preview(&text);

    insta::assert_snapshot!(
        skipped_rows_warning(&preview).unwrap(),
        @"warning: 1 row(s) with the wrong number of fields were skipped (10 more rows were not scanned)"
    );
    assert!(skipped_rows_warning(&parse_preview("a,b\n1,2\n")).is_none());
}
