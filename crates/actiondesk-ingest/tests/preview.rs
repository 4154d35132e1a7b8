//! Integration tests for preview parsing.

use actiondesk_ingest::{
    CsvPreview, PREVIEW_ROW_LIMIT, ParseOptions, parse_preview, parse_preview_with_options,
    split_line,
};
use proptest::prelude::*;

fn numbered_rows(count: usize) -> String {
    let mut text = String::from("h1,h2,h3\n");
    for idx in 0..count {
        text.push_str(&format!("{idx},value {idx},x\n"));
    }
    text
}

/// Writes a preview back out as CSV with the `csv` crate.
fn to_csv(preview: &CsvPreview) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&preview.headers).unwrap();
    for row in &preview.rows {
        writer.write_record(preview.row_values(row)).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

#[test]
fn test_ragged_row_is_dropped() {
    let preview = parse_preview("a,b\n1,2,3\n4,5");

    assert_eq!(preview.rows.len(), 1);
    assert_eq!(preview.rows[0].get("a").map(String::as_str), Some("4"));
    assert_eq!(preview.rows[0].get("b").map(String::as_str), Some("5"));
    assert_eq!(preview.skipped_rows, 1);
    assert_eq!(preview.total_rows, 2);
}

#[test]
fn test_row_cap() {
    let preview = parse_preview(&numbered_rows(60));

    assert_eq!(preview.rows.len(), PREVIEW_ROW_LIMIT);
    assert_eq!(preview.total_rows, 60);
    assert_eq!(preview.unscanned_rows(), 10);
    assert_eq!(preview.rows[49]["h1"], "49");
}

#[test]
fn test_raised_row_limit_keeps_cap() {
    let options = ParseOptions::default().with_row_limit(200);
    let preview = parse_preview_with_options(&numbered_rows(200), &options).unwrap();

    assert_eq!(preview.rows.len(), PREVIEW_ROW_LIMIT);
    assert_eq!(preview.total_rows, 200);
    assert_eq!(preview.unscanned_rows(), 150);
}

#[test]
fn test_scan_window_counts_ragged_lines() {
    // Ragged lines inside the window use up candidate slots.
    let mut text = String::from("a,b\n");
    for _ in 0..5 {
        text.push_str("only-one-field\n");
    }
    for idx in 0..60 {
        text.push_str(&format!("{idx},{idx}\n"));
    }
    let preview = parse_preview(&text);

    assert_eq!(preview.skipped_rows, 5);
    assert_eq!(preview.rows.len(), PREVIEW_ROW_LIMIT - 5);
    assert_eq!(preview.total_rows, 65);
}

#[test]
fn test_split_line_quote_toggling() {
    assert_eq!(split_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
}

#[test]
fn test_preview_serializes_to_json() {
    let preview = parse_preview("actionId,enabled\ngreet,true\n");
    let json = serde_json::to_value(&preview).unwrap();

    assert_eq!(json["headers"], serde_json::json!(["actionId", "enabled"]));
    assert_eq!(json["rows"][0]["enabled"], "true");
    assert_eq!(json["total_rows"], 1);
    assert_eq!(json["skipped_rows"], 0);
}

proptest! {
    #[test]
    fn prop_row_count_is_capped(k in 0usize..=60) {
        let preview = parse_preview(&numbered_rows(k));
        prop_assert_eq!(preview.rows.len(), k.min(PREVIEW_ROW_LIMIT));
        prop_assert_eq!(preview.total_rows, k);
        for row in &preview.rows {
            prop_assert_eq!(row.len(), 3);
        }
    }

    #[test]
    fn prop_header_identity_round_trips(
        headers in prop::collection::btree_set("[A-Za-z][A-Za-z0-9_]{0,8}", 1..6),
        cells in prop::collection::vec("[a-z0-9 ]{0,6}[a-z0-9]", 0..4),
    ) {
        let headers: Vec<String> = headers.into_iter().collect();
        let mut text = headers.join(",");
        text.push('\n');
        for cell in &cells {
            text.push_str(&vec![cell.as_str(); headers.len()].join(","));
            text.push('\n');
        }

        let first = parse_preview(&text);
        let second = parse_preview(&to_csv(&first));

        prop_assert_eq!(&second.headers, &headers);
        prop_assert_eq!(second, first);
    }

    #[test]
    fn prop_parse_never_panics(text in "[a-c,\" \r\n]{0,80}") {
        let preview = parse_preview(&text);
        prop_assert!(preview.rows.len() <= PREVIEW_ROW_LIMIT);
        for row in &preview.rows {
            for key in row.keys() {
                prop_assert!(preview.headers.contains(key));
            }
        }
    }
}
