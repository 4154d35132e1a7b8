use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use actiondesk_ingest::CsvPreview;
use actiondesk_schema::SchemaRegistry;
use actiondesk_validate::{ColumnValidation, UploadCheck, UploadStatus};

/// Placeholder shown for empty cells.
const EMPTY_CELL: &str = "—";

pub fn print_check(check: &UploadCheck, registry: &SchemaRegistry) {
    println!(
        "Upload: {} ({})",
        registry.label(&check.table),
        check.table
    );
    match registry.columns(&check.table) {
        Some(columns) => println!("Expected columns: {}", columns.join(", ")),
        None => println!("Expected columns: (not registered, column check skipped)"),
    }
    println!("{}", status_line(check));

    if let Some(validation) = &check.validation
        && check.status == UploadStatus::Mismatch
    {
        println!("{}", mismatch_table(validation));
        return;
    }

    if let Some(validation) = &check.validation
        && let Some(note) = extra_columns_note(validation)
    {
        println!("{note}");
    }
    if let Some(table) = preview_table(check) {
        println!("{table}");
    }
    if let Some(note) = check.hidden_rows_note() {
        println!("{note}");
    }
    if let Some(preview) = &check.preview
        && let Some(warning) = skipped_rows_warning(preview)
    {
        eprintln!("{warning}");
    }
}

pub fn print_tables(registry: &SchemaRegistry) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Label"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    for (name, schema) in registry.iter() {
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(schema.label.as_deref().unwrap_or("-")),
            Cell::new(schema.columns.join(", ")),
        ]);
    }
    println!("{table}");
}

/// One-line decision summary.
pub fn status_line(check: &UploadCheck) -> String {
    let tag = match check.status {
        UploadStatus::Ready => format!("Ready to import {} rows", check.import_rows()),
        UploadStatus::Mismatch => "Column mismatch".to_string(),
        UploadStatus::Rejected { .. } => "Rejected".to_string(),
    };
    format!("{tag}: {}", check.message())
}

/// Columns accepted despite not matching the schema exactly.
pub fn extra_columns_note(validation: &ColumnValidation) -> Option<String> {
    if !validation.valid || validation.is_exact() {
        return None;
    }
    let mut parts = Vec::new();
    if !validation.missing.is_empty() {
        parts.push(format!("missing {}", validation.missing.join(", ")));
    }
    if !validation.unexpected.is_empty() {
        parts.push(format!("ignored {}", validation.unexpected.join(", ")));
    }
    Some(format!("Columns within tolerance: {}", parts.join("; ")))
}

/// Warning for ragged rows dropped inside the scan window.
pub fn skipped_rows_warning(preview: &CsvPreview) -> Option<String> {
    if preview.skipped_rows == 0 {
        return None;
    }
    let mut warning = format!(
        "warning: {} row(s) with the wrong number of fields were skipped",
        preview.skipped_rows
    );
    let unscanned = preview.unscanned_rows();
    if unscanned > 0 {
        warning.push_str(&format!(" ({unscanned} more rows were not scanned)"));
    }
    Some(warning)
}

/// Missing/unexpected columns side by side.
pub fn mismatch_table(validation: &ColumnValidation) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Missing"), header_cell("Unexpected")]);
    apply_table_style(&mut table);
    let rows = validation.missing.len().max(validation.unexpected.len());
    for idx in 0..rows {
        table.add_row(vec![
            column_cell(validation.missing.get(idx), Color::Red),
            column_cell(validation.unexpected.get(idx), Color::Yellow),
        ]);
    }
    table
}

/// Preview of the displayed rows, numbered from 1.
pub fn preview_table(check: &UploadCheck) -> Option<Table> {
    let preview = check.preview.as_ref()?;
    let rows = check.display_rows();
    if rows.is_empty() {
        return None;
    }
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(preview.headers.iter().map(|h| header_cell(h)));
    table.set_header(header);
    apply_preview_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (idx, row) in rows.iter().enumerate() {
        let mut cells = vec![dim_cell(idx + 1)];
        cells.extend(preview.row_values(row).into_iter().map(value_cell));
        table.add_row(cells);
    }
    Some(table)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn column_cell(name: Option<&String>, color: Color) -> Cell {
    match name {
        Some(name) => Cell::new(name).fg(color),
        None => dim_cell(""),
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell(EMPTY_CELL)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
