use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use actiondesk_cli::summary::{print_check, print_tables};
use actiondesk_ingest::{DuplicateHeaders, ParseOptions};
use actiondesk_schema::SchemaRegistry;
use actiondesk_validate::{UploadCheck, check_upload_file};

use crate::cli::CheckArgs;

fn load_registry(schema_file: Option<&Path>) -> Result<SchemaRegistry> {
    SchemaRegistry::load_configured(schema_file).context("load expected schemas")
}

pub fn run_tables(schema_file: Option<&Path>) -> Result<()> {
    let registry = load_registry(schema_file)?;
    print_tables(&registry);
    Ok(())
}

pub fn run_check(args: &CheckArgs, schema_file: Option<&Path>) -> Result<UploadCheck> {
    let registry = load_registry(schema_file)?;
    let span = info_span!(
        "check",
        table = %args.table,
        file = %args.file.display()
    );
    let _guard = span.enter();

    let options = ParseOptions::default()
        .with_row_limit(args.row_limit)
        .with_duplicate_headers(if args.strict_headers {
            DuplicateHeaders::Reject
        } else {
            DuplicateHeaders::LastWins
        });

    let start = Instant::now();
    let check = check_upload_file(&args.file, &args.table, &registry, &options);
    info!(
        can_import = check.can_import(),
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&check).context("serialize check result")?;
        println!("{json}");
    } else {
        print_check(&check, &registry);
    }
    Ok(check)
}
