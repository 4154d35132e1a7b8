//! CLI argument definitions for actiondesk.

use std::path::PathBuf;

use actiondesk_ingest::PREVIEW_ROW_LIMIT;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "actiondesk",
    version,
    about = "Preview and check reference-data CSV uploads",
    long_about = "Preview a reference-data CSV upload and check its columns against\n\
                  the expected schema of the target table before importing it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Schema file overriding the built-in expected columns.
    ///
    /// Falls back to the ACTIONDESK_SCHEMA_FILE environment variable.
    #[arg(long = "schema-file", value_name = "PATH", global = true)]
    pub schema_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview a CSV upload and check its columns for a table.
    Check(CheckArgs),

    /// List tables with registered expected columns.
    Tables,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target table identifier.
    #[arg(long = "table", short = 't', value_name = "TABLE")]
    pub table: String,

    /// Print the check result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Refuse files whose header row repeats a column name.
    #[arg(long = "strict-headers")]
    pub strict_headers: bool,

    /// Number of data lines to sample for the preview (at most 50).
    #[arg(
        long = "row-limit",
        value_name = "N",
        default_value_t = PREVIEW_ROW_LIMIT,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=PREVIEW_ROW_LIMIT as u64)
    )]
    pub row_limit: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
