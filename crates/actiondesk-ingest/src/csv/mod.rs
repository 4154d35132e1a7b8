//! CSV tokenizing, previewing, and file reading.

mod line;
mod preview;
mod reader;

pub use line::{split_line, trim_field};
pub use preview::{
    CsvPreview, DuplicateHeaders, PREVIEW_ROW_LIMIT, ParseOptions, ParsedRow,
    find_duplicate_header, parse_preview, parse_preview_with_options,
};
pub use reader::{
    MAX_UPLOAD_BYTES, check_file_size, check_file_size_with_limit, is_csv_file_name,
    read_preview_file, validate_encoding,
};
