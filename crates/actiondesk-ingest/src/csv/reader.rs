//! Reading uploaded CSV files from disk.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

use super::preview::{CsvPreview, ParseOptions, parse_preview_with_options};

/// Maximum upload size accepted for previewing (10 MB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Returns true if the file name carries a `.csv` extension.
pub fn is_csv_file_name(name: &str) -> bool {
    name.ends_with(".csv")
}

/// Check file size against [`MAX_UPLOAD_BYTES`].
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_UPLOAD_BYTES)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 files by their byte order mark.
///
/// A UTF-8 BOM is fine; the preview parser strips it.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Reads an upload from disk and parses its preview.
pub fn read_preview_file(path: &Path, options: &ParseOptions) -> Result<CsvPreview> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "non-UTF-8",
            }
        } else {
            IngestError::open(path, e)
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "read upload file");
    parse_preview_with_options(&text, options)
}
