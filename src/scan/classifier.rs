use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};

/// Decide whether a CSV file contains only a header row (or nothing at
/// all).
///
/// Opens the file read-only, consumes one record as the header and looks
/// for a second. A file that cannot be decoded as UTF-8 or tokenised as
/// delimited rows gets a warning on stderr and is treated as non-empty:
/// a file that cannot be proven empty is never a deletion candidate.
pub fn is_empty_csv(path: &Path, delimiter: u8) -> bool {
    match has_no_data_rows(path, delimiter) {
        Ok(empty) => empty,
        Err(err) => {
            log::warn!("Could not process {}: {err:#}", path.display());
            false
        }
    }
}

fn has_no_data_rows(path: &Path, delimiter: u8) -> Result<bool> {
    let file_len = fs::metadata(path).context("reading file metadata")?.len();

    // Quoting and embedded newlines follow standard CSV rules; uneven
    // field counts are not an error (flexible).
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    // Header record. A zero-byte file has neither a header nor data.
    let mut header = StringRecord::new();
    if !reader
        .read_record(&mut header)
        .context("reading CSV header")?
    {
        return Ok(true);
    }
    let header_end = reader.position().byte();

    // The presence of a second record decides the classification; its
    // field content is irrelevant.
    let mut record = StringRecord::new();
    if reader
        .read_record(&mut record)
        .context("reading first data record")?
    {
        return Ok(false);
    }

    // The parser skips blank lines, but a blank line is still a
    // zero-column record under row semantics. Any bytes past the header's
    // terminator mean a second record existed.
    Ok(header_end >= file_len)
}
