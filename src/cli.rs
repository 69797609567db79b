use std::path::PathBuf;

use clap::Parser;

use crate::scan::ConfigError;

/// Remove empty CSV files (files with only headers) from a directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing CSV files to check
    pub directory: PathBuf,

    /// Show what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Print detailed information about each file
    #[arg(short, long)]
    pub verbose: bool,

    /// Process subdirectories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Field delimiter used in CSV files ("pipe" and "tab" are aliases)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,
}

/// Resolve the delimiter argument to the single byte the CSV parser works
/// with.
///
/// `pipe` and `tab` are case-insensitive aliases. Any other value must be
/// one byte long: multi-character (or multi-byte) delimiters have no
/// defined row semantics, so they are rejected up front rather than
/// silently truncated.
pub fn resolve_delimiter(value: &str) -> Result<u8, ConfigError> {
    if value.eq_ignore_ascii_case("pipe") {
        return Ok(b'|');
    }
    if value.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(ConfigError::Delimiter(value.to_string())),
    }
}
