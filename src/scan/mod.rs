/// Scanning subsystem: run configuration, classification, and the
/// deletion walk.
///
/// ```text
///  CLI arguments
///       │
///       ▼
///  ┌───────────┐
///  │ RunConfig │  validated root, resolved delimiter, mode flags
///  └───────────┘
///       │
///       ▼
///  ┌────────┐      ┌────────────┐
///  │ walker │ ───▶ │ classifier │  header-only? → delete or report
///  └────────┘      └────────────┘
/// ```
pub mod classifier;
pub mod walker;

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::{resolve_delimiter, Cli};

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Fatal configuration problems, all reported before any file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("directory '{}' does not exist", .0.display())]
    Missing(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("delimiter '{0}' must be a single character, 'pipe', or 'tab'")]
    Delimiter(String),
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Immutable per-invocation configuration, built once from the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directory to scan, absolutised for clarity in output.
    pub root: PathBuf,
    /// Field delimiter as the single byte the CSV parser splits on.
    pub delimiter: u8,
    /// Report deletions without performing them.
    pub dry_run: bool,
    /// Emit per-file keep/delete notices.
    pub verbose: bool,
    /// Descend into subdirectories.
    pub recursive: bool,
}

impl RunConfig {
    /// Validate the CLI input and build the configuration.
    ///
    /// The root path is made absolute without resolving symlinks, then
    /// checked for existence and directory-ness.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let delimiter = resolve_delimiter(&cli.delimiter)?;

        let root = std::path::absolute(&cli.directory)
            .map_err(|_| ConfigError::Missing(cli.directory.clone()))?;
        if !root.exists() {
            return Err(ConfigError::Missing(root));
        }
        if !root.is_dir() {
            return Err(ConfigError::NotADirectory(root));
        }

        Ok(RunConfig {
            root,
            delimiter,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            recursive: cli.recursive,
        })
    }
}

// ---------------------------------------------------------------------------
// Run summary
// ---------------------------------------------------------------------------

/// Counters accumulated over one walk. `files_deleted <= files_checked`
/// holds at all times; dry-run deletions are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_checked: u64,
    pub files_deleted: u64,
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------
