use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::classifier::is_empty_csv;
use super::{RunConfig, RunSummary};

/// Enumerate CSV candidates under the configured root and delete (or
/// report) the header-only ones.
///
/// Candidates are processed one at a time, in enumeration order. A failure
/// on a single file is logged and never aborts the walk; a failure of the
/// enumeration itself stops the walk and returns the counts accumulated so
/// far. Verbose mode collects the candidate list up front so the found
/// count can be reported before processing starts; otherwise enumeration
/// stays lazy.
pub fn walk(config: &RunConfig) -> RunSummary {
    let mut summary = RunSummary::default();

    if config.verbose {
        let candidates = collect_candidates(config);
        println!(
            "Found {} CSV files in {}{}",
            candidates.len(),
            config.root.display(),
            if config.recursive {
                " and its subdirectories"
            } else {
                ""
            }
        );
        for path in &candidates {
            process_candidate(path, config, &mut summary);
        }
    } else {
        for entry in entries(config) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::error!(
                        "Error scanning directory {}: {err}",
                        config.root.display()
                    );
                    break;
                }
            };
            if is_csv_candidate(&entry) {
                process_candidate(entry.path(), config, &mut summary);
            }
        }
    }

    summary
}

fn entries(config: &RunConfig) -> WalkDir {
    let max_depth = if config.recursive { usize::MAX } else { 1 };
    WalkDir::new(&config.root).min_depth(1).max_depth(max_depth)
}

/// Gather the candidate paths eagerly. An enumeration failure stops the
/// collection; whatever was gathered before it is still processed.
fn collect_candidates(config: &RunConfig) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for entry in entries(config) {
        match entry {
            Ok(entry) => {
                if is_csv_candidate(&entry) {
                    candidates.push(entry.into_path());
                }
            }
            Err(err) => {
                log::error!(
                    "Error scanning directory {}: {err}",
                    config.root.display()
                );
                break;
            }
        }
    }
    candidates
}

fn process_candidate(path: &Path, config: &RunConfig, summary: &mut RunSummary) {
    summary.files_checked += 1;

    if !is_empty_csv(path, config.delimiter) {
        if config.verbose {
            println!("Keeping: {} (contains data)", path.display());
        }
        return;
    }

    if config.dry_run {
        println!("Would delete: {}", path.display());
        return;
    }

    match fs::remove_file(path) {
        Ok(()) => {
            summary.files_deleted += 1;
            if config.verbose {
                println!("Deleted: {}", path.display());
            }
        }
        Err(err) => {
            // Permission problems or a concurrent removal; keep going.
            log::error!("Error processing {}: {err}", path.display());
        }
    }
}

/// Candidates are regular files named `*.csv`, matched case-sensitively.
fn is_csv_candidate(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(".csv"))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::super::testutil::TempTree;
    use super::*;

    fn config(root: &Path) -> RunConfig {
        RunConfig {
            root: root.to_path_buf(),
            delimiter: b',',
            dry_run: false,
            verbose: false,
            recursive: false,
        }
    }

    #[test]
    fn deletes_header_only_file() {
        let tree = TempTree::new("walk-delete");
        let path = tree.write("a.csv", b"name,age\n");

        let summary = walk(&config(tree.path()));

        assert_eq!(summary.files_checked, 1);
        assert_eq!(summary.files_deleted, 1);
        assert!(!path.exists());
    }

    #[test]
    fn keeps_file_with_data() {
        let tree = TempTree::new("walk-keep");
        let path = tree.write("b.csv", b"name,age\nbob,30\n");

        let summary = walk(&config(tree.path()));

        assert_eq!(summary.files_checked, 1);
        assert_eq!(summary.files_deleted, 0);
        assert!(path.exists());
    }

    #[test]
    fn preserves_files_that_fail_to_parse() {
        let tree = TempTree::new("walk-garbage");
        let path = tree.write("c.csv", b"\xff\xfe\x00garbage\xff\n");

        let summary = walk(&config(tree.path()));

        assert_eq!(summary.files_checked, 1);
        assert_eq!(summary.files_deleted, 0);
        assert!(path.exists());
    }

    #[test]
    fn ignores_non_csv_files() {
        let tree = TempTree::new("walk-other");
        let notes = tree.write("notes.txt", b"header\n");
        let upper = tree.write("d.CSV", b"header\n");

        let summary = walk(&config(tree.path()));

        assert_eq!(summary.files_checked, 0);
        assert_eq!(summary.files_deleted, 0);
        assert!(notes.exists());
        assert!(upper.exists());
    }

    #[test]
    fn hidden_csv_files_are_candidates() {
        // `*.csv` matching is by name suffix only; dotted files are not
        // special-cased.
        let tree = TempTree::new("walk-hidden");
        let hidden = tree.write(".secret.csv", b"name,age\n");
        let nested = tree.write(".hidden/inner.csv", b"name,age\n");

        let mut config = config(tree.path());
        config.recursive = true;
        let summary = walk(&config);

        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.files_deleted, 2);
        assert!(!hidden.exists());
        assert!(!nested.exists());
    }

    #[test]
    fn verbose_walk_matches_lazy_walk() {
        let tree = TempTree::new("walk-verbose");
        let empty = tree.write("a.csv", b"name,age\n");
        let kept = tree.write("b.csv", b"name,age\nbob,30\n");

        let mut config = config(tree.path());
        config.verbose = true;
        let summary = walk(&config);

        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.files_deleted, 1);
        assert!(!empty.exists());
        assert!(kept.exists());
    }

    #[test]
    fn keeps_file_whose_header_is_followed_by_blank_line() {
        let tree = TempTree::new("walk-blank-line");
        let path = tree.write("g.csv", b"name,age\n\n");

        let summary = walk(&config(tree.path()));

        assert_eq!(summary.files_checked, 1);
        assert_eq!(summary.files_deleted, 0);
        assert!(path.exists());
    }

    #[test]
    fn dry_run_never_deletes() {
        let tree = TempTree::new("walk-dry");
        let path = tree.write("f.csv", b"name,age\n");

        let mut config = config(tree.path());
        config.dry_run = true;
        let summary = walk(&config);

        assert_eq!(summary.files_checked, 1);
        assert_eq!(summary.files_deleted, 0);
        assert!(path.exists());
    }

    #[test]
    fn non_recursive_walk_skips_subdirectories() {
        let tree = TempTree::new("walk-flat");
        let nested = tree.write("sub/d.csv", b"name,age\n");
        let top = tree.write("e.csv", b"name,age\n");

        let summary = walk(&config(tree.path()));

        assert_eq!(summary.files_checked, 1);
        assert_eq!(summary.files_deleted, 1);
        assert!(!top.exists());
        assert!(nested.exists());
    }

    #[test]
    fn recursive_walk_reaches_nested_files() {
        let tree = TempTree::new("walk-deep");
        let nested = tree.write("sub/d.csv", b"name,age\n");
        let top = tree.write("e.csv", b"name,age\n");

        let mut config = config(tree.path());
        config.recursive = true;
        let summary = walk(&config);

        assert_eq!(summary.files_checked, 2);
        assert_eq!(summary.files_deleted, 2);
        assert!(!top.exists());
        assert!(!nested.exists());
    }

    #[test]
    fn second_run_deletes_nothing() {
        let tree = TempTree::new("walk-idempotent");
        tree.write("a.csv", b"name,age\n");
        tree.write("b.csv", b"name,age\nbob,30\n");

        let config = config(tree.path());
        let first = walk(&config);
        let second = walk(&config);

        assert_eq!(first.files_deleted, 1);
        assert_eq!(second.files_checked, 1);
        assert_eq!(second.files_deleted, 0);
    }

    #[test]
    fn deleted_never_exceeds_checked() {
        let tree = TempTree::new("walk-counts");
        tree.write("a.csv", b"name,age\n");
        tree.write("b.csv", b"name,age\nbob,30\n");
        tree.write("sub/c.csv", b"name,age\n");
        tree.write("c.csv", b"\xff\xfe\n");

        let mut config = config(tree.path());
        config.recursive = true;
        let summary = walk(&config);

        assert!(summary.files_deleted <= summary.files_checked);
        assert_eq!(summary.files_checked, 4);
        assert_eq!(summary.files_deleted, 2);
    }
}
