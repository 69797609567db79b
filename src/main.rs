mod cli;
mod scan;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use cli::Cli;
use scan::{walker, RunConfig};

fn main() -> ExitCode {
    // Warnings about unreadable files must reach stderr even without
    // RUST_LOG set, so default the filter to `warn`.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Deletions are independent per file, so exiting mid-walk is safe.
    if let Err(err) = ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled by user");
        std::process::exit(130);
    }) {
        log::warn!("Could not install interrupt handler: {err}");
    }

    let config = match RunConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::from(1);
        }
    };

    print_banner(&config);

    let summary = walker::walk(&config);

    println!();
    println!("Summary:");
    println!("  Files checked: {}", summary.files_checked);
    println!(
        "  Empty files {}: {}",
        if config.dry_run {
            "would be deleted"
        } else {
            "deleted"
        },
        summary.files_deleted
    );

    ExitCode::SUCCESS
}

fn print_banner(config: &RunConfig) {
    println!("Processing directory: {}", config.root.display());
    println!(
        "Mode: {}",
        if config.dry_run {
            "Dry run (no files will be deleted)"
        } else {
            "Delete empty files"
        }
    );
    println!("Delimiter: '{}'", config.delimiter as char);
    println!("Recursive: {}", if config.recursive { "Yes" } else { "No" });
}
