//! Command-line interface for jsxcat.
//!
//! Collects every `.js`/`.jsx` file under a root directory into one summary file.

use clap::Parser;
use jsxcat::{CollectReport, CollectorBuilder, DEFAULT_OUTPUT, collect_with};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

/// jsxcat — concatenate a frontend tree's .js/.jsx sources into one file
#[derive(Parser)]
#[command(name = "jsxcat", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Summary file to create or overwrite
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Do not print a line per processed file
    #[arg(short, long)]
    quiet: bool,

    /// Print the run report as JSON when done (implies --quiet)
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let options = CollectorBuilder::new(cli.root)
        .output(cli.output)
        .progress(!cli.quiet && !cli.json)
        .build();

    match collect_with(options) {
        Ok(report) => print_report(&report, cli.json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &CollectReport, json: bool) {
    if json {
        let out = serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        if let Err(e) = writeln!(io::stdout().lock(), "{}", out) {
            eprintln!("Failed to write report: {}", e);
            exit(1);
        }
        return;
    }
    for walk_error in &report.walk_errors {
        eprintln!("Skipped: {}", walk_error);
    }
    // Best effort, like the progress lines.
    if let Some(output) = &report.output {
        writeln!(io::stdout().lock(), "\nSummary file created: {}", output.display()).ok();
    }
}
