//! Test Summary CLI
//!
//! Entry point for the `generate-test-summary` command-line tool.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use test_summary::{generate_summary, ReportDefaults};
use tracing::Level;

#[derive(Parser)]
#[command(name = "generate-test-summary")]
#[command(about = "Generate a test summary JSON from JUnit XML and coverage JSON", version)]
#[command(after_help = "Pass '-' as COVERAGE_JSON to skip coverage.")]
struct Cli {
    /// JUnit XML test report
    junit_xml: PathBuf,

    /// coverage.py JSON report, or '-' for none
    coverage_json: String,

    /// Where to write the summary JSON
    output_json: PathBuf,

    /// Print debug diagnostics
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let defaults = ReportDefaults::default();

    if !cli.junit_xml.exists() {
        eprintln!("JUnit XML file not found: {}", cli.junit_xml.display());
        process::exit(1);
    }

    let coverage_path = if defaults.is_skip_coverage(&cli.coverage_json) {
        None
    } else {
        Some(Path::new(&cli.coverage_json))
    };

    match generate_summary(&cli.junit_xml, coverage_path, &cli.output_json, &defaults) {
        Ok(_) => {
            println!("Test summary written to {}", cli.output_json.display());
        }
        Err(e) => {
            eprintln!("Error writing summary: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
