use clap::Parser;
use geocdf::consts::DEFAULT_MAX_RELATIVE;
use geocdf::io::verify_fixtures;
use geocdf::tracing::start_geocdf_tracing_subscriber;
use itertools::Itertools;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

/// Checks the geometric distribution CDF against reference fixture (.json) files.
/// Each fixture holds parallel 'x', 'p' and 'expected' arrays.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long, default_value_t = DEFAULT_MAX_RELATIVE, verbatim_doc_comment)]
    /// Largest relative error accepted between a result and its expected value.
    max_relative: f64,

    #[arg(required = true)]
    /// Fixture (.json) files to check
    fixtures: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_geocdf_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();
    let fixture_paths = args.fixtures.iter().map(Path::new).collect_vec();
    let start_time = Instant::now();

    let summary = verify_fixtures(&fixture_paths, args.max_relative);

    info!(
        "checked {} cases in {} s",
        summary.cases,
        start_time.elapsed().as_secs_f64()
    );

    if summary.passed() {
        info!("done!");
        ExitCode::SUCCESS
    } else {
        error!(
            "{} mismatched cases, {} unreadable fixtures",
            summary.mismatches, summary.unreadable
        );
        ExitCode::FAILURE
    }
}
