use clap::Parser;
use geocdf::cdf::{cdf_batch, is_valid_probability};
use geocdf::consts::DEFAULT_P;
use geocdf::io::write_evaluations;
use geocdf::tracing::start_geocdf_tracing_subscriber;
use itertools::Itertools;
use std::io::{stdout, BufWriter};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

/// Evaluates the geometric distribution CDF at each provided point.
/// Writes one 'p<TAB>x<TAB>y' line per point to stdout.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    #[arg(short, long, default_value_t = DEFAULT_P, allow_hyphen_values = true, verbatim_doc_comment)]
    /// Success probability of a single trial.
    /// Values outside of [0, 1] produce NaN for every point.
    p: f64,

    #[arg(required = true, allow_hyphen_values = true, verbatim_doc_comment)]
    /// Points to evaluate at (number of failures before the first success).
    /// 'inf', '-inf' and 'NaN' are accepted.
    xs: Vec<f64>,
}

fn main() -> ExitCode {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_geocdf_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();

    if !is_valid_probability(args.p) {
        warn!(
            "success probability {} is not in [0, 1], every result will be NaN",
            args.p
        );
    }

    info!("evaluating {} points with p = {}", args.xs.len(), args.p);
    let ys = cdf_batch(&args.xs, args.p);
    debug!(
        "{} of {} results are NaN",
        ys.iter().filter(|y| y.is_nan()).count(),
        ys.len()
    );

    let rows = args.xs.iter().copied().zip(ys).collect_vec();
    let mut writer = BufWriter::new(stdout().lock());
    match write_evaluations(&mut writer, args.p, &rows) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("could not write results to stdout: {}", e);
            ExitCode::FAILURE
        }
    }
}
