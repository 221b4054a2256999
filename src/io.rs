use approx::relative_eq;
use itertools::{izip, Itertools};
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::cdf::cdf;

/// Reference values for the CDF as three parallel arrays, one case per index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fixture {
    pub x: Vec<f64>,
    pub p: Vec<f64>,
    pub expected: Vec<f64>,
}

/// Totals over a set of checked fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerificationSummary {
    pub cases: usize,
    pub mismatches: usize,
    pub unreadable: usize,
}

impl VerificationSummary {
    /// True when every fixture was read and every case was within tolerance.
    pub fn passed(&self) -> bool {
        self.mismatches == 0 && self.unreadable == 0
    }
}

/// A fixture case whose evaluated value is outside the allowed tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub x: f64,
    pub p: f64,
    pub expected: f64,
    pub actual: f64,
}

impl Fixture {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates `(x, p, expected)` triples.
    pub fn cases(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        izip!(&self.x, &self.p, &self.expected).map(|(&x, &p, &expected)| (x, p, expected))
    }

    /// Evaluates every case and returns those whose relative error exceeds `max_relative`.
    /// Results are ordered by case index.
    pub fn mismatches(&self, max_relative: f64) -> Vec<Mismatch> {
        let cases = self.cases().collect_vec();
        cases
            .into_par_iter()
            .enumerate()
            .filter_map(|(index, (x, p, expected))| {
                let actual = cdf(x, p);
                if within_relative(actual, expected, max_relative) {
                    None
                } else {
                    Some(Mismatch {
                        index,
                        x,
                        p,
                        expected,
                        actual,
                    })
                }
            })
            .collect()
    }
}

// No absolute floor, tiny expected values are held to the same relative bound
fn within_relative(actual: f64, expected: f64, max_relative: f64) -> bool {
    if actual.is_nan() || expected.is_nan() {
        return actual.is_nan() && expected.is_nan();
    }
    relative_eq!(actual, expected, epsilon = 0.0, max_relative = max_relative)
}

pub fn parse_fixture(contents: &str) -> Result<Fixture, String> {
    let fixture: Fixture = serde_json::from_str(contents).map_err(|e| e.to_string())?;

    if fixture.x.len() != fixture.p.len() || fixture.x.len() != fixture.expected.len() {
        return Err(format!(
            "fixture arrays have different lengths (x: {}, p: {}, expected: {})",
            fixture.x.len(),
            fixture.p.len(),
            fixture.expected.len()
        ));
    }

    Ok(fixture)
}

pub fn load_fixture(path: &Path) -> Result<Fixture, String> {
    info!("loading fixture at {:?}", path);
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("could not read fixture at {:?}: {}", path, e))?;

    let fixture = parse_fixture(&contents)
        .map_err(|msg| format!("could not parse fixture at {:?}: {}", path, msg))?;
    debug!("fixture at {:?} has {} cases", path, fixture.len());

    Ok(fixture)
}

/// Writes one `p\tx\ty` line per evaluated point.
pub fn write_evaluations<W: Write>(writer: &mut W, p: f64, rows: &[(f64, f64)]) -> std::io::Result<()> {
    for (x, y) in rows {
        writeln!(writer, "{}\t{}\t{}", p, x, y)?;
    }
    writer.flush()
}

/// Loads and checks every fixture, logging each mismatch and each fixture that cannot be read.
pub fn verify_fixtures(paths: &[&Path], max_relative: f64) -> VerificationSummary {
    let mut summary = VerificationSummary::default();

    for &path in paths {
        let fixture = match load_fixture(path) {
            Ok(fixture) => fixture,
            Err(msg) => {
                error!("{}", msg);
                summary.unreadable += 1;
                continue;
            }
        };

        let mismatches = fixture.mismatches(max_relative);
        for mismatch in &mismatches {
            warn!(
                "case {} of {:?} failed: x: {}, p: {}, y: {:e}, expected: {:e}",
                mismatch.index, path, mismatch.x, mismatch.p, mismatch.actual, mismatch.expected
            );
        }
        info!(
            "{:?}: {} of {} cases passed",
            path,
            fixture.len() - mismatches.len(),
            fixture.len()
        );

        summary.cases += fixture.len();
        summary.mismatches += mismatches.len();
    }

    summary
}
