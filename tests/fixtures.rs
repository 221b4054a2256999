use approx::assert_relative_eq;
use geocdf::cdf::cdf;
use geocdf::consts::DEFAULT_MAX_RELATIVE;
use geocdf::io::{load_fixture, Fixture};
use std::path::{Path, PathBuf};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn check_fixture(fixture: &Fixture) {
    assert!(!fixture.is_empty());
    fixture.cases().for_each(|(x, p, expected)| {
        let y = cdf(x, p);
        assert_relative_eq!(y, expected, max_relative = DEFAULT_MAX_RELATIVE);
    });
    assert!(fixture.mismatches(DEFAULT_MAX_RELATIVE).is_empty());
}

#[test]
fn small_p() {
    let fixture = load_fixture(&fixture_path("small_p.json")).unwrap();
    check_fixture(&fixture);
}

#[test]
fn large_p() {
    let fixture = load_fixture(&fixture_path("large_p.json")).unwrap();
    check_fixture(&fixture);
}
