use rayon::prelude::*;

/// Evaluates the cumulative distribution function of the
/// [geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution)
/// counting failures before the first success, i.e. `P(X <= x)` with support `{0, 1, 2, ...}`.
///
/// Invalid input never panics, it is signalled with `NaN`:
/// - `x` or `p` is `NaN` gives `NaN`
/// - `p` outside of `[0, 1]` (infinities included) gives `NaN`
/// - `x < 0` (including `-inf`) gives `0`
/// - `x == +inf` gives `1`
///
/// Non-integer `x` is floored, so the result is the mass accumulated up to `floor(x)`.
///
/// # Examples
///
/// ```
/// use geocdf::cdf::cdf;
///
/// assert_eq!(cdf(4.0, 0.5), 0.96875);
/// assert_eq!(cdf(-0.5, 0.5), 0.0);
/// assert!(cdf(3.0, 2.0).is_nan());
/// ```
pub fn cdf(x: f64, p: f64) -> f64 {
    if x.is_nan() || p.is_nan() || !is_valid_probability(p) {
        return f64::NAN;
    }
    cdf_from_ln_failure(x, (-p).ln_1p())
}

/// Fixes the success probability `p` and returns the CDF as a function of `x` alone.
///
/// `ln(1 - p)` is computed once here. An invalid `p` yields a function that always returns `NaN`.
///
/// ```
/// use geocdf::cdf::factory;
///
/// let coin = factory(0.5);
/// assert_eq!(coin(0.0), 0.5);
/// assert_eq!(coin(f64::INFINITY), 1.0);
/// ```
pub fn factory(p: f64) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    let ln_failure = if is_valid_probability(p) {
        Some((-p).ln_1p())
    } else {
        None
    };

    move |x| match ln_failure {
        Some(ln_failure) if !x.is_nan() => cdf_from_ln_failure(x, ln_failure),
        _ => f64::NAN,
    }
}

/// Evaluates [`cdf`] for every element of `xs` in parallel, preserving order.
pub fn cdf_batch(xs: &[f64], p: f64) -> Vec<f64> {
    let evaluate = factory(p);
    xs.par_iter().map(|&x| evaluate(x)).collect()
}

/// Whether `p` is a usable success probability, i.e. inside `[0, 1]`. `NaN` is rejected.
pub fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

// Expects `x` not NaN and `ln_failure = ln(1 - p)` for a valid `p`.
// 1 - (1-p)^(n+1) = -expm1((n+1) * ln(1-p)), which keeps precision for small p and small results.
pub(crate) fn cdf_from_ln_failure(x: f64, ln_failure: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x == f64::INFINITY {
        1.0
    } else {
        -((x.floor() + 1.0) * ln_failure).exp_m1()
    }
}
