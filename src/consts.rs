/// Success probability used by `geocdf-eval` when none is given.
pub const DEFAULT_P: f64 = 0.5;

/// Relative error allowed when comparing against reference fixtures.
/// The evaluator stays within one ulp of the correctly rounded value; four leaves headroom
/// for a different libm.
pub const DEFAULT_MAX_RELATIVE: f64 = 4.0 * f64::EPSILON;
