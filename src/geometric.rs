use crate::cdf::{cdf_from_ln_failure, is_valid_probability};

/// A geometric distribution over the number of failures before the first success,
/// with the success probability validated once at construction.
///
/// # Examples
///
/// ```
/// use geocdf::geometric::Geometric;
///
/// let g = Geometric::new(0.5).unwrap();
/// assert_eq!(g.p(), 0.5);
/// assert_eq!(g.cdf(4.0), 0.96875);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Geometric {
    p: f64,
    ln_failure: f64,
}

/// Represents the errors that can occur when creating a [`Geometric`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum GeometricError {
    /// The probability is NaN or not in `[0, 1]`.
    ProbabilityInvalid,
}

impl std::fmt::Display for GeometricError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeometricError::ProbabilityInvalid => {
                write!(f, "Probability is NaN or not in [0, 1]")
            }
        }
    }
}

impl std::error::Error for GeometricError {}

impl Geometric {
    /// Constructs a new geometric distribution with success probability `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is `NaN` or outside of `[0, 1]`.
    pub fn new(p: f64) -> Result<Geometric, GeometricError> {
        if is_valid_probability(p) {
            Ok(Geometric {
                p,
                ln_failure: (-p).ln_1p(),
            })
        } else {
            Err(GeometricError::ProbabilityInvalid)
        }
    }

    /// Returns the success probability `p` of a single trial.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// `P(X <= x)`. Same handling of `x` as [`crate::cdf::cdf`]: `NaN` for `NaN`,
    /// `0` below zero and `1` at positive infinity.
    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            f64::NAN
        } else {
            cdf_from_ln_failure(x, self.ln_failure)
        }
    }
}
