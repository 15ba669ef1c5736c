//! Central chi-squared distribution with 2 degrees of freedom.
//!
//! With 2 degrees of freedom the chi-squared distribution is an exponential
//! distribution with mean 2, so the CDF, survival function and their inverses
//! all have closed forms. The inverses take the upper-tail probability
//! directly so tiny false-positive rates keep full precision.

use crate::units::FalsePositiveRate;

/// CDF of chi-squared(2): `1 - exp(-x/2)`
pub fn chi_squared_2_cdf(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    -(-x / 2.0).exp_m1()
}

/// Survival function of chi-squared(2): `exp(-x/2)`
pub fn chi_squared_2_sf(x: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    (-x / 2.0).exp()
}

/// Point whose chi-squared(2) upper tail equals `p`: `-2 ln p`
pub fn chi_squared_2_inverse_sf(p: FalsePositiveRate) -> f64 {
    -2.0 * p.value().ln()
}

/// Inverse of the regularized lower incomplete gamma function with shape 1,
/// evaluated at `1 - p`.
///
/// For shape 1 the regularized lower incomplete gamma is `1 - exp(-x)`, so the
/// inverse at `1 - p` is `-ln p`. Half of [`chi_squared_2_inverse_sf`].
pub fn exponential_inverse_sf(p: FalsePositiveRate) -> f64 {
    -p.value().ln()
}
