use crate::error::Result;
use crate::statistics::exponential_inverse_sf;
use crate::units::{FalsePositiveRate, linear_to_db};

/// Detection threshold in dB relative to the noise level
///
/// Under noise only, the normalized detection statistic `|z|^2 / sigma^2` of a
/// complex tone of unknown phase is exponential with unit mean. The threshold
/// is the point where its upper tail equals `false_positive_rate`, i.e. the
/// inverse regularized lower incomplete gamma function with shape 1 at
/// `1 - false_positive_rate`.
///
/// Fails with [`DetectionError::Domain`](crate::DetectionError::Domain) unless
/// `0 < false_positive_rate < 1`.
///
/// # Example
/// ```
/// use tonedetect::solve_threshold;
///
/// let threshold_db = solve_threshold(1e-6).unwrap();
/// assert!((threshold_db - 11.404).abs() < 1e-3);
///
/// assert!(solve_threshold(0.0).is_err());
/// ```
pub fn solve_threshold(false_positive_rate: f64) -> Result<f64> {
    let rate = FalsePositiveRate::new(false_positive_rate)?;
    Ok(solve_threshold_for(rate))
}

/// Infallible variant of [`solve_threshold`] for an already validated rate
pub fn solve_threshold_for(rate: FalsePositiveRate) -> f64 {
    let threshold_db = linear_to_db(exponential_inverse_sf(rate));
    log::trace!("threshold for p={} -> {:.4} dB", rate, threshold_db);
    threshold_db
}
