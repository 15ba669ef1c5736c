use crate::error::{DetectionError, Result};
use crate::statistics::noncentral_chi_squared_2_sf;
use crate::units::{SnrConvention, db_to_linear};

/// Probability that the detection statistic exceeds `threshold_db` when a tone
/// at `snr_db` is present
///
/// The threshold is mapped to the chi-squared scale as `x = 2 * 10^(T/10)` and
/// the SNR to the non-centrality `lambda = factor * 10^(S/10)`, where the factor
/// is 1 for peak power and 2 for average power. The result is the survival
/// function of the non-central chi-squared distribution with 2 degrees of
/// freedom at `x`, in [0, 1].
///
/// Overflow and underflow in the dB conversions are absorbed: a threshold that
/// underflows to 0 gives 1.0, one that overflows gives 0.0, and an SNR that
/// overflows gives 1.0. NaN inputs, or both overflowing at once, return
/// [`DetectionError::InvalidInput`]; a series that fails to converge returns
/// [`DetectionError::NonConvergence`].
pub fn evaluate_detection(threshold_db: f64, snr_db: f64, convention: SnrConvention) -> Result<f64> {
    if threshold_db.is_nan() || snr_db.is_nan() {
        return Err(DetectionError::InvalidInput(format!(
            "NaN argument (threshold = {} dB, snr = {} dB)",
            threshold_db, snr_db
        )));
    }

    let x = 2.0 * db_to_linear(threshold_db);
    let lambda = convention.noncentrality_factor() * db_to_linear(snr_db);

    let probability = noncentral_chi_squared_2_sf(x, lambda)?;
    log::trace!(
        "Pd(threshold={:.3} dB, snr={:.3} dB, {}) = {:.6}",
        threshold_db,
        snr_db,
        convention,
        probability
    );
    Ok(probability)
}

/// [`evaluate_detection`] with average-power SNR
pub fn evaluate_detection_default(threshold_db: f64, snr_db: f64) -> Result<f64> {
    evaluate_detection(threshold_db, snr_db, SnrConvention::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::solve_threshold;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_non_decreasing_in_snr() {
        let threshold = solve_threshold(1e-6).unwrap();
        for convention in [SnrConvention::Peak, SnrConvention::Average] {
            let mut prev = 0.0;
            for i in -40..=160 {
                let snr = i as f64 * 0.25;
                let pd = evaluate_detection(threshold, snr, convention).unwrap();
                assert!(pd >= prev - 1e-12, "{} dB: {} < {}", snr, pd, prev);
                assert!((0.0..=1.0).contains(&pd));
                prev = pd;
            }
            assert_abs_diff_eq!(prev, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_conventions_differ_by_3db() {
        let offset = 10.0 * 2f64.log10();
        for &(threshold, snr) in &[(11.4, 8.0), (13.0, 13.0), (5.0, -2.0), (20.0, 18.5)] {
            let average = evaluate_detection(threshold, snr, SnrConvention::Average).unwrap();
            let peak = evaluate_detection(threshold, snr + offset, SnrConvention::Peak).unwrap();
            assert_abs_diff_eq!(average, peak, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_low_snr_approaches_false_positive_rate() {
        for p in [1e-9, 1e-6, 1e-3, 0.05] {
            let threshold = solve_threshold(p).unwrap();
            let pd = evaluate_detection_default(threshold, -100.0).unwrap();
            assert_relative_eq!(pd, p, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = evaluate_detection(12.5, 11.0, SnrConvention::Average).unwrap();
        let b = evaluate_detection(12.5, 11.0, SnrConvention::Average).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_pathological_inputs() {
        assert_eq!(evaluate_detection_default(-4000.0, 10.0).unwrap(), 1.0);
        assert_eq!(evaluate_detection_default(4000.0, 10.0).unwrap(), 0.0);
        assert_eq!(evaluate_detection_default(10.0, 4000.0).unwrap(), 1.0);
        assert!(evaluate_detection_default(4000.0, 4000.0).is_err());
        assert!(evaluate_detection_default(f64::NAN, 10.0).is_err());
        assert!(evaluate_detection_default(10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_default_is_average_power() {
        assert_eq!(
            evaluate_detection_default(12.0, 10.0).unwrap(),
            evaluate_detection(12.0, 10.0, SnrConvention::Average).unwrap()
        );
    }
}
