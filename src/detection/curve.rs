use serde::Serialize;

use crate::config::DetectionConfig;
use crate::error::Result;
use crate::units::{FalsePositiveRate, SnrConvention};

use super::{evaluate_detection, solve_threshold_for};

/// One point of a detection-probability curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Candidate SNR in dB
    pub snr_db: f64,
    /// Absolute signal level: noise density plus SNR
    pub signal_level_db: f64,
    /// Probability of detection at this SNR
    pub detection_probability: f64,
}

/// Detection probability as a function of SNR for one false-alarm budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionCurve {
    pub false_positive_rate: f64,
    pub threshold_db: f64,
    pub convention: SnrConvention,
    pub points: Vec<CurvePoint>,
}

impl DetectionCurve {
    /// Lowest swept SNR whose detection probability reaches `probability`
    pub fn snr_for_probability(&self, probability: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.detection_probability >= probability)
            .map(|p| p.snr_db)
    }
}

/// Evaluate the detection curve described by `config`
///
/// Derives the per-trial false-positive rate from the annual budget, solves the
/// threshold once and evaluates every SNR of the sweep against it.
pub fn detection_curve(config: &DetectionConfig) -> Result<DetectionCurve> {
    config.validate()?;
    let rate: FalsePositiveRate = config.false_positive_rate()?;
    let threshold_db = solve_threshold_for(rate);

    log::info!(
        "False-positive rate per {} ms trial: {} (threshold {:.2} dB)",
        config.signal_duration_ms,
        rate,
        threshold_db
    );

    let points = config
        .sweep
        .values()
        .map(|snr_db| -> Result<CurvePoint> {
            let detection_probability = evaluate_detection(threshold_db, snr_db, config.convention)?;
            Ok(CurvePoint {
                snr_db,
                signal_level_db: config.white_noise_density_db + snr_db,
                detection_probability,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Evaluated {} curve points", points.len());

    Ok(DetectionCurve {
        false_positive_rate: rate.value(),
        threshold_db,
        convention: config.convention,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnrSweep;

    #[test]
    fn test_default_curve_shape() {
        let curve = detection_curve(&DetectionConfig::default()).unwrap();
        assert_eq!(curve.points.len(), 81);
        assert!(curve.points[0].detection_probability < 1e-5);
        assert!(curve.points[80].detection_probability > 0.999_999);
        for pair in curve.points.windows(2) {
            assert!(pair[1].detection_probability >= pair[0].detection_probability - 1e-12);
        }
    }

    #[test]
    fn test_signal_level_offsets_by_noise_density() {
        let config = DetectionConfig {
            white_noise_density_db: -150.0,
            sweep: SnrSweep::new(10.0, 12.0, 1.0),
            ..Default::default()
        };
        let curve = detection_curve(&config).unwrap();
        let levels: Vec<f64> = curve.points.iter().map(|p| p.signal_level_db).collect();
        assert_eq!(levels, vec![-140.0, -139.0, -138.0]);
    }

    #[test]
    fn test_snr_for_probability() {
        let curve = detection_curve(&DetectionConfig::default()).unwrap();
        let snr_50 = curve.snr_for_probability(0.5).unwrap();
        let snr_90 = curve.snr_for_probability(0.9).unwrap();
        assert!(snr_90 > snr_50);
        assert!(curve.snr_for_probability(1.5).is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DetectionConfig {
            signal_duration_ms: 0.0,
            ..Default::default()
        };
        assert!(detection_curve(&config).is_err());
    }
}
