use num_complex::Complex64;
use rand::RngExt;
use std::f64::consts::PI;

use crate::error::{DetectionError, Result};
use crate::units::db_to_linear;

use super::{ComplexNoise, amplitude_for_integrated_snr, create_rng, generate_tone};

/// Monte-Carlo detector setup
#[derive(Debug, Clone)]
pub struct MonteCarloConfig {
    /// Samples coherently integrated per trial
    pub samples_per_trial: usize,
    /// Number of independent trials
    pub trials: usize,
    /// Normalized tone frequency, cycles per sample
    pub cycles_per_sample: f64,
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            samples_per_trial: 32,
            trials: 20_000,
            cycles_per_sample: 0.1,
            seed: Some(42),
        }
    }
}

impl MonteCarloConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }
}

/// Fraction of trials in which the statistic crossed the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateEstimate {
    pub detections: usize,
    pub trials: usize,
}

impl RateEstimate {
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.detections as f64 / self.trials as f64
    }

    /// Binomial standard error for a true rate `p`
    pub fn std_error(&self, p: f64) -> f64 {
        if self.trials == 0 {
            return f64::INFINITY;
        }
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }
}

/// Normalized matched-filter statistic `|z|^2 / (sigma^2 / N)` with unit noise power
///
/// `z` is the mean of the samples mixed down by the known tone frequency, so a
/// noise-only input gives an exponential statistic with unit mean.
pub fn detection_statistic(samples: &[Complex64], cycles_per_sample: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f64;
    let z: Complex64 = samples
        .iter()
        .enumerate()
        .map(|(i, x)| x * Complex64::from_polar(1.0, -2.0 * PI * cycles_per_sample * i as f64))
        .sum::<Complex64>()
        / n;
    z.norm_sqr() * n
}

/// Estimate the probability that the statistic exceeds `threshold_db`
///
/// `snr_db` is the average-power SNR after coherent integration; `None`
/// simulates noise only. The tone phase is drawn uniformly per trial.
pub fn estimate_detection_rate(
    threshold_db: f64,
    snr_db: Option<f64>,
    config: &MonteCarloConfig,
) -> Result<RateEstimate> {
    if config.samples_per_trial == 0 {
        return Err(DetectionError::InvalidInput(
            "samples_per_trial must be positive".to_string(),
        ));
    }

    let threshold = db_to_linear(threshold_db);
    let amplitude = snr_db
        .map(|snr| amplitude_for_integrated_snr(snr, config.samples_per_trial))
        .unwrap_or(0.0);
    let noise = ComplexNoise::new(1.0)?;
    let mut rng = create_rng(config.seed);

    let mut detections = 0;
    for _ in 0..config.trials {
        let phase = rng.random::<f64>() * 2.0 * PI;
        let mut samples = generate_tone(
            config.samples_per_trial,
            config.cycles_per_sample,
            amplitude,
            phase,
        );
        noise.add_to(&mut samples, &mut rng);

        if detection_statistic(&samples, config.cycles_per_sample) > threshold {
            detections += 1;
        }
    }

    log::debug!(
        "Monte-Carlo threshold={:.2} dB snr={:?} dB: {}/{} detections",
        threshold_db,
        snr_db,
        detections,
        config.trials
    );

    Ok(RateEstimate {
        detections,
        trials: config.trials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistic_of_clean_tone() {
        // Pure tone at amplitude A over N samples gives N * A^2
        let tone = generate_tone(16, 0.2, 0.5, 0.7);
        let stat = detection_statistic(&tone, 0.2);
        assert!((stat - 16.0 * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_statistic_rejects_other_frequency() {
        // Tone on an exact DFT bin away from the reference integrates to zero
        let tone = generate_tone(16, 0.25, 1.0, 0.0);
        assert!(detection_statistic(&tone, 0.125) < 1e-20);
    }

    #[test]
    fn test_rate_estimate() {
        let estimate = RateEstimate {
            detections: 25,
            trials: 100,
        };
        assert_eq!(estimate.rate(), 0.25);
        assert!((estimate.std_error(0.25) - (0.1875f64 / 100.0).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let config = MonteCarloConfig {
            samples_per_trial: 0,
            ..Default::default()
        };
        assert!(estimate_detection_rate(10.0, None, &config).is_err());
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = MonteCarloConfig::default().with_trials(500).with_seed(7);
        let a = estimate_detection_rate(3.0, Some(5.0), &config).unwrap();
        let b = estimate_detection_rate(3.0, Some(5.0), &config).unwrap();
        assert_eq!(a, b);
    }
}
