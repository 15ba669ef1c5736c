//! Configuration for detection curve generation.
//!
//! A configuration names the noise floor, the false-alarm budget and the
//! observation window, plus the SNR range to sweep. It can be built in code,
//! starting from `DetectionConfig::default()`, or loaded from TOML:
//!
//! ```toml
//! white_noise_density_db = -174.0
//! false_positives_per_year = 1.0
//! signal_duration_ms = 25.0
//! convention = "average"
//!
//! [sweep]
//! start_db = 0.0
//! stop_db = 40.0
//! step_db = 0.5
//! ```
//!
//! Missing keys fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SWEEP_POINTS;
use crate::error::{DetectionError, Result};
use crate::units::{FalsePositiveRate, SnrConvention};

/// Detection curve configuration
///
/// # Example
/// ```
/// use tonedetect::config::DetectionConfig;
///
/// let mut config = DetectionConfig::default();
/// config.false_positives_per_year = 10.0;
/// let rate = config.false_positive_rate().unwrap();
/// assert!(rate.value() > 7.9e-9 && rate.value() < 8.0e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectionConfig {
    /// White noise power spectral density in dB (e.g. dBm/Hz); only shifts the
    /// reported absolute signal level
    pub white_noise_density_db: f64,
    /// Acceptable number of false detections per year of continuous observation
    pub false_positives_per_year: f64,
    /// Duration of one independent observation window in milliseconds
    pub signal_duration_ms: f64,
    /// SNR convention of the swept values
    pub convention: SnrConvention,
    /// SNR values to evaluate
    pub sweep: SnrSweep,
}

/// Inclusive range of SNR values in dB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnrSweep {
    pub start_db: f64,
    pub stop_db: f64,
    pub step_db: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            // kT at 290 K, dBm/Hz
            white_noise_density_db: -174.0,
            false_positives_per_year: 1.0,
            signal_duration_ms: 25.0,
            convention: SnrConvention::Average,
            sweep: SnrSweep::default(),
        }
    }
}

impl Default for SnrSweep {
    fn default() -> Self {
        Self {
            start_db: 0.0,
            stop_db: 40.0,
            step_db: 0.5,
        }
    }
}

impl DetectionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| DetectionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DetectionError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.white_noise_density_db.is_finite() {
            return Err(DetectionError::Config(format!(
                "white_noise_density_db must be finite, got {}",
                self.white_noise_density_db
            )));
        }
        if !(self.false_positives_per_year > 0.0) || !self.false_positives_per_year.is_finite() {
            return Err(DetectionError::Config(format!(
                "false_positives_per_year must be positive, got {}",
                self.false_positives_per_year
            )));
        }
        if !(self.signal_duration_ms > 0.0) || !self.signal_duration_ms.is_finite() {
            return Err(DetectionError::Config(format!(
                "signal_duration_ms must be positive, got {}",
                self.signal_duration_ms
            )));
        }
        self.sweep.validate()?;
        self.false_positive_rate().map_err(|e| {
            DetectionError::Config(format!("per-trial false-positive rate: {}", e))
        })?;
        Ok(())
    }

    pub fn signal_duration_secs(&self) -> f64 {
        self.signal_duration_ms / 1000.0
    }

    /// Per-trial false-positive rate from the annual budget
    pub fn false_positive_rate(&self) -> Result<FalsePositiveRate> {
        FalsePositiveRate::from_annual_rate(
            self.false_positives_per_year,
            self.signal_duration_secs(),
        )
    }
}

impl SnrSweep {
    pub fn new(start_db: f64, stop_db: f64, step_db: f64) -> Self {
        Self {
            start_db,
            stop_db,
            step_db,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.start_db.is_finite() || !self.stop_db.is_finite() {
            return Err(DetectionError::Config(format!(
                "sweep bounds must be finite, got {}..{}",
                self.start_db, self.stop_db
            )));
        }
        if !(self.step_db > 0.0) || !self.step_db.is_finite() {
            return Err(DetectionError::Config(format!(
                "sweep step must be positive, got {}",
                self.step_db
            )));
        }
        if self.stop_db < self.start_db {
            return Err(DetectionError::Config(format!(
                "sweep stop {} is below start {}",
                self.stop_db, self.start_db
            )));
        }
        let steps = self.step_count();
        if !steps.is_finite() || steps >= MAX_SWEEP_POINTS as f64 {
            return Err(DetectionError::Config(format!(
                "sweep {}..{} step {} exceeds {} points",
                self.start_db, self.stop_db, self.step_db, MAX_SWEEP_POINTS
            )));
        }
        Ok(())
    }

    // Slack so that stop is included despite rounding
    fn step_count(&self) -> f64 {
        ((self.stop_db - self.start_db) / self.step_db + 1e-9).floor()
    }

    pub fn len(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        (self.step_count() as usize).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// SNR values from start to stop inclusive, computed by index
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start_db + i as f64 * self.step_db)
    }
}
