//! Unit-tagged value types.
//!
//! Decibel and linear power values are plain `f64`s at the API surface, so the
//! conversions live here and every caller goes through them. The two SNR
//! conventions are an enum rather than a bare boolean so a peak-power SNR can
//! never be fed to code expecting average power by accident.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{AVERAGE_POWER_FACTOR, PEAK_POWER_FACTOR, SECONDS_PER_YEAR};
use crate::error::{DetectionError, Result};

/// Convert a power ratio in dB to linear units
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// Convert a linear power ratio to dB
pub fn linear_to_db(linear: f64) -> f64 {
    10.0 * linear.log10()
}

/// Probability of a spurious detection in one independent trial
///
/// Always strictly inside (0, 1); construction outside that interval is a
/// domain error.
///
/// # Example
/// ```
/// use tonedetect::units::FalsePositiveRate;
///
/// // One false alarm per year with 25 ms observation windows
/// let rate = FalsePositiveRate::from_annual_rate(1.0, 0.025).unwrap();
/// assert!((rate.value() - 7.927e-10).abs() < 1e-12);
///
/// assert!(FalsePositiveRate::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FalsePositiveRate(f64);

impl FalsePositiveRate {
    pub fn new(probability: f64) -> Result<Self> {
        if probability > 0.0 && probability < 1.0 {
            Ok(Self(probability))
        } else {
            Err(DetectionError::Domain(probability))
        }
    }

    /// Per-trial rate from an annual false-positive budget
    pub fn from_annual_rate(rate_per_year: f64, trial_duration_secs: f64) -> Result<Self> {
        Self::new(rate_per_year * trial_duration_secs / SECONDS_PER_YEAR)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for FalsePositiveRate {
    type Error = DetectionError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for FalsePositiveRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}

/// SNR convention
///
/// Peak and average power SNR differ by a factor of 2 (about 3.01 dB) in the
/// non-centrality parameter of the detection statistic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SnrConvention {
    /// SNR expressed as peak signal power over noise power
    Peak,
    /// SNR expressed as average signal power over noise power
    #[default]
    Average,
}

impl SnrConvention {
    pub fn noncentrality_factor(&self) -> f64 {
        match self {
            SnrConvention::Peak => PEAK_POWER_FACTOR,
            SnrConvention::Average => AVERAGE_POWER_FACTOR,
        }
    }

    pub fn from_peak_flag(is_peak_power: bool) -> Self {
        if is_peak_power {
            SnrConvention::Peak
        } else {
            SnrConvention::Average
        }
    }
}

impl fmt::Display for SnrConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnrConvention::Peak => write!(f, "peak"),
            SnrConvention::Average => write!(f, "average"),
        }
    }
}

impl FromStr for SnrConvention {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "peak" => Ok(SnrConvention::Peak),
            "average" | "avg" => Ok(SnrConvention::Average),
            _ => Err(format!("invalid SNR convention: {}", s)),
        }
    }
}
