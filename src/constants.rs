//! Numeric constants for the detection statistics
//!
//! These constants bound the series evaluation of the non-central
//! chi-squared distribution and fix the time base used to turn annual
//! false-alarm budgets into per-trial probabilities.

/// Absolute error bound on the truncated Poisson-mixture series.
/// Half of the budget is spent on each side of the Poisson mode.
pub const SERIES_TOLERANCE: f64 = 1e-10;

/// Maximum number of series terms summed before giving up.
/// Covers non-centrality well beyond 40 dB.
pub const MAX_SERIES_TERMS: usize = 1_000_000;

/// Seconds in a (non-leap) year, used for annual false-positive budgets.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Non-centrality multiplier for peak-power SNR.
pub const PEAK_POWER_FACTOR: f64 = 1.0;

/// Non-centrality multiplier for average-power SNR.
pub const AVERAGE_POWER_FACTOR: f64 = 2.0;

/// Largest number of points a single SNR sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;
