pub mod config;
pub mod constants;
pub mod detection;
pub mod error;
pub mod output;
pub mod statistics;
pub mod units;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::{DetectionConfig, SnrSweep};
pub use detection::{
    CurvePoint, DetectionCurve, detection_curve, evaluate_detection, evaluate_detection_default,
    solve_threshold, solve_threshold_for,
};
pub use error::{DetectionError, Result};
pub use units::{FalsePositiveRate, SnrConvention};
