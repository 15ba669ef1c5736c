mod measure;
mod noise;
mod signal;

pub use measure::{MonteCarloConfig, RateEstimate, detection_statistic, estimate_detection_rate};
pub use noise::{ComplexNoise, create_rng};
pub use signal::{amplitude_for_integrated_snr, generate_tone, signal_power};
