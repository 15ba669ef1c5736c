pub mod curve;
pub mod probability;
pub mod threshold;

pub use curve::{CurvePoint, DetectionCurve, detection_curve};
pub use probability::{evaluate_detection, evaluate_detection_default};
pub use threshold::{solve_threshold, solve_threshold_for};
