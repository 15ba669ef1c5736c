use super::Formatter;
use crate::detection::{CurvePoint, DetectionCurve};
use crate::units::SnrConvention;

/// JSON Lines, one object per curve point
pub struct JsonFormatter {
    threshold_db: f64,
    convention: SnrConvention,
}

impl JsonFormatter {
    pub fn new(curve: &DetectionCurve) -> Self {
        Self {
            threshold_db: curve.threshold_db,
            convention: curve.convention,
        }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, point: &CurvePoint) -> String {
        serde_json::json!({
            "snr_db": point.snr_db,
            "signal_level_db": point.signal_level_db,
            "detection_probability": point.detection_probability,
            "threshold_db": self.threshold_db,
            "convention": self.convention,
        })
        .to_string()
    }
}
