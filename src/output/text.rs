use super::Formatter;
use crate::detection::{CurvePoint, DetectionCurve};

pub struct TextFormatter {
    threshold_db: f64,
    false_positive_rate: f64,
    convention: String,
}

impl TextFormatter {
    pub fn new(curve: &DetectionCurve) -> Self {
        Self {
            threshold_db: curve.threshold_db,
            false_positive_rate: curve.false_positive_rate,
            convention: curve.convention.to_string(),
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, point: &CurvePoint) -> String {
        format!(
            "SNR: {:>6.2} dB  level: {:>8.2} dB  Pd: {:>7.2}%",
            point.snr_db,
            point.signal_level_db,
            point.detection_probability * 100.0
        )
    }

    fn header(&self) -> Option<String> {
        Some(format!(
            "Threshold: {:.2} dB (false-positive rate {:e} per trial, {} power SNR)",
            self.threshold_db, self.false_positive_rate, self.convention
        ))
    }
}
