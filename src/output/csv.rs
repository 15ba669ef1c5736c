use super::Formatter;
use crate::detection::CurvePoint;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, point: &CurvePoint) -> String {
        format!(
            "{:.2},{:.2},{:.10}",
            point.snr_db, point.signal_level_db, point.detection_probability
        )
    }

    fn header(&self) -> Option<String> {
        Some("snr_db,signal_level_db,detection_probability".to_string())
    }
}
