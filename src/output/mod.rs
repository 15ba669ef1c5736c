mod csv;
mod json;
mod text;

use crate::detection::{CurvePoint, DetectionCurve};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

pub trait Formatter: Send {
    fn format(&self, point: &CurvePoint) -> String;

    fn header(&self) -> Option<String> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, curve: &DetectionCurve) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(curve)),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(curve)),
    }
}

/// Render a whole curve, one line per point after the optional header
pub fn render_curve(curve: &DetectionCurve, format: OutputFormat) -> String {
    let formatter = create_formatter(format, curve);
    let mut lines = Vec::with_capacity(curve.points.len() + 1);
    if let Some(header) = formatter.header() {
        lines.push(header);
    }
    lines.extend(curve.points.iter().map(|p| formatter.format(p)));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::SnrConvention;

    fn sample_curve() -> DetectionCurve {
        DetectionCurve {
            false_positive_rate: 1e-6,
            threshold_db: 11.4036,
            convention: SnrConvention::Average,
            points: vec![
                CurvePoint {
                    snr_db: 10.0,
                    signal_level_db: -164.0,
                    detection_probability: 0.25,
                },
                CurvePoint {
                    snr_db: 12.0,
                    signal_level_db: -162.0,
                    detection_probability: 0.75,
                },
            ],
        }
    }

    #[test]
    fn test_csv_render() {
        let out = render_curve(&sample_curve(), OutputFormat::Csv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "snr_db,signal_level_db,detection_probability");
        assert_eq!(lines[1], "10.00,-164.00,0.2500000000");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_json_lines_parse() {
        let out = render_curve(&sample_curve(), OutputFormat::Json);
        let values: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values[1]["snr_db"], 12.0);
        assert_eq!(values[1]["detection_probability"], 0.75);
        assert_eq!(values[0]["convention"], "average");
    }

    #[test]
    fn test_text_render_has_threshold() {
        let out = render_curve(&sample_curve(), OutputFormat::Text);
        assert!(out.starts_with("Threshold: 11.40 dB"));
        assert!(out.contains("25.00%"));
    }
}
