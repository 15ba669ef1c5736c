use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tonedetect::config::{DetectionConfig, SnrSweep};
use tonedetect::output::{OutputFormat, render_curve};
use tonedetect::{SnrConvention, detection_curve, solve_threshold_for};

#[derive(Parser, Debug)]
#[command(name = "tonedetect")]
#[command(
    about = "Detection threshold and detection probability for a tone of unknown phase in white noise",
    long_about = None
)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Acceptable false positives per year
    #[arg(long)]
    false_positives_per_year: Option<f64>,

    /// Observation window in milliseconds
    #[arg(long)]
    duration_ms: Option<f64>,

    /// White noise density in dB
    #[arg(long, allow_hyphen_values = true)]
    noise_density_db: Option<f64>,

    /// First SNR of the sweep in dB
    #[arg(long, allow_hyphen_values = true)]
    start_db: Option<f64>,

    /// Last SNR of the sweep in dB
    #[arg(long, allow_hyphen_values = true)]
    stop_db: Option<f64>,

    /// SNR step in dB
    #[arg(long)]
    step_db: Option<f64>,

    /// SNR convention: peak, average
    #[arg(long, value_enum)]
    convention: Option<SnrConvention>,

    /// Only print the per-trial false-positive rate and threshold
    #[arg(long)]
    threshold_only: bool,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_config(args: &Args) -> Result<DetectionConfig> {
    let mut config = match &args.config {
        Some(path) => DetectionConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DetectionConfig::default(),
    };

    if let Some(rate) = args.false_positives_per_year {
        config.false_positives_per_year = rate;
    }
    if let Some(ms) = args.duration_ms {
        config.signal_duration_ms = ms;
    }
    if let Some(db) = args.noise_density_db {
        config.white_noise_density_db = db;
    }
    if let Some(convention) = args.convention {
        config.convention = convention;
    }
    config.sweep = SnrSweep::new(
        args.start_db.unwrap_or(config.sweep.start_db),
        args.stop_db.unwrap_or(config.sweep.stop_db),
        args.step_db.unwrap_or(config.sweep.step_db),
    );

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = build_config(&args)?;
    log::debug!("Configuration: {:?}", config);

    if args.threshold_only {
        let rate = config.false_positive_rate()?;
        let threshold_db = solve_threshold_for(rate);
        match args.format {
            OutputFormat::Text => {
                println!("False-positive rate per trial: {}", rate);
                println!("Threshold: {:.4} dB", threshold_db);
            }
            OutputFormat::Csv => {
                println!("false_positive_rate,threshold_db");
                println!("{:e},{:.6}", rate.value(), threshold_db);
            }
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "false_positive_rate": rate.value(),
                    "threshold_db": threshold_db,
                });
                println!("{}", value);
            }
        }
        return Ok(());
    }

    let curve = detection_curve(&config).context("Failed to evaluate detection curve")?;
    print!("{}", render_curve(&curve, args.format));

    Ok(())
}
