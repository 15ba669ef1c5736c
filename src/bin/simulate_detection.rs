use anyhow::{Context, Result};
use clap::Parser;

use tonedetect::simulation::{MonteCarloConfig, estimate_detection_rate};
use tonedetect::{SnrConvention, SnrSweep, evaluate_detection, solve_threshold};

#[derive(Parser, Debug)]
#[command(name = "simulate_detection")]
#[command(about = "Compare analytic detection probability with a Monte-Carlo detector")]
struct Args {
    /// False-positive rate per trial
    #[arg(short, long, default_value_t = 1e-2)]
    rate: f64,

    /// Trials per SNR point
    #[arg(short, long, default_value_t = 20_000)]
    trials: usize,

    /// Samples coherently integrated per trial
    #[arg(short = 'n', long, default_value_t = 32)]
    samples: usize,

    /// Base seed for reproducibility
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// SNR range in dB: "start:stop:step"
    #[arg(long, default_value = "0:20:1")]
    snr: String,
}

fn parse_range(s: &str) -> Result<SnrSweep> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        anyhow::bail!("SNR range must be start:stop:step");
    }
    let start: f64 = parts[0].parse().context("Invalid start value")?;
    let stop: f64 = parts[1].parse().context("Invalid stop value")?;
    let step: f64 = parts[2].parse().context("Invalid step value")?;

    let sweep = SnrSweep::new(start, stop, step);
    sweep.validate().context("Invalid SNR range")?;
    Ok(sweep)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let threshold_db = solve_threshold(args.rate).context("Invalid false-positive rate")?;
    let snrs = parse_range(&args.snr)?;

    let mut mc = MonteCarloConfig {
        samples_per_trial: args.samples,
        trials: args.trials,
        ..Default::default()
    };

    println!("snr_db,analytic,empirical,std_error");

    mc = mc.with_seed(args.seed);
    let noise_only = estimate_detection_rate(threshold_db, None, &mc)?;
    println!(
        "noise,{:.6},{:.6},{:.6}",
        args.rate,
        noise_only.rate(),
        noise_only.std_error(args.rate)
    );

    for (i, snr_db) in snrs.values().enumerate() {
        let analytic = evaluate_detection(threshold_db, snr_db, SnrConvention::Average)?;
        mc = mc.with_seed(args.seed + 1 + i as u64);
        let empirical = estimate_detection_rate(threshold_db, Some(snr_db), &mc)?;
        println!(
            "{:.2},{:.6},{:.6},{:.6}",
            snr_db,
            analytic,
            empirical.rate(),
            empirical.std_error(analytic)
        );
    }

    Ok(())
}
