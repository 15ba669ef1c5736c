use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex tone `amplitude * exp(j (2 pi f n + phase))`
///
/// `cycles_per_sample` is the normalized frequency f.
pub fn generate_tone(
    num_samples: usize,
    cycles_per_sample: f64,
    amplitude: f64,
    phase: f64,
) -> Vec<Complex64> {
    (0..num_samples)
        .map(|n| Complex64::from_polar(amplitude, 2.0 * PI * cycles_per_sample * n as f64 + phase))
        .collect()
}

/// Mean power `|x|^2` over the samples
pub fn signal_power(signal: &[Complex64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|x| x.norm_sqr()).sum::<f64>() / signal.len() as f64
}

/// Tone amplitude giving `snr_db` after coherent integration over
/// `num_samples` samples in complex noise of unit power
pub fn amplitude_for_integrated_snr(snr_db: f64, num_samples: usize) -> f64 {
    (10f64.powf(snr_db / 10.0) / num_samples as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_has_constant_power() {
        let tone = generate_tone(64, 0.125, 0.5, 1.0);
        assert_eq!(tone.len(), 64);
        assert!((signal_power(&tone) - 0.25).abs() < 1e-12);
        for x in &tone {
            assert!((x.norm() - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tone_frequency() {
        // Quarter cycle per sample rotates by pi/2 each step
        let tone = generate_tone(4, 0.25, 1.0, 0.0);
        assert!((tone[1] - Complex64::new(0.0, 1.0)).norm() < 1e-12);
        assert!((tone[2] - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_amplitude_for_integrated_snr() {
        let a = amplitude_for_integrated_snr(10.0, 10);
        assert!((a - 1.0).abs() < 1e-12);
        assert_eq!(signal_power(&[]), 0.0);
    }
}
