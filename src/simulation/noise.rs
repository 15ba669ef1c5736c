use num_complex::Complex64;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{DetectionError, Result};

pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Circularly symmetric complex Gaussian noise source
///
/// Real and imaginary parts are independent with variance `noise_power / 2`.
pub struct ComplexNoise {
    normal: Normal<f64>,
}

impl ComplexNoise {
    pub fn new(noise_power: f64) -> Result<Self> {
        let normal = Normal::new(0.0, (noise_power / 2.0).sqrt())
            .map_err(|e| DetectionError::InvalidInput(format!("noise power {}: {}", noise_power, e)))?;
        Ok(Self { normal })
    }

    pub fn sample(&self, rng: &mut ChaCha8Rng) -> Complex64 {
        Complex64::new(self.normal.sample(rng), self.normal.sample(rng))
    }

    pub fn add_to(&self, signal: &mut [Complex64], rng: &mut ChaCha8Rng) {
        for x in signal.iter_mut() {
            *x += self.sample(rng);
        }
    }
}
