//! Gaussian disturbance source owned by a model instance.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// A stateful zero-mean Gaussian sample source.
///
/// Each model owns exactly one `Disturbance`, so independent model
/// instances never interfere through shared RNG state. When the
/// (clamped) standard deviation is not strictly above machine epsilon,
/// sampling short-circuits to exactly `0.0` without advancing the RNG,
/// keeping the noiseless case deterministic.
#[derive(Debug)]
pub(crate) struct Disturbance {
    std_dev: f64,
    normal: Option<Normal<f64>>,
    rng: StdRng,
}

impl Disturbance {
    /// Builds a disturbance source with the given standard deviation.
    ///
    /// `seed` of `None` sources the RNG from the OS (non-reproducible
    /// across runs); `Some(s)` gives a deterministic sample sequence.
    pub(crate) fn new(std_dev: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let mut disturbance = Self {
            std_dev: 0.0,
            normal: None,
            rng,
        };
        disturbance.set_std_dev(std_dev);
        disturbance
    }

    /// Returns the effective (clamped) standard deviation.
    pub(crate) fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Sets the standard deviation, clamping negative values to `0.0`.
    pub(crate) fn set_std_dev(&mut self, std_dev: f64) {
        self.std_dev = std_dev.max(0.0);
        self.normal = if self.std_dev > f64::EPSILON {
            // Construction cannot fail here: std_dev is positive and finite
            // or +inf, both accepted by Normal.
            Normal::new(0.0, self.std_dev).ok()
        } else {
            None
        };
    }

    /// Replaces the RNG with a deterministically seeded one.
    pub(crate) fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draws one disturbance sample.
    pub(crate) fn sample(&mut self) -> f64 {
        match &self.normal {
            Some(normal) => normal.sample(&mut self.rng),
            None => 0.0,
        }
    }
}
