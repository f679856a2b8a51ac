//! The ARX recurrence engine.

use std::collections::VecDeque;

use crate::noise::Disturbance;
use crate::polynomial::Polynomial;

/// A single-input single-output ARX process model.
///
/// Holds the `A` (output feedback) and `B` (input feedforward)
/// polynomials, a pure transport delay of `delay` samples, rolling
/// most-recent-first history windows for past outputs and past delayed
/// inputs, and an owned Gaussian disturbance source.
///
/// Construct with [`ModelArx::new`] (delay 1, no disturbance) and the
/// `with_*` builders, or parse a persisted record via
/// [`crate::parse_record`]. Advance the simulation one sample at a time
/// with [`ModelArx::step`].
///
/// The engine is single-threaded: setters and `step` mutate internal
/// state and must be externally serialised if an instance is shared.
#[derive(Debug)]
pub struct ModelArx {
    a: Polynomial,
    b: Polynomial,
    delay: usize,
    output_memory: VecDeque<f64>,
    input_memory: VecDeque<f64>,
    delay_buffer: VecDeque<f64>,
    disturbance: Disturbance,
}

impl ModelArx {
    /// Creates a model from output-feedback coefficients `a` and
    /// input-feedforward coefficients `b`.
    ///
    /// The transport delay defaults to 1 sample and the disturbance
    /// standard deviation to 0; use [`ModelArx::with_delay`],
    /// [`ModelArx::with_std_dev`] and [`ModelArx::with_seed`] to
    /// override. All history buffers start zero-filled.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Self {
        let mut model = Self {
            a: Polynomial::default(),
            b: Polynomial::default(),
            delay: 1,
            output_memory: VecDeque::new(),
            input_memory: VecDeque::new(),
            delay_buffer: VecDeque::new(),
            disturbance: Disturbance::new(0.0, None),
        };
        model.set_a(a);
        model.set_b(b);
        model.set_delay(1);
        model
    }

    /// Sets the transport delay (clamped to a minimum of 1).
    pub fn with_delay(mut self, delay: i64) -> Self {
        self.set_delay(delay);
        self
    }

    /// Sets the disturbance standard deviation (clamped to a minimum of 0).
    pub fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.set_std_dev(std_dev);
        self
    }

    /// Seeds the disturbance generator for reproducible simulations.
    ///
    /// Without this the generator is OS-seeded and output sequences are
    /// not reproducible across runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.disturbance.reseed(seed);
        self
    }

    /// Returns the `A` polynomial coefficients.
    pub fn a(&self) -> &[f64] {
        self.a.coefficients()
    }

    /// Returns the `B` polynomial coefficients.
    pub fn b(&self) -> &[f64] {
        self.b.coefficients()
    }

    /// Returns the effective transport delay in samples.
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Returns the effective disturbance standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.disturbance.std_dev()
    }

    /// Replaces the `A` polynomial.
    ///
    /// The output history window is resized to the new degree and
    /// zero-filled, discarding prior outputs.
    pub fn set_a(&mut self, coeffs: Vec<f64>) {
        self.output_memory = VecDeque::from(vec![0.0; coeffs.len()]);
        self.a.set_coefficients(coeffs);
    }

    /// Replaces the `B` polynomial.
    ///
    /// The delayed-input history window is resized to the new degree
    /// and zero-filled, discarding prior inputs.
    pub fn set_b(&mut self, coeffs: Vec<f64>) {
        self.input_memory = VecDeque::from(vec![0.0; coeffs.len()]);
        self.b.set_coefficients(coeffs);
    }

    /// Sets the transport delay, clamping values below 1 to 1.
    ///
    /// The delay line is reinitialised to zeros, so in-flight delayed
    /// samples are lost and the next `delay` steps see a zero input.
    pub fn set_delay(&mut self, delay: i64) {
        self.delay = delay.max(1) as usize;
        self.delay_buffer = VecDeque::from(vec![0.0; self.delay]);
    }

    /// Sets the disturbance standard deviation, clamping negative
    /// values to 0. A standard deviation at or below machine epsilon
    /// disables sampling entirely (disturbance is exactly `0.0`).
    pub fn set_std_dev(&mut self, std_dev: f64) {
        self.disturbance.set_std_dev(std_dev);
    }

    /// Reseeds the disturbance generator in place.
    pub fn reseed(&mut self, seed: u64) {
        self.disturbance.reseed(seed);
    }

    /// Advances the simulation by one sample and returns the output.
    ///
    /// The update order defines the ARX difference equation and is
    /// load-bearing:
    ///
    /// 1. the raw input enters the delay line and the `delay`-step-old
    ///    sample leaves it (zero while the line refills after a reset);
    /// 2. the delayed input is pushed onto the input window *before*
    ///    `B` is evaluated;
    /// 3. `A` and `B` are evaluated against the pre-update histories,
    ///    so `y[t]` never contributes to its own computation;
    /// 4. the freshly computed output is pushed onto the output window.
    ///
    /// Never fails; degenerate configurations (zero-degree polynomials,
    /// refilling delay line) contribute `0.0`.
    pub fn step(&mut self, u: f64) -> f64 {
        self.delay_buffer.push_back(u);
        let u_delayed = if self.delay_buffer.len() > self.delay {
            self.delay_buffer.pop_front().unwrap_or(0.0)
        } else {
            0.0
        };

        if !self.input_memory.is_empty() {
            self.input_memory.push_front(u_delayed);
            self.input_memory.pop_back();
        }

        let x_sum = self.b.evaluate(&self.input_memory);
        let ar_sum = -self.a.evaluate(&self.output_memory);
        let noise = self.disturbance.sample();

        let y = x_sum + ar_sum + noise;

        if !self.output_memory.is_empty() {
            self.output_memory.push_front(y);
            self.output_memory.pop_back();
        }

        y
    }
}
