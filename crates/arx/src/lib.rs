//! # talos-arx
//!
//! Discrete-time simulator for a single-input single-output ARX
//! (AutoRegressive with eXogenous input) process model.
//!
//! The model realises the difference equation
//!
//! ```text
//! y[t] + a1*y[t-1] + ... + an*y[t-n] = b1*u[t-k] + ... + bm*u[t-k-m+1] + e[t]
//! ```
//!
//! where `k` is a pure transport delay in samples and `e[t]` is additive
//! zero-mean Gaussian disturbance.
//!
//! # Quick start
//!
//! ```rust
//! use talos_arx::ModelArx;
//!
//! // First-order plant with unit feedforward gain and a 2-sample delay.
//! let mut model = ModelArx::new(vec![-0.5], vec![1.0]).with_delay(2);
//!
//! // Step response from zero initial state.
//! let response: Vec<f64> = (0..5).map(|_| model.step(1.0)).collect();
//! assert_eq!(response, vec![0.0, 0.0, 1.0, 1.5, 1.75]);
//! ```
//!
//! # Persisted records
//!
//! Models round-trip through a line-oriented text format via
//! [`write_record`] and [`parse_record`]:
//!
//! ```text
//! Type: ModelARX
//! A: -0.5
//! B: 1
//! k: 2
//! stdDev: 0
//! ```

mod error;
mod model;
mod polynomial;
mod record;

pub(crate) mod noise;

pub use error::ArxError;
pub use model::ModelArx;
pub use polynomial::Polynomial;
pub use record::{MODEL_TYPE, parse_record, write_record};
