//! Line-oriented text records for persisting model state.
//!
//! The format is keyword-matched and order-insensitive on input:
//!
//! ```text
//! Type: ModelARX
//! A: <c0> <c1> ...
//! B: <c0> <c1> ...
//! k: <integer >= 1>
//! stdDev: <real >= 0>
//! ```
//!
//! `#`-prefixed and blank lines are ignored. `Type:` is optional but
//! must match [`MODEL_TYPE`] when present; the other four fields are
//! mandatory. Serialisation always emits the fixed field order above.

use std::fmt::Write as _;
use std::str::FromStr;

use tracing::debug;

use crate::error::ArxError;
use crate::model::ModelArx;

/// Type identifier carried in the `Type:` line of persisted records.
pub const MODEL_TYPE: &str = "ModelARX";

/// Serialises a model to its text record.
///
/// Real values are written with `Display`, Rust's shortest decimal
/// representation that round-trips bit-exactly, so `parse_record`
/// recovers identical coefficients.
pub fn write_record(model: &ModelArx) -> String {
    let mut out = String::new();

    out.push_str("Type: ");
    out.push_str(MODEL_TYPE);
    out.push('\n');

    out.push_str("A:");
    for coeff in model.a() {
        let _ = write!(out, " {coeff}");
    }
    out.push('\n');

    out.push_str("B:");
    for coeff in model.b() {
        let _ = write!(out, " {coeff}");
    }
    out.push('\n');

    let _ = writeln!(out, "k: {}", model.delay());
    let _ = writeln!(out, "stdDev: {}", model.std_dev());

    out
}

/// Parses a text record into a model.
///
/// Lines are matched by leading keyword; later occurrences of a field
/// overwrite earlier ones. The returned model has zero-filled history
/// buffers and an OS-seeded disturbance generator (use
/// [`ModelArx::with_seed`] or [`ModelArx::reseed`] for reproducible
/// runs).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ArxError::MalformedValue`] | `k:`/`stdDev:` value absent or unparseable |
/// | [`ArxError::MissingFields`] | any of A/B/k/stdDev never appears |
/// | [`ArxError::TypeMismatch`] | `Type:` present but not [`MODEL_TYPE`] |
pub fn parse_record(text: &str) -> Result<ModelArx, ArxError> {
    let mut a: Option<Vec<f64>> = None;
    let mut b: Option<Vec<f64>> = None;
    let mut delay: Option<i64> = None;
    let mut std_dev: Option<f64> = None;

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(key) = tokens.next() else {
            continue;
        };
        if key.starts_with('#') {
            continue;
        }
        match key {
            "A:" => a = Some(collect_coefficients(tokens)),
            "B:" => b = Some(collect_coefficients(tokens)),
            "k:" => delay = Some(parse_value("k", tokens.next())?),
            "stdDev:" => std_dev = Some(parse_value("stdDev", tokens.next())?),
            "Type:" => {
                let got = tokens.next().unwrap_or("");
                if got != MODEL_TYPE {
                    return Err(ArxError::TypeMismatch {
                        expected: MODEL_TYPE,
                        got: got.to_string(),
                    });
                }
            }
            // Unknown keywords are skipped, matching comment handling.
            _ => {}
        }
    }

    let mut missing = Vec::new();
    if a.is_none() {
        missing.push("A");
    }
    if b.is_none() {
        missing.push("B");
    }
    if delay.is_none() {
        missing.push("k");
    }
    if std_dev.is_none() {
        missing.push("stdDev");
    }
    if !missing.is_empty() {
        return Err(ArxError::MissingFields { fields: missing });
    }

    let (a, b) = (a.unwrap_or_default(), b.unwrap_or_default());
    let (delay, std_dev) = (delay.unwrap_or(1), std_dev.unwrap_or(0.0));
    debug!(
        a_degree = a.len(),
        b_degree = b.len(),
        delay,
        std_dev,
        "parsed model record"
    );

    Ok(ModelArx::new(a, b)
        .with_delay(delay)
        .with_std_dev(std_dev))
}

/// Collects coefficient tokens until the first unparseable one.
///
/// Coefficient lines are read greedily; the first non-numeric token
/// ends the list rather than failing the parse.
fn collect_coefficients<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<f64> {
    tokens.map_while(|t| t.parse().ok()).collect()
}

fn parse_value<T: FromStr>(field: &'static str, token: Option<&str>) -> Result<T, ArxError> {
    let token = token.unwrap_or("");
    token.parse().map_err(|_| ArxError::MalformedValue {
        field,
        token: token.to_string(),
    })
}
