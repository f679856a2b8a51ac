//! Simulate command: run a persisted model over an input sequence.

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use talos_arx::parse_record;

use crate::cli::SimulateArgs;

/// Run the simulation pipeline: load model, stream inputs, write outputs.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();

    let record = fs::read_to_string(&args.model)
        .with_context(|| format!("failed to read model file: {}", args.model.display()))?;
    let mut model = parse_record(&record)
        .with_context(|| format!("failed to parse model record: {}", args.model.display()))?;
    if let Some(seed) = args.seed {
        model.reseed(seed);
    }

    let input_text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file: {}", args.input.display()))?;
    let inputs = parse_inputs(&input_text)?;
    info!(
        n_samples = inputs.len(),
        delay = model.delay(),
        std_dev = model.std_dev(),
        seeded = args.seed.is_some(),
        "simulating"
    );

    let mut out = String::with_capacity(inputs.len() * 16);
    for &u in &inputs {
        let y = model.step(u);
        let _ = writeln!(out, "{y}");
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &out)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => print!("{out}"),
    }
    Ok(())
}

/// Parses a whitespace-separated value sequence, skipping `#` comment
/// lines and blanks (same lexical rules as the model record).
fn parse_inputs(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value: f64 = token
                .parse()
                .with_context(|| format!("invalid input value '{}' on line {}", token, lineno + 1))?;
            values.push(value);
        }
    }
    Ok(values)
}
