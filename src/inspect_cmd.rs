//! Inspect command: parse a model record and print its configuration.

use std::fs;

use anyhow::{Context, Result};

use talos_arx::{MODEL_TYPE, parse_record};

use crate::cli::InspectArgs;

/// Parse the record and print a one-screen summary.
pub fn run(args: InspectArgs) -> Result<()> {
    let record = fs::read_to_string(&args.model)
        .with_context(|| format!("failed to read model file: {}", args.model.display()))?;
    let model = parse_record(&record)
        .with_context(|| format!("failed to parse model record: {}", args.model.display()))?;

    println!("Type:    {MODEL_TYPE}");
    println!("A:       {:?}  (degree {})", model.a(), model.a().len());
    println!("B:       {:?}  (degree {})", model.b(), model.b().len());
    println!("k:       {}", model.delay());
    println!("stdDev:  {}", model.std_dev());
    Ok(())
}
