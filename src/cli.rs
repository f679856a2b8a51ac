use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Talos discrete-time ARX process simulator.
#[derive(Parser)]
#[command(
    name = "talos",
    version,
    about = "Discrete-time ARX process model simulator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a model over an input sequence.
    Simulate(SimulateArgs),
    /// Parse a model record and print a summary.
    Inspect(InspectArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to the model record file.
    #[arg(short, long)]
    pub model: PathBuf,

    /// Path to the input sequence (whitespace-separated values; `#`
    /// comment lines and blanks are skipped).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output sequence (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the disturbance generator (OS-seeded if omitted).
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the model record file.
    #[arg(short, long)]
    pub model: PathBuf,
}
