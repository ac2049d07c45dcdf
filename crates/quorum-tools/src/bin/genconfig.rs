//! Generate a harness run-configuration document from an experiment name.
//!
//! Usage: `genconfig json_n8_btl2.5_uniform_[1.0]_fc_[8, 4]_... --num-runs 5`

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

use quorum_descriptor::Descriptor;
use quorum_harness::{RunConfig, RunSettings};

#[derive(Parser, Debug)]
#[command(name = "genconfig")]
#[command(about = "Generate a harness run configuration from an experiment name")]
struct Args {
    /// Encoded experiment name (the result directory leaf name)
    name: String,

    /// Number of simulation repetitions
    #[arg(long, default_value = "1")]
    num_runs: u32,

    /// Seed of the first run
    #[arg(long, default_value = "0")]
    starting_seed: i64,

    /// Multiplier deriving each subsequent run's seed
    #[arg(long, default_value = "1")]
    seed_multiplier: i64,

    /// Consensus instances to reach before stopping
    #[arg(long, default_value = "1")]
    num_consensus: u32,

    /// Consensus programs run per node
    #[arg(long, default_value = "1")]
    num_programs: u32,

    /// Message channel success rate
    #[arg(long, default_value = "1.0")]
    success_rate: f64,

    /// Write the document here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    quorum_tools::init_logging();

    let args = Args::parse();

    let descriptor = match Descriptor::decode(&args.name) {
        Ok(d) => d,
        Err(e) => {
            error!("'{}' is not an experiment name: {}", args.name, e);
            process::exit(1);
        }
    };

    let run = RunSettings {
        num_runs: args.num_runs,
        starting_seed: args.starting_seed,
        seed_multiplier: args.seed_multiplier,
        num_consensus: args.num_consensus,
        num_programs: args.num_programs,
        message_channel_success_rate: args.success_rate,
    };

    let json = match RunConfig::for_descriptor(&descriptor, &run).to_json_pretty() {
        Ok(json) => json,
        Err(e) => {
            error!("failed to serialize run configuration: {}", e);
            process::exit(1);
        }
    };

    match &args.out {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &json) {
                error!("failed to write '{}': {}", path.display(), e);
                process::exit(1);
            }
            info!("wrote run configuration to {}", path.display());
        }
        None => println!("{}", json),
    }
}
