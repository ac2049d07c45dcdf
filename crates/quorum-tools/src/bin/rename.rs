//! Plan and apply bulk renames of experiment result directories.
//!
//! Dry-run by default: the plan is printed and nothing is touched until
//! `--apply` is given. Applying cannot be undone.
//!
//! Usage: `rename <results-dir> --topology fc --set-topo-params 8,4 --apply`

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info, warn};

use quorum_tools::{apply_renames, rewrite_names, scan_results_dir, RewriteOutcome};

#[derive(Parser, Debug)]
#[command(name = "rename")]
#[command(about = "Plan and apply bulk renames of experiment result directories")]
struct Args {
    /// Folder holding the experiment result directories
    results_dir: PathBuf,

    /// Only rewrite experiments with this topology
    #[arg(long)]
    topology: Option<String>,

    /// Replace the topology parameter list (comma-separated, e.g. "8,4")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    set_topo_params: Option<Vec<i64>>,

    /// Replace the fault count
    #[arg(long)]
    set_num_faults: Option<u32>,

    /// Replace the fault parameter list (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    set_fault_params: Option<Vec<i64>>,

    /// Apply the renames instead of printing the plan. Cannot be undone
    #[arg(long)]
    apply: bool,
}

fn main() {
    quorum_tools::init_logging();

    let args = Args::parse();

    if !args.results_dir.is_dir() {
        error!("'{}' is not a directory", args.results_dir.display());
        process::exit(1);
    }

    let mutates = args.set_topo_params.is_some()
        || args.set_num_faults.is_some()
        || args.set_fault_params.is_some();
    if !mutates {
        error!("nothing to change: pass at least one --set-* option");
        process::exit(1);
    }

    let names = match scan_results_dir(&args.results_dir) {
        Ok(names) => names,
        Err(e) => {
            error!("failed to scan '{}': {}", args.results_dir.display(), e);
            process::exit(1);
        }
    };
    info!("found {} experiment directories", names.len());

    let outcomes = rewrite_names(&names, |descriptor| {
        if let Some(topology) = &args.topology {
            if !descriptor.topology.eq_ignore_ascii_case(topology) {
                return false;
            }
        }
        if let Some(topo_params) = &args.set_topo_params {
            descriptor.topo_params = topo_params.clone();
        }
        if let Some(num_faults) = args.set_num_faults {
            descriptor.num_faults = num_faults;
        }
        if let Some(fault_params) = &args.set_fault_params {
            descriptor.fault_params = fault_params.clone();
        }
        true
    });

    let mut plans = Vec::new();
    for outcome in outcomes {
        match outcome {
            RewriteOutcome::Renamed(plan) if plan.is_noop() => {
                debug!("unchanged: {}", plan.before);
            }
            RewriteOutcome::Renamed(plan) => {
                info!("plan: {} -> {}", plan.before, plan.after);
                plans.push(plan);
            }
            RewriteOutcome::Skipped { name } => debug!("skipped: {}", name),
            RewriteOutcome::Failed { name, error } => warn!("cannot rewrite '{}': {}", name, error),
        }
    }

    if plans.is_empty() {
        info!("nothing to rename");
        return;
    }

    if !args.apply {
        info!("dry run: {} renames planned, re-run with --apply", plans.len());
        return;
    }

    match apply_renames(&args.results_dir, &plans) {
        Ok(applied) => info!("applied {} renames", applied),
        Err(e) => {
            error!("rename failed: {}", e);
            process::exit(1);
        }
    }
}
