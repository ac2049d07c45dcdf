// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Run-configuration documents for the BFT simulation harness.
//!
//! The harness reads one nested JSON document per run: run-level settings
//! (repetitions and seeding), validator settings (nodes, consensus
//! protocol, time limit, faults) and network settings (switch behavior and
//! topology). This crate builds, serializes and parses that document.
//!
//! The transformation from flat experiment parameters into the nested
//! document is one-way; the experiment name string, not this document, is
//! the reversible identifier (see `quorum-descriptor`).

pub mod run_config;

pub use run_config::{
    ConfigError, Distribution, FaultSettings, NetworkSettings, RunConfig, RunSettings,
    SwitchSettings, ValidatorSettings,
};
