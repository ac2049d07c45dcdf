//! Run-configuration document types and construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quorum_descriptor::Descriptor;

/// Errors when serializing or parsing a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    #[error("failed to process run configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The complete configuration document handed to the simulation harness.
///
/// Serialized camelCase with the field order the harness expects; there is
/// no schema version negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Number of simulation repetitions.
    pub num_runs: u32,
    /// Seed of the first run.
    pub starting_seed: i64,
    /// Multiplier applied to derive each subsequent run's seed.
    pub seed_multiplier: i64,
    pub validator_settings: ValidatorSettings,
    pub network_settings: NetworkSettings,
}

/// Settings for the validator nodes of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorSettings {
    pub num_nodes: u32,
    /// Number of consensus instances to reach before stopping.
    pub num_consensus: u32,
    /// Number of consensus programs run per node.
    pub num_programs: u32,
    pub base_time_limit: f64,
    pub node_processing_distribution: Distribution,
    pub consensus_protocol: String,
    pub fault_settings: FaultSettings,
}

/// A named probability distribution with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub distribution_type: String,
    pub parameters: Vec<f64>,
}

/// Fault injection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultSettings {
    pub num_faults: u32,
    pub fault_type: String,
    pub fault_parameters: Vec<i64>,
}

/// Network-level settings: switch behavior and topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    pub switch_settings: SwitchSettings,
    pub network_type: String,
    pub network_parameters: Vec<i64>,
}

/// Switch processing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchSettings {
    pub switch_processing_distribution: Distribution,
    pub message_channel_success_rate: f64,
}

/// Run-level settings a [`Descriptor`] does not carry.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub num_runs: u32,
    pub starting_seed: i64,
    pub seed_multiplier: i64,
    pub num_consensus: u32,
    pub num_programs: u32,
    pub message_channel_success_rate: f64,
}

impl RunConfig {
    /// Build the document for a decoded experiment descriptor.
    ///
    /// Simulation-shaped fields come from the descriptor; repetition,
    /// seeding and channel reliability come from `run`.
    pub fn for_descriptor(descriptor: &Descriptor, run: &RunSettings) -> Self {
        Self {
            num_runs: run.num_runs,
            starting_seed: run.starting_seed,
            seed_multiplier: run.seed_multiplier,
            validator_settings: ValidatorSettings {
                num_nodes: descriptor.num_nodes,
                num_consensus: run.num_consensus,
                num_programs: run.num_programs,
                base_time_limit: descriptor.base_time_limit,
                node_processing_distribution: Distribution {
                    distribution_type: descriptor.node_dist.clone(),
                    parameters: descriptor.node_params.clone(),
                },
                consensus_protocol: descriptor.protocol.clone(),
                fault_settings: FaultSettings {
                    num_faults: descriptor.num_faults,
                    fault_type: descriptor.fault_type.clone(),
                    fault_parameters: descriptor.fault_params.clone(),
                },
            },
            network_settings: NetworkSettings {
                switch_settings: SwitchSettings {
                    switch_processing_distribution: Distribution {
                        distribution_type: descriptor.switch_dist.clone(),
                        parameters: descriptor.switch_params.clone(),
                    },
                    message_channel_success_rate: run.message_channel_success_rate,
                },
                network_type: descriptor.topology.clone(),
                network_parameters: descriptor.topo_params.clone(),
            },
        }
    }

    /// Parse a document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize with a four-space indent, the layout the harness reads.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf).expect("BUG: serde_json produced invalid UTF-8"))
    }
}
