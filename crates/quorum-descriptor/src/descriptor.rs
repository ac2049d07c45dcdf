//! Experiment descriptor and its incremental builder.
//!
//! A [`Descriptor`] records the twelve parameters that identify one
//! simulation run. The field order below is the encoding's contract and
//! must never change without a version bump of the name prefix.

use std::fmt;

use crate::error::{FieldNotSetError, ValidationError};

/// Literal prefix of every encoded experiment name.
pub(crate) const NAME_PREFIX: &str = "json_n";

/// Literal tag anchoring the base time limit segment.
pub(crate) const TIME_LIMIT_TAG: &str = "btl";

/// Separator joining the twelve top-level fields.
pub(crate) const FIELD_SEPARATOR: char = '_';

/// Schema field names, used in every error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    NumNodes,
    BaseTimeLimit,
    NodeDist,
    NodeParams,
    Topology,
    TopoParams,
    SwitchDist,
    SwitchParams,
    Protocol,
    NumFaults,
    FaultType,
    FaultParams,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::NumNodes => "num_nodes",
            Field::BaseTimeLimit => "base_time_limit",
            Field::NodeDist => "node_dist",
            Field::NodeParams => "node_params",
            Field::Topology => "topology",
            Field::TopoParams => "topo_params",
            Field::SwitchDist => "switch_dist",
            Field::SwitchParams => "switch_params",
            Field::Protocol => "protocol",
            Field::NumFaults => "num_faults",
            Field::FaultType => "fault_type",
            Field::FaultParams => "fault_params",
        };
        write!(f, "{}", name)
    }
}

/// The structured record of twelve simulation parameters identifying one
/// experiment configuration.
///
/// A descriptor is transient: it is either assembled through
/// [`DescriptorBuilder`] before one encode call, or produced whole by
/// [`Descriptor::decode`]. The encoded name string is the durable artifact.
///
/// String-valued fields (`node_dist`, `topology`, `switch_dist`, `protocol`,
/// `fault_type`) that themselves contain `_` are accepted but produce
/// undefined decode results, since `_` is also the top-level separator of
/// the encoded form. The scheme has no escaping mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Node count (at least 1).
    pub num_nodes: u32,
    /// Consensus time limit, rendered with exactly one decimal digit.
    pub base_time_limit: f64,
    /// Node processing distribution name.
    pub node_dist: String,
    /// Node distribution parameters.
    pub node_params: Vec<f64>,
    /// Network topology name.
    pub topology: String,
    /// Topology parameters (may be empty).
    pub topo_params: Vec<i64>,
    /// Switch processing distribution name.
    pub switch_dist: String,
    /// Switch distribution parameters.
    pub switch_params: Vec<f64>,
    /// Consensus protocol name.
    pub protocol: String,
    /// Number of faulty nodes.
    pub num_faults: u32,
    /// Fault behavior name.
    pub fault_type: String,
    /// Fault parameters (may be empty).
    pub fault_params: Vec<i64>,
}

impl Descriptor {
    /// Check that every field value is inside its declared domain.
    ///
    /// Non-finite floats are rejected because their rendered text (`NaN`,
    /// `inf`) cannot be re-parsed by the decoder, and empty string fields
    /// are rejected because an empty segment is indistinguishable from a
    /// missing separator.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.num_nodes == 0 {
            return Err(ValidationError::NoNodes);
        }
        check_finite(Field::BaseTimeLimit, &[self.base_time_limit])?;
        check_finite(Field::NodeParams, &self.node_params)?;
        check_finite(Field::SwitchParams, &self.switch_params)?;
        check_non_empty(Field::NodeDist, &self.node_dist)?;
        check_non_empty(Field::Topology, &self.topology)?;
        check_non_empty(Field::SwitchDist, &self.switch_dist)?;
        check_non_empty(Field::Protocol, &self.protocol)?;
        check_non_empty(Field::FaultType, &self.fault_type)?;
        Ok(())
    }
}

fn check_finite(field: Field, values: &[f64]) -> Result<(), ValidationError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(value) => Err(ValidationError::NonFinite {
            field,
            value: *value,
        }),
        None => Ok(()),
    }
}

fn check_non_empty(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::EmptyString { field })
    } else {
        Ok(())
    }
}

/// Incremental assembly of a [`Descriptor`].
///
/// Setters consume and return the builder so assembly can be chained;
/// getters report [`FieldNotSetError`] when read before the corresponding
/// setter. [`DescriptorBuilder::finish`] walks an explicit checklist of all
/// twelve fields in schema order and reports the first one still unset.
///
/// The builder is plain data: it is not thread-safe for concurrent mutation
/// of a shared instance, and a single instance should not represent more
/// than one encode operation at a time.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    num_nodes: Option<u32>,
    base_time_limit: Option<f64>,
    node_dist: Option<String>,
    node_params: Option<Vec<f64>>,
    topology: Option<String>,
    topo_params: Option<Vec<i64>>,
    switch_dist: Option<String>,
    switch_params: Option<Vec<f64>>,
    protocol: Option<String>,
    num_faults: Option<u32>,
    fault_type: Option<String>,
    fault_params: Option<Vec<i64>>,
}

impl DescriptorBuilder {
    /// Create a builder with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_nodes(mut self, num_nodes: u32) -> Self {
        self.num_nodes = Some(num_nodes);
        self
    }

    pub fn with_base_time_limit(mut self, base_time_limit: f64) -> Self {
        self.base_time_limit = Some(base_time_limit);
        self
    }

    pub fn with_node_dist(mut self, node_dist: impl Into<String>) -> Self {
        self.node_dist = Some(node_dist.into());
        self
    }

    pub fn with_node_params(mut self, node_params: Vec<f64>) -> Self {
        self.node_params = Some(node_params);
        self
    }

    pub fn with_topology(mut self, topology: impl Into<String>) -> Self {
        self.topology = Some(topology.into());
        self
    }

    pub fn with_topo_params(mut self, topo_params: Vec<i64>) -> Self {
        self.topo_params = Some(topo_params);
        self
    }

    pub fn with_switch_dist(mut self, switch_dist: impl Into<String>) -> Self {
        self.switch_dist = Some(switch_dist.into());
        self
    }

    pub fn with_switch_params(mut self, switch_params: Vec<f64>) -> Self {
        self.switch_params = Some(switch_params);
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn with_num_faults(mut self, num_faults: u32) -> Self {
        self.num_faults = Some(num_faults);
        self
    }

    pub fn with_fault_type(mut self, fault_type: impl Into<String>) -> Self {
        self.fault_type = Some(fault_type.into());
        self
    }

    pub fn with_fault_params(mut self, fault_params: Vec<i64>) -> Self {
        self.fault_params = Some(fault_params);
        self
    }

    pub fn num_nodes(&self) -> Result<u32, FieldNotSetError> {
        self.num_nodes.ok_or(not_set(Field::NumNodes))
    }

    pub fn base_time_limit(&self) -> Result<f64, FieldNotSetError> {
        self.base_time_limit.ok_or(not_set(Field::BaseTimeLimit))
    }

    pub fn node_dist(&self) -> Result<&str, FieldNotSetError> {
        self.node_dist.as_deref().ok_or(not_set(Field::NodeDist))
    }

    pub fn node_params(&self) -> Result<&[f64], FieldNotSetError> {
        self.node_params.as_deref().ok_or(not_set(Field::NodeParams))
    }

    pub fn topology(&self) -> Result<&str, FieldNotSetError> {
        self.topology.as_deref().ok_or(not_set(Field::Topology))
    }

    pub fn topo_params(&self) -> Result<&[i64], FieldNotSetError> {
        self.topo_params.as_deref().ok_or(not_set(Field::TopoParams))
    }

    pub fn switch_dist(&self) -> Result<&str, FieldNotSetError> {
        self.switch_dist.as_deref().ok_or(not_set(Field::SwitchDist))
    }

    pub fn switch_params(&self) -> Result<&[f64], FieldNotSetError> {
        self.switch_params
            .as_deref()
            .ok_or(not_set(Field::SwitchParams))
    }

    pub fn protocol(&self) -> Result<&str, FieldNotSetError> {
        self.protocol.as_deref().ok_or(not_set(Field::Protocol))
    }

    pub fn num_faults(&self) -> Result<u32, FieldNotSetError> {
        self.num_faults.ok_or(not_set(Field::NumFaults))
    }

    pub fn fault_type(&self) -> Result<&str, FieldNotSetError> {
        self.fault_type.as_deref().ok_or(not_set(Field::FaultType))
    }

    pub fn fault_params(&self) -> Result<&[i64], FieldNotSetError> {
        self.fault_params
            .as_deref()
            .ok_or(not_set(Field::FaultParams))
    }

    /// Assemble the descriptor, reporting the first unset field in schema
    /// order, then validating every value against its declared domain.
    pub fn finish(self) -> Result<Descriptor, ValidationError> {
        let descriptor = Descriptor {
            num_nodes: self.num_nodes.ok_or(not_set(Field::NumNodes))?,
            base_time_limit: self.base_time_limit.ok_or(not_set(Field::BaseTimeLimit))?,
            node_dist: self.node_dist.ok_or(not_set(Field::NodeDist))?,
            node_params: self.node_params.ok_or(not_set(Field::NodeParams))?,
            topology: self.topology.ok_or(not_set(Field::Topology))?,
            topo_params: self.topo_params.ok_or(not_set(Field::TopoParams))?,
            switch_dist: self.switch_dist.ok_or(not_set(Field::SwitchDist))?,
            switch_params: self.switch_params.ok_or(not_set(Field::SwitchParams))?,
            protocol: self.protocol.ok_or(not_set(Field::Protocol))?,
            num_faults: self.num_faults.ok_or(not_set(Field::NumFaults))?,
            fault_type: self.fault_type.ok_or(not_set(Field::FaultType))?,
            fault_params: self.fault_params.ok_or(not_set(Field::FaultParams))?,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

fn not_set(field: Field) -> FieldNotSetError {
    FieldNotSetError { field }
}

impl From<Descriptor> for DescriptorBuilder {
    /// Reopen a decoded descriptor for field-by-field mutation.
    fn from(d: Descriptor) -> Self {
        Self {
            num_nodes: Some(d.num_nodes),
            base_time_limit: Some(d.base_time_limit),
            node_dist: Some(d.node_dist),
            node_params: Some(d.node_params),
            topology: Some(d.topology),
            topo_params: Some(d.topo_params),
            switch_dist: Some(d.switch_dist),
            switch_params: Some(d.switch_params),
            protocol: Some(d.protocol),
            num_faults: Some(d.num_faults),
            fault_type: Some(d.fault_type),
            fault_params: Some(d.fault_params),
        }
    }
}
