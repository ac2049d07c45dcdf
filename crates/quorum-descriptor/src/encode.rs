//! Descriptor → name-string rendering.
//!
//! The encoded form is a fixed sequence of twelve field renderings joined
//! by `_`, carrying the `json_n` prefix and the `btl` time-limit tag:
//!
//! ```text
//! json_n8_btl2.5_uniform_[1.0]_fc_[8, 4]_normal_[0.0, 1.0]_pbft_1_crash_[3]
//! ```
//!
//! Each field type has its own renderer so the surface form of every
//! segment is testable in isolation.

use crate::descriptor::{Descriptor, FIELD_SEPARATOR, NAME_PREFIX, TIME_LIMIT_TAG};
use crate::error::ValidationError;

impl Descriptor {
    /// Render this descriptor to its canonical name string.
    ///
    /// Pure and deterministic: encoding the same field values always yields
    /// a byte-identical string. Fails with [`ValidationError`] when a value
    /// is outside its declared domain; no partial output is produced.
    ///
    /// A `_` inside a string-valued field is not escaped and makes the
    /// resulting name ambiguous to decode.
    pub fn encode(&self) -> Result<String, ValidationError> {
        self.validate()?;
        let segments = [
            format!("{}{}", NAME_PREFIX, self.num_nodes),
            render_time_limit(self.base_time_limit),
            self.node_dist.clone(),
            render_float_list(&self.node_params),
            self.topology.clone(),
            render_int_list(&self.topo_params),
            self.switch_dist.clone(),
            render_float_list(&self.switch_params),
            self.protocol.clone(),
            self.num_faults.to_string(),
            self.fault_type.clone(),
            render_int_list(&self.fault_params),
        ];
        Ok(segments.join(&FIELD_SEPARATOR.to_string()))
    }
}

/// Render the time limit with its anchor tag and exactly one decimal digit.
///
/// Precision beyond one digit is deliberately dropped; the name is an
/// identifier, not a lossless numeric channel.
fn render_time_limit(base_time_limit: f64) -> String {
    format!("{}{:.1}", TIME_LIMIT_TAG, base_time_limit)
}

/// Render a float list in bracketed, comma-separated form.
///
/// Integral values keep a trailing `.0` (`[1.0]`, not `[1]`) and the empty
/// list renders as `[]`.
fn render_float_list(values: &[f64]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", rendered.join(", "))
}

/// Render an integer list in bracketed, comma-separated form.
fn render_int_list(values: &[i64]) -> String {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
