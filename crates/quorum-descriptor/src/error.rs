//! Codec errors

use thiserror::Error;

use crate::descriptor::Field;

/// Result type for decoding experiment names.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// A getter or `finish` was invoked before the field was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("field '{field}' has not been set")]
pub struct FieldNotSetError {
    /// The field that was read before being assigned.
    pub field: Field,
}

/// A field holds a value outside its declared domain at encode time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    FieldNotSet(#[from] FieldNotSetError),

    #[error("num_nodes must be at least 1")]
    NoNodes,

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: Field, value: f64 },

    #[error("{field} must not be empty")]
    EmptyString { field: Field },
}

/// The input string does not match the fixed twelve-field name shape.
///
/// Decoding is fail-fast: the first scanner failure is reported and no
/// partially populated descriptor is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected '{literal}' at byte {at}")]
    ExpectedLiteral { literal: &'static str, at: usize },

    #[error("missing '_' separator after {field}")]
    MissingSeparator { field: Field },

    #[error("missing '[' list for {field}")]
    MissingList { field: Field },

    #[error("unterminated '[' list for {field}")]
    UnterminatedList { field: Field },

    #[error("empty segment for {field}")]
    EmptyField { field: Field },

    #[error("invalid integer '{text}' for {field}")]
    InvalidInt { field: Field, text: String },

    #[error("invalid float '{text}' for {field}")]
    InvalidFloat { field: Field, text: String },

    #[error("expected protocol, num_faults and fault_type segments before fault_params")]
    MalformedTail,

    #[error("trailing input '{rest}' after fault_params")]
    TrailingInput { rest: String },
}
