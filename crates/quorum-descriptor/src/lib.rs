// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Self-describing experiment names for BFT simulation runs.
//!
//! Every simulation run is identified by a name string that carries its
//! full parameter set, so a results directory can be understood — and bulk
//! rewritten — with no external index. This crate owns the fixed
//! twelve-field schema and the two inverse operations over it.
//!
//! # Design
//!
//! - [`Descriptor`] — the twelve-field record identifying one experiment
//! - [`DescriptorBuilder`] — chained field-by-field assembly with an
//!   explicit completeness check at [`DescriptorBuilder::finish`]
//! - [`Descriptor::encode`] — descriptor → canonical name string
//! - [`Descriptor::decode`] — name string → descriptor, via an explicit
//!   anchor-driven scanner
//!
//! Encoding and decoding are pure; any number of callers may run them
//! concurrently. The round-trip law holds for every valid descriptor whose
//! string-valued fields do not contain the `_` field separator — the scheme
//! has no escaping, and separator-bearing names decode to unspecified
//! splits.
//!
//! # Examples
//!
//! ```
//! use quorum_descriptor::DescriptorBuilder;
//!
//! let descriptor = DescriptorBuilder::new()
//!     .with_num_nodes(8)
//!     .with_base_time_limit(2.5)
//!     .with_node_dist("uniform")
//!     .with_node_params(vec![1.0])
//!     .with_topology("fc")
//!     .with_topo_params(vec![8, 4])
//!     .with_switch_dist("normal")
//!     .with_switch_params(vec![0.0, 1.0])
//!     .with_protocol("pbft")
//!     .with_num_faults(1)
//!     .with_fault_type("crash")
//!     .with_fault_params(vec![3])
//!     .finish()
//!     .unwrap();
//!
//! let name = descriptor.encode().unwrap();
//! assert_eq!(
//!     name,
//!     "json_n8_btl2.5_uniform_[1.0]_fc_[8, 4]_normal_[0.0, 1.0]_pbft_1_crash_[3]"
//! );
//! ```

pub mod descriptor;
pub mod error;

mod decode;
mod encode;

pub use descriptor::{Descriptor, DescriptorBuilder, Field};
pub use error::{DecodeError, DecodeResult, FieldNotSetError, ValidationError};
