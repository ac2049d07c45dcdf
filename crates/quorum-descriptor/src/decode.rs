//! Name-string → descriptor scanning.
//!
//! Decoding is an explicit left-to-right scan over the name rather than one
//! greedy pattern. Fields are delimited by literal anchors: the `json_n`
//! prefix, the `btl` tag, and the `[` `]` pairs around every parameter
//! list. The tail between the third list and the final list — protocol,
//! fault count, fault type — has no anchor of its own and is split from the
//! right, giving the protocol the maximum admissible span.
//!
//! Names whose string-valued fields contain `_` decode to *something*, but
//! the split points may not match the producer's intent. That ambiguity is
//! structural to the scheme (there is no escaping) and is deliberately left
//! in place.

use crate::descriptor::{Descriptor, Field, FIELD_SEPARATOR, NAME_PREFIX, TIME_LIMIT_TAG};
use crate::error::{DecodeError, DecodeResult};

impl Descriptor {
    /// Reconstruct a descriptor from a name previously produced by
    /// [`Descriptor::encode`] (or structurally equivalent).
    ///
    /// Performs type conversion only; domain constraints such as
    /// `num_nodes >= 1` are an encode-time concern. Fails with
    /// [`DecodeError`] on any shape or conversion mismatch and never
    /// returns a partially populated descriptor.
    pub fn decode(name: &str) -> DecodeResult<Self> {
        let mut scanner = Scanner::new(name);

        scanner.expect_literal(NAME_PREFIX)?;
        let num_nodes = parse_u32(scanner.segment_until_separator(Field::NumNodes)?, Field::NumNodes)?;

        scanner.expect_literal(TIME_LIMIT_TAG)?;
        let base_time_limit = parse_f64(
            scanner.segment_until_separator(Field::BaseTimeLimit)?,
            Field::BaseTimeLimit,
        )?;

        let node_dist = scanner.segment_before_list(Field::NodeDist, Field::NodeParams)?;
        let node_params = parse_float_list(scanner.list_interior(Field::NodeParams)?, Field::NodeParams)?;
        scanner.expect_separator(Field::NodeParams)?;

        let topology = scanner.segment_before_list(Field::Topology, Field::TopoParams)?;
        let topo_params = parse_int_list(scanner.list_interior(Field::TopoParams)?, Field::TopoParams)?;
        scanner.expect_separator(Field::TopoParams)?;

        let switch_dist = scanner.segment_before_list(Field::SwitchDist, Field::SwitchParams)?;
        let switch_params =
            parse_float_list(scanner.list_interior(Field::SwitchParams)?, Field::SwitchParams)?;
        scanner.expect_separator(Field::SwitchParams)?;

        // No anchor separates protocol, num_faults and fault_type; split the
        // span before the final list from the right so the protocol keeps
        // the maximum admissible extent.
        let tail = scanner.segment_before_list(Field::Protocol, Field::FaultParams)?;
        let mut parts = tail.rsplitn(3, FIELD_SEPARATOR);
        let fault_type = parts.next().ok_or(DecodeError::MalformedTail)?;
        let num_faults_text = parts.next().ok_or(DecodeError::MalformedTail)?;
        let protocol = parts.next().ok_or(DecodeError::MalformedTail)?;
        if protocol.is_empty() {
            return Err(DecodeError::EmptyField {
                field: Field::Protocol,
            });
        }
        if fault_type.is_empty() {
            return Err(DecodeError::EmptyField {
                field: Field::FaultType,
            });
        }
        let num_faults = parse_u32(num_faults_text, Field::NumFaults)?;

        let fault_params =
            parse_int_list(scanner.list_interior(Field::FaultParams)?, Field::FaultParams)?;
        scanner.expect_end()?;

        Ok(Descriptor {
            num_nodes,
            base_time_limit,
            node_dist: node_dist.to_string(),
            node_params,
            topology: topology.to_string(),
            topo_params,
            switch_dist: switch_dist.to_string(),
            switch_params,
            protocol: protocol.to_string(),
            num_faults,
            fault_type: fault_type.to_string(),
            fault_params,
        })
    }
}

/// Cursor over a name string with literal-anchor consumption.
///
/// All anchors are single-byte ASCII, so byte positions found by `find`
/// always sit on character boundaries even when field spans hold
/// multi-byte text.
struct Scanner<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Consume an exact literal or fail with its position.
    fn expect_literal(&mut self, literal: &'static str) -> DecodeResult<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(DecodeError::ExpectedLiteral {
                literal,
                at: self.pos,
            })
        }
    }

    /// Consume a single field separator.
    fn expect_separator(&mut self, field: Field) -> DecodeResult<()> {
        if self.rest().starts_with(FIELD_SEPARATOR) {
            self.pos += FIELD_SEPARATOR.len_utf8();
            Ok(())
        } else {
            Err(DecodeError::MissingSeparator { field })
        }
    }

    /// Consume the span up to the next separator, plus the separator.
    fn segment_until_separator(&mut self, field: Field) -> DecodeResult<&'src str> {
        match self.rest().find(FIELD_SEPARATOR) {
            Some(rel) => {
                let segment = &self.src[self.pos..self.pos + rel];
                self.pos += rel + FIELD_SEPARATOR.len_utf8();
                Ok(segment)
            }
            None => Err(DecodeError::MissingSeparator { field }),
        }
    }

    /// Consume the span up to the `_` immediately preceding the next `[`,
    /// leaving the cursor on the bracket.
    ///
    /// The bracket of the following list field is the anchor: everything
    /// before its separator belongs to `field`, which is how a string field
    /// keeps its maximum admissible extent.
    fn segment_before_list(&mut self, field: Field, list_field: Field) -> DecodeResult<&'src str> {
        let rel = self
            .rest()
            .find('[')
            .ok_or(DecodeError::MissingList { field: list_field })?;
        let bracket = self.pos + rel;
        if bracket == self.pos || self.src.as_bytes()[bracket - 1] != b'_' {
            return Err(DecodeError::MissingSeparator { field });
        }
        let segment = &self.src[self.pos..bracket - 1];
        if segment.is_empty() {
            return Err(DecodeError::EmptyField { field });
        }
        self.pos = bracket;
        Ok(segment)
    }

    /// Consume a bracketed list and return its interior.
    ///
    /// Lists never nest, so the first `]` closes the list.
    fn list_interior(&mut self, field: Field) -> DecodeResult<&'src str> {
        if !self.rest().starts_with('[') {
            return Err(DecodeError::MissingList { field });
        }
        let rel = self
            .rest()
            .find(']')
            .ok_or(DecodeError::UnterminatedList { field })?;
        let interior = &self.src[self.pos + 1..self.pos + rel];
        self.pos += rel + 1;
        Ok(interior)
    }

    /// Require that the whole input has been consumed.
    fn expect_end(&self) -> DecodeResult<()> {
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TrailingInput {
                rest: self.rest().to_string(),
            })
        }
    }
}

fn parse_u32(text: &str, field: Field) -> DecodeResult<u32> {
    text.parse().map_err(|_| DecodeError::InvalidInt {
        field,
        text: text.to_string(),
    })
}

fn parse_i64(text: &str, field: Field) -> DecodeResult<i64> {
    text.parse().map_err(|_| DecodeError::InvalidInt {
        field,
        text: text.to_string(),
    })
}

fn parse_f64(text: &str, field: Field) -> DecodeResult<f64> {
    text.parse().map_err(|_| DecodeError::InvalidFloat {
        field,
        text: text.to_string(),
    })
}

/// Parse a list interior: a blank interior is the empty list, anything else
/// splits on `,` with per-element whitespace trimming.
fn parse_float_list(interior: &str, field: Field) -> DecodeResult<Vec<f64>> {
    if interior.trim().is_empty() {
        return Ok(Vec::new());
    }
    interior
        .split(',')
        .map(|element| parse_f64(element.trim(), field))
        .collect()
}

fn parse_int_list(interior: &str, field: Field) -> DecodeResult<Vec<i64>> {
    if interior.trim().is_empty() {
        return Ok(Vec::new());
    }
    interior
        .split(',')
        .map(|element| parse_i64(element.trim(), field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str =
        "json_n8_btl2.5_uniform_[1.0]_fc_[8, 4]_normal_[0.0, 1.0]_pbft_1_crash_[3]";

    #[test]
    fn test_decode_well_formed() {
        let d = Descriptor::decode(WELL_FORMED).unwrap();
        assert_eq!(d.num_nodes, 8);
        assert_eq!(d.base_time_limit, 2.5);
        assert_eq!(d.node_dist, "uniform");
        assert_eq!(d.node_params, vec![1.0]);
        assert_eq!(d.topology, "fc");
        assert_eq!(d.topo_params, vec![8, 4]);
        assert_eq!(d.switch_dist, "normal");
        assert_eq!(d.switch_params, vec![0.0, 1.0]);
        assert_eq!(d.protocol, "pbft");
        assert_eq!(d.num_faults, 1);
        assert_eq!(d.fault_type, "crash");
        assert_eq!(d.fault_params, vec![3]);
    }

    #[test]
    fn test_decode_empty_lists() {
        let name = "json_n8_btl2.5_uniform_[1.0]_fc_[]_normal_[0.5]_pbft_0_crash_[]";
        let d = Descriptor::decode(name).unwrap();
        assert_eq!(d.topo_params, Vec::<i64>::new());
        assert_eq!(d.fault_params, Vec::<i64>::new());
    }

    #[test]
    fn test_decode_rejects_wrong_prefix() {
        let err = Descriptor::decode("csv_n8_btl2.5_u_[1.0]_fc_[]_n_[0.5]_p_0_c_[]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::ExpectedLiteral {
                literal: NAME_PREFIX,
                at: 0
            }
        );
    }

    #[test]
    fn test_decode_rejects_missing_time_limit_tag() {
        let err = Descriptor::decode("json_n8_2.5_u_[1.0]_fc_[]_n_[0.5]_p_0_c_[]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::ExpectedLiteral {
                literal: TIME_LIMIT_TAG,
                at: 8
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_numeric_node_count() {
        let err = Descriptor::decode("json_nx_btl2.5_u_[1.0]_fc_[]_n_[0.5]_p_0_c_[]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidInt {
                field: Field::NumNodes,
                text: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_rejects_negative_node_count() {
        let err = Descriptor::decode("json_n-8_btl2.5_u_[1.0]_fc_[]_n_[0.5]_p_0_c_[]").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidInt {
                field: Field::NumNodes,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_bad_list_element() {
        let err =
            Descriptor::decode("json_n8_btl2.5_u_[1.0]_fc_[8, x]_n_[0.5]_p_0_c_[]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidInt {
                field: Field::TopoParams,
                text: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_rejects_unterminated_list() {
        let err = Descriptor::decode("json_n8_btl2.5_u_[1.0_fc").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnterminatedList {
                field: Field::NodeParams
            }
        );
    }

    #[test]
    fn test_decode_rejects_missing_tail_segments() {
        // Only two `_`-separated segments before the fault parameter list.
        let err = Descriptor::decode("json_n8_btl2.5_u_[1.0]_fc_[]_n_[0.5]_p_0_[]").unwrap_err();
        assert_eq!(err, DecodeError::MalformedTail);
    }

    #[test]
    fn test_decode_rejects_trailing_input() {
        let err = Descriptor::decode(&format!("{}garbage", WELL_FORMED)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TrailingInput {
                rest: "garbage".to_string()
            }
        );
    }

    #[test]
    fn test_decode_trims_list_whitespace() {
        let name = "json_n8_btl2.5_u_[ 1.0 ,2.0 ]_fc_[ 8 , 4 ]_n_[0.5]_p_0_c_[]";
        let d = Descriptor::decode(name).unwrap();
        assert_eq!(d.node_params, vec![1.0, 2.0]);
        assert_eq!(d.topo_params, vec![8, 4]);
    }

    #[test]
    fn test_tail_split_gives_protocol_maximum_span() {
        // A protocol containing the separator still decodes: the two
        // rightmost segments are taken as count and fault type, the rest
        // stays with the protocol.
        let name = "json_n8_btl2.5_u_[1.0]_fc_[]_n_[0.5]_hot_stuff_2_crash_[]";
        let d = Descriptor::decode(name).unwrap();
        assert_eq!(d.protocol, "hot_stuff");
        assert_eq!(d.num_faults, 2);
        assert_eq!(d.fault_type, "crash");
    }

    #[test]
    fn test_empty_interior_with_spaces_is_empty_list() {
        let name = "json_n8_btl2.5_u_[1.0]_fc_[ ]_n_[0.5]_p_0_c_[]";
        let d = Descriptor::decode(name).unwrap();
        assert_eq!(d.topo_params, Vec::<i64>::new());
    }
}
