//! Bulk rewriting of experiment names.
//!
//! Pure decode → transform → encode over a batch of existing names. No
//! filesystem mutation happens here; the caller inspects the reported
//! before/after pairs and decides whether to apply them (see
//! [`crate::results::apply_renames`]).

use thiserror::Error;

use quorum_descriptor::{DecodeError, Descriptor, ValidationError};

/// A single name could not be rewritten.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The existing name does not parse as an experiment descriptor.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The transformed descriptor no longer encodes.
    #[error(transparent)]
    Encode(#[from] ValidationError),
}

/// A proposed directory rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub before: String,
    pub after: String,
}

impl RenamePlan {
    /// True when the transform left the name unchanged.
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}

/// What happened to one name in a batch rewrite.
#[derive(Debug)]
pub enum RewriteOutcome {
    /// Decoded, transformed and re-encoded.
    Renamed(RenamePlan),
    /// The transform declined this name.
    Skipped { name: String },
    /// Decoding or re-encoding failed.
    Failed { name: String, error: RewriteError },
}

/// Decode each name, offer the descriptor to `transform`, and re-encode.
///
/// `transform` returns `false` to leave a name alone. Failures are reported
/// per name rather than aborting the batch, so callers can skip, log and
/// continue over mixed input.
pub fn rewrite_names<I, S, F>(names: I, mut transform: F) -> Vec<RewriteOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&mut Descriptor) -> bool,
{
    names
        .into_iter()
        .map(|name| rewrite_one(name.as_ref(), &mut transform))
        .collect()
}

fn rewrite_one<F>(name: &str, transform: &mut F) -> RewriteOutcome
where
    F: FnMut(&mut Descriptor) -> bool,
{
    let mut descriptor = match Descriptor::decode(name) {
        Ok(d) => d,
        Err(e) => {
            return RewriteOutcome::Failed {
                name: name.to_string(),
                error: e.into(),
            }
        }
    };

    if !transform(&mut descriptor) {
        return RewriteOutcome::Skipped {
            name: name.to_string(),
        };
    }

    match descriptor.encode() {
        Ok(after) => RewriteOutcome::Renamed(RenamePlan {
            before: name.to_string(),
            after,
        }),
        Err(e) => RewriteOutcome::Failed {
            name: name.to_string(),
            error: e.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FC_NAME: &str =
        "json_n8_btl2.5_uniform_[1.0]_fc_[8, 4, 2]_normal_[0.0, 1.0]_pbft_1_crash_[3]";
    const TORUS_NAME: &str =
        "json_n8_btl2.5_uniform_[1.0]_torus_[4, 4]_normal_[0.0, 1.0]_pbft_1_crash_[3]";

    /// Normalize fc topology parameter lists to `[8, 4]`, the transform
    /// batch renames exist for.
    fn normalize_fc(descriptor: &mut Descriptor) -> bool {
        if descriptor.topology != "fc" {
            return false;
        }
        descriptor.topo_params = vec![8, 4];
        true
    }

    #[test]
    fn test_rewrite_matching_name() {
        let outcomes = rewrite_names([FC_NAME], normalize_fc);
        assert_eq!(outcomes.len(), 1);
        match &outcomes[0] {
            RewriteOutcome::Renamed(plan) => {
                assert_eq!(plan.before, FC_NAME);
                assert_eq!(
                    plan.after,
                    "json_n8_btl2.5_uniform_[1.0]_fc_[8, 4]_normal_[0.0, 1.0]_pbft_1_crash_[3]"
                );
                assert!(!plan.is_noop());
            }
            other => panic!("expected Renamed, got {:?}", other),
        }
    }

    #[test]
    fn test_transform_can_decline() {
        let outcomes = rewrite_names([TORUS_NAME], normalize_fc);
        assert!(matches!(&outcomes[0], RewriteOutcome::Skipped { name } if name == TORUS_NAME));
    }

    #[test]
    fn test_identity_transform_is_noop_plan() {
        let outcomes = rewrite_names([FC_NAME], |_| true);
        match &outcomes[0] {
            RewriteOutcome::Renamed(plan) => assert!(plan.is_noop()),
            other => panic!("expected Renamed, got {:?}", other),
        }
    }

    #[test]
    fn test_undecodable_name_is_reported_not_fatal() {
        let outcomes = rewrite_names(["not_an_experiment", FC_NAME], normalize_fc);
        assert!(matches!(
            &outcomes[0],
            RewriteOutcome::Failed {
                error: RewriteError::Decode(_),
                ..
            }
        ));
        assert!(matches!(&outcomes[1], RewriteOutcome::Renamed(_)));
    }

    #[test]
    fn test_invalid_transform_result_is_reported() {
        let outcomes = rewrite_names([FC_NAME], |d| {
            d.num_nodes = 0;
            true
        });
        assert!(matches!(
            &outcomes[0],
            RewriteOutcome::Failed {
                error: RewriteError::Encode(_),
                ..
            }
        ));
    }
}
