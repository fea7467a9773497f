use thiserror::Error;

use crate::pathway::tiers::Tier;

/// Failures raised while synthesizing a pathway.
///
/// `NotFound` is the caller's fault. `UpstreamUnavailable` and `UnknownSkill` are
/// environment/data faults. `MissingMetadata` never escapes the enricher.
#[derive(Debug, Error)]
pub enum PathwayError {
    #[error("Occupation not found: {0}")]
    NotFound(String),

    #[error("No skill metadata for '{0}'")]
    MissingMetadata(String),

    #[error("Tier '{tier}' is empty, so skills in tier '{dependent}' have no parent")]
    EmptyTier { tier: Tier, dependent: Tier },

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Skill '{0}' is not in the skill catalog")]
    UnknownSkill(String),
}
