//! Staking module parameters.

use serde::{Deserialize, Serialize};

/// The subset of staking parameters the exporter needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// Maximum size of the active validator set.
    pub max_validators: u32,
}
