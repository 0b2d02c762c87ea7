//! Validator records.

use serde::{Deserialize, Serialize};

use crate::consaddr::ConsensusPubkey;
use crate::dec::Dec;
use crate::status::BondStatus;

/// One validator as reported by the staking module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidatorRecord {
    /// Bech32 operator address; the validator's identity everywhere else.
    pub operator_address: String,
    /// Self-declared display name.
    pub moniker: String,
    pub status: BondStatus,
    pub jailed: bool,
    /// Commission rate, already a fraction (never denom-scaled).
    pub commission_rate: Dec,
    /// Bonded tokens in the base denomination.
    pub tokens: Dec,
    /// Total shares issued to delegators; the ranking key.
    pub delegator_shares: Dec,
    pub min_self_delegation: Dec,
    /// Consensus key, if the record carried one. Needed to correlate the
    /// validator with its signing info.
    pub consensus_pubkey: Option<ConsensusPubkey>,
}
