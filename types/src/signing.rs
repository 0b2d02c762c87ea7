//! Signing (uptime) records from the slashing module.

use serde::{Deserialize, Serialize};

/// Per-validator signing info, keyed by consensus address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningInfoRecord {
    /// Bech32 consensus address, the correlation key.
    pub address: String,
    /// Consensus rounds this validator failed to sign in.
    pub missed_blocks: i64,
}
