//! Validator bond status.

use serde::{Deserialize, Serialize};

/// The bonding state of a validator.
///
/// The discriminants are the wire codes used by the chain SDK, which are
/// also the numeric values reported by the status metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondStatus {
    /// Not in the validator set and not unbonding.
    Unbonded = 1,
    /// Leaving the validator set; stake is still locked.
    Unbonding = 2,
    /// Actively participating in consensus.
    Bonded = 3,
}

impl BondStatus {
    /// Parse the SDK's textual status representation.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "BOND_STATUS_UNBONDED" => Some(Self::Unbonded),
            "BOND_STATUS_UNBONDING" => Some(Self::Unbonding),
            "BOND_STATUS_BONDED" => Some(Self::Bonded),
            _ => None,
        }
    }

    /// Numeric encoding reported by the status metric.
    pub fn code(&self) -> f64 {
        *self as u8 as f64
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unbonded => "unbonded",
            Self::Unbonding => "unbonding",
            Self::Bonded => "bonded",
        }
    }
}
