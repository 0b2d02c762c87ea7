//! Fundamental types for the stakescope exporter.
//!
//! This crate defines the domain records shared across every other crate in
//! the workspace: validator and signing-info records, staking parameters,
//! IBC objects, the exact-decimal carrier type, and the consensus-address
//! derivation used to correlate validators with their signing infos.

pub mod consaddr;
pub mod dec;
pub mod error;
pub mod ibc;
pub mod params;
pub mod signing;
pub mod status;
pub mod validator;

pub use consaddr::ConsensusPubkey;
pub use dec::Dec;
pub use error::{ConsAddrError, DecError};
pub use ibc::{IbcChannelRecord, IbcClientRecord, IbcConnectionRecord};
pub use params::StakingParams;
pub use signing::SigningInfoRecord;
pub use status::BondStatus;
pub use validator::ValidatorRecord;
