//! Upstream query client for the stakescope exporter.
//!
//! Exposes the chain's staking, slashing, and IBC query surface as the
//! [`ChainQuery`] trait, plus [`LcdClient`], the production implementation
//! over the chain's REST/LCD (gRPC-gateway) API.

pub mod error;
pub mod lcd;
mod wire;

pub use error::QueryError;
pub use lcd::LcdClient;

use async_trait::async_trait;
use stakescope_types::{
    IbcChannelRecord, IbcConnectionRecord, SigningInfoRecord, StakingParams, ValidatorRecord,
};

/// The upstream query operations consumed by the fetch pipeline.
///
/// Every method returns either a typed result or a typed failure; the
/// caller decides how a failure degrades. `limit` is the page-size cap
/// passed to paginated list queries.
#[async_trait]
pub trait ChainQuery: Send + Sync {
    async fn validators(&self, limit: u64) -> Result<Vec<ValidatorRecord>, QueryError>;

    async fn signing_infos(&self, limit: u64) -> Result<Vec<SigningInfoRecord>, QueryError>;

    async fn staking_params(&self) -> Result<StakingParams, QueryError>;

    async fn ibc_channels(&self, limit: u64) -> Result<Vec<IbcChannelRecord>, QueryError>;

    async fn ibc_connections(&self, limit: u64) -> Result<Vec<IbcConnectionRecord>, QueryError>;

    /// List the ids of all known IBC client states.
    async fn ibc_client_states(&self, limit: u64) -> Result<Vec<String>, QueryError>;

    /// Resolve the current status of one IBC client, e.g. `Active`.
    async fn ibc_client_status(&self, client_id: &str) -> Result<String, QueryError>;
}
