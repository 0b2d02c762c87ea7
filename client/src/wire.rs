//! Wire-format structs for the REST/LCD JSON responses.
//!
//! These mirror the gRPC-gateway JSON shapes exactly and are converted into
//! the domain records from `stakescope-types` at the client boundary. All
//! chain decimals and 64-bit integers arrive as strings.

use serde::Deserialize;

use stakescope_types::{
    BondStatus, ConsensusPubkey, Dec, IbcChannelRecord, IbcConnectionRecord, SigningInfoRecord,
    StakingParams, ValidatorRecord,
};

use crate::error::QueryError;

// ── Staking ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ValidatorsResponse {
    pub validators: Vec<WireValidator>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireValidator {
    pub operator_address: String,
    #[serde(default)]
    pub consensus_pubkey: Option<WirePubkey>,
    #[serde(default)]
    pub jailed: bool,
    pub status: String,
    pub tokens: String,
    pub delegator_shares: String,
    pub description: WireDescription,
    pub commission: WireCommission,
    pub min_self_delegation: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePubkey {
    #[serde(rename = "@type")]
    pub type_url: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDescription {
    #[serde(default)]
    pub moniker: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCommission {
    pub commission_rates: WireCommissionRates,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCommissionRates {
    pub rate: String,
}

impl TryFrom<WireValidator> for ValidatorRecord {
    type Error = QueryError;

    fn try_from(v: WireValidator) -> Result<Self, QueryError> {
        let status = BondStatus::from_wire(&v.status)
            .ok_or_else(|| QueryError::Decode(format!("unknown bond status {:?}", v.status)))?;
        Ok(ValidatorRecord {
            operator_address: v.operator_address,
            moniker: v.description.moniker,
            status,
            jailed: v.jailed,
            commission_rate: Dec::new(v.commission.commission_rates.rate),
            tokens: Dec::new(v.tokens),
            delegator_shares: Dec::new(v.delegator_shares),
            min_self_delegation: Dec::new(v.min_self_delegation),
            consensus_pubkey: v
                .consensus_pubkey
                .map(|k| ConsensusPubkey::new(k.type_url, k.key)),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StakingParamsResponse {
    pub params: WireStakingParams,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireStakingParams {
    pub max_validators: u32,
}

impl From<WireStakingParams> for StakingParams {
    fn from(p: WireStakingParams) -> Self {
        StakingParams {
            max_validators: p.max_validators,
        }
    }
}

// ── Slashing ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct SigningInfosResponse {
    pub info: Vec<WireSigningInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSigningInfo {
    pub address: String,
    pub missed_blocks_counter: String,
}

impl TryFrom<WireSigningInfo> for SigningInfoRecord {
    type Error = QueryError;

    fn try_from(info: WireSigningInfo) -> Result<Self, QueryError> {
        let missed_blocks = info.missed_blocks_counter.parse::<i64>().map_err(|_| {
            QueryError::Decode(format!(
                "missed blocks counter {:?} is not an integer",
                info.missed_blocks_counter
            ))
        })?;
        Ok(SigningInfoRecord {
            address: info.address,
            missed_blocks,
        })
    }
}

// ── IBC ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelsResponse {
    pub channels: Vec<WireChannel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireChannel {
    pub channel_id: String,
    pub state: String,
    pub counterparty: WireChannelCounterparty,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireChannelCounterparty {
    #[serde(default)]
    pub channel_id: String,
}

impl From<WireChannel> for IbcChannelRecord {
    fn from(c: WireChannel) -> Self {
        IbcChannelRecord {
            channel_id: c.channel_id,
            counterparty_channel_id: c.counterparty.channel_id,
            state: c.state,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConnectionsResponse {
    pub connections: Vec<WireConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireConnection {
    pub id: String,
    pub client_id: String,
    pub state: String,
    pub counterparty: WireConnectionCounterparty,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireConnectionCounterparty {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub connection_id: String,
}

impl From<WireConnection> for IbcConnectionRecord {
    fn from(c: WireConnection) -> Self {
        IbcConnectionRecord {
            connection_id: c.id,
            client_id: c.client_id,
            counterparty_client_id: c.counterparty.client_id,
            counterparty_connection_id: c.counterparty.connection_id,
            state: c.state,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClientStatesResponse {
    pub client_states: Vec<WireClientState>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireClientState {
    pub client_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClientStatusResponse {
    pub status: String,
}
