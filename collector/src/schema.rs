//! The closed set of metrics this exporter emits.
//!
//! Every series in a snapshot references one of these definitions; the
//! encoder registers exactly one gauge vector per definition. Label values
//! in a series follow the order of the definition's label keys.

/// Definition of one exported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub name: &'static str,
    pub help: &'static str,
    pub labels: &'static [&'static str],
}

pub const VALIDATORS_COMMISSION: MetricDef = MetricDef {
    name: "cosmos_validators_commission",
    help: "Commission of the Cosmos-based blockchain validator",
    labels: &["address", "moniker"],
};

pub const VALIDATORS_STATUS: MetricDef = MetricDef {
    name: "cosmos_validators_status",
    help: "Status of the Cosmos-based blockchain validator",
    labels: &["address", "moniker"],
};

pub const VALIDATORS_JAILED: MetricDef = MetricDef {
    name: "cosmos_validators_jailed",
    help: "Jailed status of the Cosmos-based blockchain validator",
    labels: &["address", "moniker"],
};

pub const VALIDATORS_TOKENS: MetricDef = MetricDef {
    name: "cosmos_validators_tokens",
    help: "Tokens of the Cosmos-based blockchain validator",
    labels: &["address", "moniker", "denom"],
};

pub const VALIDATORS_DELEGATOR_SHARES: MetricDef = MetricDef {
    name: "cosmos_validators_delegator_shares",
    help: "Delegator shares of the Cosmos-based blockchain validator",
    labels: &["address", "moniker", "denom"],
};

pub const VALIDATORS_MIN_SELF_DELEGATION: MetricDef = MetricDef {
    name: "cosmos_validators_min_self_delegation",
    help: "Self declared minimum self delegation shares of the Cosmos-based blockchain validator",
    labels: &["address", "moniker", "denom"],
};

pub const VALIDATORS_MISSED_BLOCKS: MetricDef = MetricDef {
    name: "cosmos_validators_missed_blocks",
    help: "Missed blocks of the Cosmos-based blockchain validator",
    labels: &["address", "moniker"],
};

pub const VALIDATORS_RANK: MetricDef = MetricDef {
    name: "cosmos_validators_rank",
    help: "Rank of the Cosmos-based blockchain validator",
    labels: &["address", "moniker"],
};

pub const VALIDATORS_ACTIVE: MetricDef = MetricDef {
    name: "cosmos_validators_active",
    help: "1 if the Cosmos-based blockchain validator is in active set, 0 if no",
    labels: &["address", "moniker"],
};

pub const IBC_CHANNELS: MetricDef = MetricDef {
    name: "cosmos_ibc_channels",
    help: "IBC channels opened by the validator",
    labels: &["channel_id", "counterparty_channel_id", "status"],
};

pub const IBC_CONNECTIONS: MetricDef = MetricDef {
    name: "cosmos_ibc_connections",
    help: "IBC connections opened by the validator",
    labels: &[
        "connection_id",
        "client_id",
        "counterparty_client_id",
        "counterparty_connection_id",
        "state",
    ],
};

pub const IBC_CLIENTS: MetricDef = MetricDef {
    name: "cosmos_ibc_clients",
    help: "IBC clients created by the validator",
    labels: &["client_id", "status"],
};

/// Every metric the exporter can emit, in registration order.
pub const ALL: &[&MetricDef] = &[
    &VALIDATORS_COMMISSION,
    &VALIDATORS_STATUS,
    &VALIDATORS_JAILED,
    &VALIDATORS_TOKENS,
    &VALIDATORS_DELEGATOR_SHARES,
    &VALIDATORS_MIN_SELF_DELEGATION,
    &VALIDATORS_MISSED_BLOCKS,
    &VALIDATORS_RANK,
    &VALIDATORS_ACTIVE,
    &IBC_CHANNELS,
    &IBC_CONNECTIONS,
    &IBC_CLIENTS,
];
