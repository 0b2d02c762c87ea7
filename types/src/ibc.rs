//! IBC objects: channels, connections, and light clients.
//!
//! These are reported as presence series only and are never joined with
//! validator data.

use serde::{Deserialize, Serialize};

/// An IBC channel endpoint and its counterparty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcChannelRecord {
    pub channel_id: String,
    pub counterparty_channel_id: String,
    /// Channel state, e.g. `STATE_OPEN`.
    pub state: String,
}

/// An IBC connection and its counterparty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcConnectionRecord {
    pub connection_id: String,
    pub client_id: String,
    pub counterparty_client_id: String,
    pub counterparty_connection_id: String,
    /// Connection state, e.g. `STATE_OPEN`.
    pub state: String,
}

/// An IBC light client together with its resolved status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcClientRecord {
    pub client_id: String,
    /// Client status from the per-client lookup, e.g. `Active` or `Expired`.
    pub status: String,
}
