//! Presence series for IBC channels, connections, and clients.
//!
//! Three independent mapping passes with no ordering requirement between
//! them and no dependency on validator data: every record becomes one
//! series with value 1, keyed by its own identifying labels.

use stakescope_types::{IbcChannelRecord, IbcClientRecord, IbcConnectionRecord};

use crate::schema;
use crate::snapshot::Snapshot;

pub(crate) fn channel_series(snapshot: &mut Snapshot, channels: &[IbcChannelRecord]) {
    for channel in channels {
        snapshot.push(
            &schema::IBC_CHANNELS,
            vec![
                channel.channel_id.clone(),
                channel.counterparty_channel_id.clone(),
                channel.state.clone(),
            ],
            1.0,
        );
    }
}

pub(crate) fn connection_series(snapshot: &mut Snapshot, connections: &[IbcConnectionRecord]) {
    for connection in connections {
        snapshot.push(
            &schema::IBC_CONNECTIONS,
            vec![
                connection.connection_id.clone(),
                connection.client_id.clone(),
                connection.counterparty_client_id.clone(),
                connection.counterparty_connection_id.clone(),
                connection.state.clone(),
            ],
            1.0,
        );
    }
}

pub(crate) fn client_series(snapshot: &mut Snapshot, clients: &[IbcClientRecord]) {
    for client in clients {
        snapshot.push(
            &schema::IBC_CLIENTS,
            vec![client.client_id.clone(), client.status.clone()],
            1.0,
        );
    }
}
