//! The scrape pipeline: concurrent fetch, join & derive, snapshot assembly.
//!
//! Each scrape is a stateless, independent computation: six upstream
//! capabilities are queried in parallel, validators are joined with their
//! signing infos, derived fields are computed, and everything is assembled
//! into one immutable [`Snapshot`] for the encoder. Individual fetch or
//! derivation failures degrade by omission; the scrape itself always
//! produces the best-effort snapshot.

pub mod fetch;
pub mod schema;
pub mod snapshot;

mod derive;
mod ibc;

pub use fetch::FetchResults;
pub use snapshot::{MetricSeries, Snapshot};

use std::sync::Arc;

use stakescope_client::ChainQuery;

/// Static per-process settings for the pipeline.
#[derive(Clone, Debug)]
pub struct CollectorConfig {
    /// Page-size cap passed to paginated upstream queries.
    pub page_limit: u64,
    /// Display denomination label value.
    pub denom: String,
    /// Divisor converting base-denomination amounts to the display
    /// denomination. Must be positive; validated at startup.
    pub denom_coefficient: f64,
    /// Bech32 prefix for derived consensus addresses.
    pub valcons_prefix: String,
}

/// Produces one [`Snapshot`] per scrape from an upstream query client.
pub struct Collector<C> {
    client: Arc<C>,
    config: CollectorConfig,
}

impl<C> Collector<C>
where
    C: ChainQuery + 'static,
{
    pub fn new(client: C, config: CollectorConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    /// Run the full fetch → join → derive pipeline once.
    pub async fn collect(&self) -> Snapshot {
        let results = fetch::fetch_all(Arc::clone(&self.client), self.config.page_limit).await;
        self.assemble(results)
    }

    /// Turn one round of fetch results into a snapshot. Pure except for
    /// logging; exercised directly by tests.
    pub fn assemble(&self, results: FetchResults) -> Snapshot {
        let mut snapshot = Snapshot::new();

        if let Some(validators) = results.validators {
            tracing::debug!(
                validators = validators.len(),
                signing_infos = results.signing_infos.as_ref().map_or(0, Vec::len),
                "deriving validator series"
            );
            derive::derive_validator_series(
                &mut snapshot,
                validators,
                results.signing_infos.as_deref().unwrap_or(&[]),
                results.staking_params,
                &self.config,
            );
        }

        if let Some(channels) = results.ibc_channels {
            ibc::channel_series(&mut snapshot, &channels);
        }
        if let Some(connections) = results.ibc_connections {
            ibc::connection_series(&mut snapshot, &connections);
        }
        if let Some(clients) = results.ibc_clients {
            ibc::client_series(&mut snapshot, &clients);
        }

        snapshot
    }
}
