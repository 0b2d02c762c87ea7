//! Concurrent fan-out over the upstream query capabilities.
//!
//! One scrape spawns six independent tasks, one per capability. Each task
//! owns exactly one result slot (its join-handle output) and shares nothing
//! with its siblings; the coordinator performs an all-of join. A failed
//! fetch is logged and leaves its slot empty; it never cancels sibling
//! tasks and never surfaces as a request error.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;

use stakescope_client::{ChainQuery, QueryError};
use stakescope_types::{
    IbcChannelRecord, IbcClientRecord, IbcConnectionRecord, SigningInfoRecord, StakingParams,
    ValidatorRecord,
};

/// The (possibly partial) results of one fan-out round.
#[derive(Debug, Default)]
pub struct FetchResults {
    pub validators: Option<Vec<ValidatorRecord>>,
    pub signing_infos: Option<Vec<SigningInfoRecord>>,
    pub staking_params: Option<StakingParams>,
    pub ibc_channels: Option<Vec<IbcChannelRecord>>,
    pub ibc_connections: Option<Vec<IbcConnectionRecord>>,
    pub ibc_clients: Option<Vec<IbcClientRecord>>,
}

/// Run one capability query, logging start/finish and degrading a failure
/// to `None`.
async fn run_capability<T, Fut>(capability: &'static str, query: Fut) -> Option<T>
where
    Fut: Future<Output = Result<T, QueryError>>,
{
    let started = Instant::now();
    tracing::debug!(capability, "started query");
    match query.await {
        Ok(value) => {
            tracing::debug!(
                capability,
                elapsed = started.elapsed().as_secs_f64(),
                "finished query"
            );
            Some(value)
        }
        Err(error) => {
            tracing::error!(capability, %error, "query failed");
            None
        }
    }
}

/// Collect a task's slot. A panicked task counts as a failed fetch.
async fn slot<T>(capability: &'static str, handle: JoinHandle<Option<T>>) -> Option<T> {
    match handle.await {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(capability, %error, "fetch task died");
            None
        }
    }
}

/// List IBC clients, then resolve each client's status. A failed status
/// lookup drops that one client and keeps its siblings.
async fn fetch_ibc_clients<C: ChainQuery>(
    client: &C,
    limit: u64,
) -> Result<Vec<IbcClientRecord>, QueryError> {
    let client_ids = client.ibc_client_states(limit).await?;
    let mut records = Vec::with_capacity(client_ids.len());
    for client_id in client_ids {
        match client.ibc_client_status(&client_id).await {
            Ok(status) => records.push(IbcClientRecord { client_id, status }),
            Err(error) => {
                tracing::error!(%error, client_id, "could not get IBC client status");
            }
        }
    }
    Ok(records)
}

/// Launch all six capability tasks and block until every one has finished,
/// successfully or not.
pub async fn fetch_all<C>(client: Arc<C>, limit: u64) -> FetchResults
where
    C: ChainQuery + 'static,
{
    let c = Arc::clone(&client);
    let validators = tokio::spawn(async move {
        run_capability("validators", async { c.validators(limit).await }).await
    });

    let c = Arc::clone(&client);
    let signing_infos = tokio::spawn(async move {
        run_capability("signing_infos", async { c.signing_infos(limit).await }).await
    });

    let c = Arc::clone(&client);
    let staking_params = tokio::spawn(async move {
        run_capability("staking_params", async { c.staking_params().await }).await
    });

    let c = Arc::clone(&client);
    let ibc_channels = tokio::spawn(async move {
        run_capability("ibc_channels", async { c.ibc_channels(limit).await }).await
    });

    let c = Arc::clone(&client);
    let ibc_connections = tokio::spawn(async move {
        run_capability("ibc_connections", async { c.ibc_connections(limit).await }).await
    });

    let c = Arc::clone(&client);
    let ibc_clients = tokio::spawn(async move {
        run_capability("ibc_clients", async { fetch_ibc_clients(c.as_ref(), limit).await }).await
    });

    FetchResults {
        validators: slot("validators", validators).await,
        signing_infos: slot("signing_infos", signing_infos).await,
        staking_params: slot("staking_params", staking_params).await,
        ibc_channels: slot("ibc_channels", ibc_channels).await,
        ibc_connections: slot("ibc_connections", ibc_connections).await,
        ibc_clients: slot("ibc_clients", ibc_clients).await,
    }
}
