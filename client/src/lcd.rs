//! HTTP client for the chain's REST/LCD (gRPC-gateway) API.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use stakescope_types::{
    IbcChannelRecord, IbcConnectionRecord, SigningInfoRecord, StakingParams, ValidatorRecord,
};

use crate::error::QueryError;
use crate::wire;
use crate::ChainQuery;

/// Default per-call timeout. The pipeline itself imposes none; this caps a
/// single hung backend call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Query client over a chain REST/LCD endpoint.
pub struct LcdClient {
    /// Base URL of the LCD endpoint, without a trailing slash.
    base_url: String,
    /// Reusable HTTP client.
    http: reqwest::Client,
    /// Per-request timeout.
    timeout: Duration,
}

impl LcdClient {
    /// Create a client pointing at an LCD endpoint.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, QueryError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Status {
                code: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| QueryError::Decode(e.to_string()))
    }

    fn page_limit(limit: u64) -> [(&'static str, String); 1] {
        [("pagination.limit", limit.to_string())]
    }
}

#[async_trait]
impl ChainQuery for LcdClient {
    async fn validators(&self, limit: u64) -> Result<Vec<ValidatorRecord>, QueryError> {
        let response: wire::ValidatorsResponse = self
            .get_json("/cosmos/staking/v1beta1/validators", &Self::page_limit(limit))
            .await?;
        response
            .validators
            .into_iter()
            .map(ValidatorRecord::try_from)
            .collect()
    }

    async fn signing_infos(&self, limit: u64) -> Result<Vec<SigningInfoRecord>, QueryError> {
        let response: wire::SigningInfosResponse = self
            .get_json(
                "/cosmos/slashing/v1beta1/signing_infos",
                &Self::page_limit(limit),
            )
            .await?;
        response
            .info
            .into_iter()
            .map(SigningInfoRecord::try_from)
            .collect()
    }

    async fn staking_params(&self) -> Result<StakingParams, QueryError> {
        let response: wire::StakingParamsResponse =
            self.get_json("/cosmos/staking/v1beta1/params", &[]).await?;
        Ok(response.params.into())
    }

    async fn ibc_channels(&self, limit: u64) -> Result<Vec<IbcChannelRecord>, QueryError> {
        let response: wire::ChannelsResponse = self
            .get_json("/ibc/core/channel/v1/channels", &Self::page_limit(limit))
            .await?;
        Ok(response.channels.into_iter().map(Into::into).collect())
    }

    async fn ibc_connections(&self, limit: u64) -> Result<Vec<IbcConnectionRecord>, QueryError> {
        let response: wire::ConnectionsResponse = self
            .get_json("/ibc/core/connection/v1/connections", &Self::page_limit(limit))
            .await?;
        Ok(response.connections.into_iter().map(Into::into).collect())
    }

    async fn ibc_client_states(&self, limit: u64) -> Result<Vec<String>, QueryError> {
        let response: wire::ClientStatesResponse = self
            .get_json("/ibc/core/client/v1/client_states", &Self::page_limit(limit))
            .await?;
        Ok(response
            .client_states
            .into_iter()
            .map(|state| state.client_id)
            .collect())
    }

    async fn ibc_client_status(&self, client_id: &str) -> Result<String, QueryError> {
        let response: wire::ClientStatusResponse = self
            .get_json(&format!("/ibc/core/client/v1/client_status/{client_id}"), &[])
            .await?;
        Ok(response.status)
    }
}
