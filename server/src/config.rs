//! Exporter configuration with TOML file support.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stakescope_collector::CollectorConfig;

use crate::error::ServerError;

/// Configuration for the stakescope exporter.
///
/// Can be loaded from a TOML file via [`ExporterConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). All fields are static for the
/// lifetime of the process.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Address the metrics endpoint listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Base URL of the chain's REST/LCD endpoint.
    #[serde(default = "default_node_url")]
    pub node_url: String,

    /// Page-size cap for paginated upstream queries.
    #[serde(default = "default_page_limit")]
    pub page_limit: u64,

    /// Display denomination label attached to amount series.
    #[serde(default = "default_denom")]
    pub denom: String,

    /// Divisor converting base-denomination amounts to the display
    /// denomination.
    #[serde(default = "default_denom_coefficient")]
    pub denom_coefficient: f64,

    /// Bech32 prefix for derived consensus addresses.
    #[serde(default = "default_valcons_prefix")]
    pub valcons_prefix: String,

    /// Constant labels attached to every exported series.
    #[serde(default)]
    pub const_labels: BTreeMap<String, String>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_addr() -> String {
    "0.0.0.0:9300".to_string()
}

fn default_node_url() -> String {
    "http://localhost:1317".to_string()
}

fn default_page_limit() -> u64 {
    1000
}

fn default_denom() -> String {
    "atom".to_string()
}

fn default_denom_coefficient() -> f64 {
    1_000_000.0
}

fn default_valcons_prefix() -> String {
    "cosmosvalcons".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ExporterConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ServerError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServerError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServerError> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Reject values that cannot produce meaningful metrics.
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.denom_coefficient.is_finite() || self.denom_coefficient <= 0.0 {
            return Err(ServerError::Config(format!(
                "denom_coefficient must be a positive number, got {}",
                self.denom_coefficient
            )));
        }
        if self.page_limit == 0 {
            return Err(ServerError::Config(
                "page_limit must be nonzero".to_string(),
            ));
        }
        Ok(())
    }

    /// The subset of settings the scrape pipeline needs.
    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            page_limit: self.page_limit,
            denom: self.denom.clone(),
            denom_coefficient: self.denom_coefficient,
            valcons_prefix: self.valcons_prefix.clone(),
        }
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            node_url: default_node_url(),
            page_limit: default_page_limit(),
            denom: default_denom(),
            denom_coefficient: default_denom_coefficient(),
            valcons_prefix: default_valcons_prefix(),
            const_labels: BTreeMap::new(),
            log_level: default_log_level(),
        }
    }
}
