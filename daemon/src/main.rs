//! stakescope daemon, entry point for the validator telemetry exporter.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use stakescope_client::LcdClient;
use stakescope_collector::Collector;
use stakescope_server::{AppState, ExporterConfig, ExporterServer, MetricsEncoder};

#[derive(Parser)]
#[command(name = "stakescope", about = "Validator-set telemetry exporter for Cosmos-SDK chains")]
struct Cli {
    /// Address for the metrics endpoint.
    #[arg(long, env = "STAKESCOPE_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// Base URL of the chain REST/LCD endpoint to query.
    #[arg(long, env = "STAKESCOPE_NODE_URL")]
    node_url: Option<String>,

    /// Page-size cap for paginated upstream queries.
    #[arg(long, env = "STAKESCOPE_PAGE_LIMIT")]
    page_limit: Option<u64>,

    /// Display denomination label attached to amount series.
    #[arg(long, env = "STAKESCOPE_DENOM")]
    denom: Option<String>,

    /// Divisor converting base-denomination amounts to the display denomination.
    #[arg(long, env = "STAKESCOPE_DENOM_COEFFICIENT")]
    denom_coefficient: Option<f64>,

    /// Bech32 prefix for derived consensus addresses.
    #[arg(long, env = "STAKESCOPE_VALCONS_PREFIX")]
    valcons_prefix: Option<String>,

    /// Constant labels attached to every series (comma-separated "key=value").
    #[arg(long, env = "STAKESCOPE_CONST_LABELS", value_delimiter = ',')]
    const_labels: Vec<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "STAKESCOPE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load the file first so the merged log level can drive the subscriber;
    // the load outcome itself is logged once tracing is up.
    let file_result = cli
        .config
        .as_ref()
        .map(|path| ExporterConfig::from_toml_file(&path.display().to_string()));

    let mut config = match &file_result {
        Some(Ok(file_config)) => file_config.clone(),
        _ => ExporterConfig::default(),
    };

    if let Some(listen_addr) = cli.listen_addr {
        config.listen_addr = listen_addr;
    }
    if let Some(node_url) = cli.node_url {
        config.node_url = node_url;
    }
    if let Some(page_limit) = cli.page_limit {
        config.page_limit = page_limit;
    }
    if let Some(denom) = cli.denom {
        config.denom = denom;
    }
    if let Some(denom_coefficient) = cli.denom_coefficient {
        config.denom_coefficient = denom_coefficient;
    }
    if let Some(valcons_prefix) = cli.valcons_prefix {
        config.valcons_prefix = valcons_prefix;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    for pair in &cli.const_labels {
        match pair.split_once('=') {
            Some((key, value)) => {
                config
                    .const_labels
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            None => anyhow::bail!("invalid const label {pair:?}, expected \"key=value\""),
        }
    }

    stakescope_utils::init_tracing(&config.log_level);

    match (&cli.config, &file_result) {
        (Some(path), Some(Ok(_))) => {
            tracing::info!("Loaded config from {}", path.display());
        }
        (Some(path), Some(Err(e))) => {
            tracing::warn!(
                "Failed to load config file {}: {e}, using CLI defaults",
                path.display()
            );
        }
        _ => {}
    }

    config.validate()?;

    tracing::info!(
        node = %config.node_url,
        listen = %config.listen_addr,
        denom = %config.denom,
        "Starting stakescope exporter"
    );

    let client = LcdClient::new(&config.node_url);
    let collector = Collector::new(client, config.collector_config());
    let encoder = MetricsEncoder::new(&config.const_labels)?;
    let state = Arc::new(AppState { collector, encoder });

    let server = ExporterServer::new(&config.listen_addr);
    tokio::select! {
        result = server.serve(state) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping exporter");
        }
    }

    tracing::info!("stakescope exited cleanly");
    Ok(())
}
