//! Axum-based scrape endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use stakescope_client::ChainQuery;
use stakescope_collector::Collector;

use crate::encode::MetricsEncoder;
use crate::error::ServerError;

/// Content type of the text exposition format.
const TEXT_FORMAT: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Everything a scrape needs, shared across requests.
pub struct AppState<C> {
    pub collector: Collector<C>,
    pub encoder: MetricsEncoder,
}

/// The exporter's HTTP server.
pub struct ExporterServer {
    listen_addr: String,
}

impl ExporterServer {
    pub fn new(listen_addr: &str) -> Self {
        Self {
            listen_addr: listen_addr.to_string(),
        }
    }

    /// Bind and serve until the task is cancelled or the listener fails.
    pub async fn serve<C>(&self, state: Arc<AppState<C>>) -> Result<(), ServerError>
    where
        C: ChainQuery + 'static,
    {
        let app = Router::new()
            .route("/metrics", get(metrics_handler::<C>))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(&self.listen_addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: self.listen_addr.clone(),
                reason: e.to_string(),
            })?;
        tracing::info!(addr = %self.listen_addr, "metrics endpoint listening");

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))
    }
}

/// Run the full fetch → derive → assemble → encode pipeline once.
///
/// The response is the best-effort snapshot: upstream failures have already
/// degraded to omitted series, so the status is 200 no matter how many
/// fetches failed. Only an encoder failure produces an error status.
async fn metrics_handler<C>(State(state): State<Arc<AppState<C>>>) -> Response
where
    C: ChainQuery + 'static,
{
    let started = Instant::now();
    let snapshot = state.collector.collect().await;

    match state.encoder.encode(&snapshot) {
        Ok(body) => {
            tracing::info!(
                method = "GET",
                endpoint = "/metrics",
                series = snapshot.len(),
                elapsed = started.elapsed().as_secs_f64(),
                "request processed"
            );
            ([(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "could not encode snapshot");
            (StatusCode::INTERNAL_SERVER_ERROR, "snapshot encoding failed").into_response()
        }
    }
}
