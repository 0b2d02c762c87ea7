//! Server and encoder error types.

use thiserror::Error;

/// Failure to encode a snapshot into the text exposition format.
///
/// The only error class that surfaces in an HTTP response; everything
/// upstream of the encoder degrades by omission instead.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unknown metric {0:?} in snapshot")]
    UnknownMetric(&'static str),

    #[error(transparent)]
    Prometheus(#[from] prometheus::Error),
}

/// Failure to configure or run the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(String),

    #[error("could not bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("server error: {0}")]
    Serve(String),
}
