//! Query client error types.

use thiserror::Error;

/// A failed upstream query.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected http status {code} from {url}")]
    Status { code: u16, url: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}
