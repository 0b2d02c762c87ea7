//! HTTP scrape surface for the stakescope exporter.
//!
//! Owns the pieces that live for the whole process: the exporter
//! configuration, the metrics encoder (registry + gauge vectors, built
//! once), and the axum server exposing `GET /metrics`.

pub mod config;
pub mod encode;
pub mod error;
pub mod server;

pub use config::ExporterConfig;
pub use encode::MetricsEncoder;
pub use error::{EncodeError, ServerError};
pub use server::{AppState, ExporterServer};
