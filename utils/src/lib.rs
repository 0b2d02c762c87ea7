//! Shared utilities for the stakescope exporter.

pub mod logging;

pub use logging::init_tracing;
