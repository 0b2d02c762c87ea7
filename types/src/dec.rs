//! Exact decimal values carried as text.
//!
//! The chain's SDK represents monetary amounts and rates as arbitrary-precision
//! fixed-point numbers. They are kept as their exact textual form until the
//! moment a metric needs a machine float, so no precision is lost in transit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DecError;

/// A chain decimal in its exact textual representation.
///
/// Conversion to `f64` is explicit and fallible; callers are expected to
/// treat a failed conversion as "omit this one value", never as fatal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dec(String);

impl Dec {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to a 64-bit float approximation.
    pub fn to_f64(&self) -> Result<f64, DecError> {
        self.0
            .parse::<f64>()
            .map_err(|_| DecError::Malformed(self.0.clone()))
    }

    /// Convert to a 64-bit float and divide by `coefficient`, moving the
    /// value from the chain's base denomination to its display denomination.
    pub fn to_f64_scaled(&self, coefficient: f64) -> Result<f64, DecError> {
        Ok(self.to_f64()? / coefficient)
    }
}

impl From<&str> for Dec {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
