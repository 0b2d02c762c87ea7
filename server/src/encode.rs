//! Snapshot encoding into the Prometheus text exposition format.
//!
//! The encoder owns a dedicated [`Registry`] with one gauge vector per
//! metric in the schema, constructed once at process start and fed one
//! immutable snapshot per scrape. The per-scrape work is reset, apply,
//! gather; nothing about the registry is rebuilt between requests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use prometheus::{GaugeVec, Opts, Registry, TextEncoder};

use stakescope_collector::{schema, Snapshot};

use crate::error::EncodeError;

/// Process-lifetime encoder for metric snapshots.
pub struct MetricsEncoder {
    registry: Registry,
    vecs: HashMap<&'static str, GaugeVec>,
    /// Serializes reset/apply/gather so concurrent scrapes cannot
    /// interleave their series.
    guard: Mutex<()>,
}

impl MetricsEncoder {
    /// Register one gauge vector per schema entry, all carrying
    /// `const_labels`.
    pub fn new(const_labels: &BTreeMap<String, String>) -> Result<Self, EncodeError> {
        let registry = Registry::new();
        let mut vecs = HashMap::with_capacity(schema::ALL.len());
        for def in schema::ALL {
            let opts = Opts::new(def.name, def.help)
                .const_labels(const_labels.clone().into_iter().collect());
            let vec = GaugeVec::new(opts, def.labels)?;
            registry.register(Box::new(vec.clone()))?;
            vecs.insert(def.name, vec);
        }
        Ok(Self {
            registry,
            vecs,
            guard: Mutex::new(()),
        })
    }

    /// Serialize one snapshot to the text exposition format.
    pub fn encode(&self, snapshot: &Snapshot) -> Result<String, EncodeError> {
        // The guard carries no data, so a poisoned lock is still usable.
        let _guard = match self.guard.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        for vec in self.vecs.values() {
            vec.reset();
        }

        for series in snapshot.series() {
            let vec = self
                .vecs
                .get(series.name)
                .ok_or(EncodeError::UnknownMetric(series.name))?;
            let values: Vec<&str> = series.labels.iter().map(String::as_str).collect();
            vec.get_metric_with_label_values(&values)?.set(series.value);
        }

        let text = TextEncoder::new().encode_to_string(&self.registry.gather())?;
        Ok(text)
    }
}
