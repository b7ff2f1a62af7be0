//! Prometheus metrics for Project Handles.
//!
//! All metrics follow the naming convention: `ph_handles_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Committed claim writes
    pub static ref HANDLE_WRITES: CounterVec = CounterVec::new(
        Opts::new("ph_handles_writes_total", "Claim writes committed"),
        &["kind"]  // kind: name/name_with_subdomain
    ).expect("metric creation failed");

    /// Writes rejected by the access guard
    pub static ref HANDLE_WRITES_REJECTED: Counter = Counter::new(
        "ph_handles_writes_rejected_total",
        "Claim writes rejected as unauthorized"
    ).expect("metric creation failed");

    /// Handle lookups by outcome
    pub static ref HANDLE_LOOKUPS: CounterVec = CounterVec::new(
        Opts::new("ph_handles_lookups_total", "Handle lookups"),
        &["outcome"]  // outcome: unset/verified/mismatch
    ).expect("metric creation failed");

    /// Reverse verification latency
    pub static ref VERIFICATION_DURATION: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "ph_handles_verification_duration_seconds",
            "Time spent deriving the node and checking the reverse record"
        ).buckets(exponential_buckets(0.00001, 2.0, 14).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Label values for `HANDLE_WRITES`.
pub mod write_kind {
    /// `set_name`
    pub const NAME: &str = "name";
    /// `set_name_with_subdomain`
    pub const NAME_WITH_SUBDOMAIN: &str = "name_with_subdomain";
}

/// Label values for `HANDLE_LOOKUPS`.
pub mod lookup_outcome {
    /// No claim stored.
    pub const UNSET: &str = "unset";
    /// Reverse record matched.
    pub const VERIFIED: &str = "verified";
    /// Reverse record absent, unparseable or pointing elsewhere.
    pub const MISMATCH: &str = "mismatch";
}

/// Handle for registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(HANDLE_WRITES.clone()),
        Box::new(HANDLE_WRITES_REJECTED.clone()),
        Box::new(HANDLE_LOOKUPS.clone()),
        Box::new(VERIFICATION_DURATION.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_metrics() {
        // May fail if another test registered first, which is fine
        let _ = register_metrics();
    }

    #[test]
    fn test_counter_increment() {
        HANDLE_WRITES_REJECTED.inc();
        assert!(HANDLE_WRITES_REJECTED.get() >= 1.0);
    }

    #[test]
    fn test_labelled_counter() {
        HANDLE_LOOKUPS.with_label_values(&[lookup_outcome::VERIFIED]).inc();
        assert!(
            HANDLE_LOOKUPS
                .with_label_values(&[lookup_outcome::VERIFIED])
                .get()
                >= 1.0
        );
    }

    #[test]
    fn test_histogram_timer() {
        let before = VERIFICATION_DURATION.get_sample_count();
        {
            let _timer = HistogramTimer::new(&VERIFICATION_DURATION);
        }
        assert!(VERIFICATION_DURATION.get_sample_count() > before);
    }

    #[test]
    fn test_encode_after_register() {
        let _ = register_metrics();
        HANDLE_WRITES.with_label_values(&[write_kind::NAME]).inc();
        let text = encode_metrics().unwrap();
        assert!(text.contains("ph_handles_writes_total"));
    }
}
