//! # Metrics Collection Module
//!
//! Prometheus metrics for routing and delegation history, served at
//! `GET /metrics`.
//!
//! ## Metrics Tracked
//!
//! **Counters:**
//! - `delegator_routes_total{complexity}` - Tasks routed, by complexity tier
//! - `delegator_route_rejections_total{reason}` - Route requests refused
//! - `delegator_delegations_logged_total{status}` - Log entries appended
//!
//! **Histograms:**
//! - `delegator_delegation_response_seconds` - Observed chain response time
//!
//! **Gauges:**
//! - `delegator_history_entries` - Entries currently retained in the log

pub mod handler;

pub use metrics_exporter_prometheus::PrometheusBuilder;

use crate::history::DelegationLogEntry;
use crate::routing::TaskComplexity;
use std::time::Instant;

/// Records delegator metrics and renders them for scraping.
pub struct MetricsCollector {
    /// Service startup time for uptime calculation
    start_time: Instant,
    /// Prometheus handle for rendering metrics
    prometheus_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl MetricsCollector {
    pub fn new(
        start_time: Instant,
        prometheus_handle: metrics_exporter_prometheus::PrometheusHandle,
    ) -> Self {
        Self {
            start_time,
            prometheus_handle,
        }
    }

    /// Count a routed task.
    pub fn record_route(&self, complexity: TaskComplexity) {
        metrics::counter!("delegator_routes_total", "complexity" => complexity.as_str())
            .increment(1);
    }

    /// Count a refused route request ("disabled", "invalid_input", ...).
    pub fn record_rejection(&self, reason: &'static str) {
        metrics::counter!("delegator_route_rejections_total", "reason" => reason).increment(1);
    }

    /// Count an appended log entry and its observed response time.
    pub fn record_logged(&self, entry: &DelegationLogEntry, retained: usize) {
        metrics::counter!(
            "delegator_delegations_logged_total",
            "status" => entry.status.as_str()
        )
        .increment(1);
        if let Some(ms) = entry.response_time_ms {
            metrics::histogram!("delegator_delegation_response_seconds")
                .record(ms as f64 / 1000.0);
        }
        metrics::gauge!("delegator_history_entries").set(retained as f64);
    }

    /// Get uptime in seconds since startup.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Render Prometheus metrics in text format.
    pub fn render_metrics(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Install the global Prometheus recorder.
///
/// Response-time buckets (seconds) follow the agent cost model: a few
/// seconds for a single hand-off up to tens of minutes for the full cycle.
pub fn setup_metrics(
) -> Result<metrics_exporter_prometheus::PrometheusHandle, Box<dyn std::error::Error>> {
    use metrics_exporter_prometheus::Matcher;

    let response_buckets = &[
        0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 300.0, 600.0, 1200.0, 2400.0,
    ];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("delegator_delegation_response_seconds".to_string()),
            response_buckets,
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Install the recorder, or build a detached handle if one is already
/// installed (e.g. several app states in one test process).
pub fn setup_or_detached_handle() -> metrics_exporter_prometheus::PrometheusHandle {
    setup_metrics().unwrap_or_else(|e| {
        tracing::debug!("Metrics already initialized, creating new handle: {}", e);
        PrometheusBuilder::new().build_recorder().handle()
    })
}
