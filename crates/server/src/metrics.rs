//! Prometheus metrics for observability.
//!
//! - HTTP request metrics (latency, counts, in flight)
//! - Record counts per collection (refreshed on scrape)

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry,
    TextEncoder,
};
use regex_lite::Regex;
use tracing::warn;

use honeyrae_core::RecordStore;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "honeyrae_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
        ]),
        &["method", "path", "status"],
    )
    .expect("valid histogram definition")
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("honeyrae_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .expect("valid counter definition")
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "honeyrae_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .expect("valid gauge definition")
});

// =============================================================================
// Record Metrics
// =============================================================================

/// Records held per collection.
pub static RECORDS: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new("honeyrae_records", "Number of records per collection"),
        &["kind"],
    )
    .expect("valid gauge definition")
});

static NUMERIC_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/-?\d+(/|$)").expect("valid path regex"));

fn register_metrics(registry: &Registry) {
    let collectors: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(HTTP_REQUEST_DURATION.clone()),
        Box::new(HTTP_REQUESTS_TOTAL.clone()),
        Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()),
        Box::new(RECORDS.clone()),
    ];

    for collector in collectors {
        if let Err(e) = registry.register(collector) {
            warn!("Failed to register metric: {}", e);
        }
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        warn!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Refresh record gauges from the store.
pub fn collect_record_metrics(store: &dyn RecordStore) {
    match store.counts() {
        Ok(counts) => {
            RECORDS
                .with_label_values(&["customers"])
                .set(counts.customers as i64);
            RECORDS
                .with_label_values(&["employees"])
                .set(counts.employees as i64);
            RECORDS
                .with_label_values(&["service_tickets"])
                .set(counts.service_tickets as i64);
        }
        Err(e) => warn!("Failed to collect record metrics: {}", e),
    }
}

/// Normalize a path for metric labels (replace numeric IDs with placeholders).
pub fn normalize_path(path: &str) -> String {
    // Run twice: adjacent ids share a slash, so one pass skips every other segment
    let once = NUMERIC_SEGMENT.replace_all(path, "/{id}$1");
    NUMERIC_SEGMENT.replace_all(&once, "/{id}$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeyrae_core::InMemoryRecordStore;

    #[test]
    fn test_normalize_path_numeric() {
        assert_eq!(normalize_path("/servicetickets/12"), "/servicetickets/{id}");
    }

    #[test]
    fn test_normalize_path_negative() {
        assert_eq!(normalize_path("/customers/-1"), "/customers/{id}");
    }

    #[test]
    fn test_normalize_path_adjacent_ids() {
        assert_eq!(normalize_path("/a/1/2/b"), "/a/{id}/{id}/b");
    }

    #[test]
    fn test_normalize_path_no_ids() {
        assert_eq!(normalize_path("/employees"), "/employees");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/test", "200"])
            .inc();

        let output = encode_metrics();
        assert!(output.contains("honeyrae_http_requests_total"));
    }

    #[test]
    fn test_collect_record_metrics() {
        let store = InMemoryRecordStore::seeded();
        collect_record_metrics(&store);

        assert_eq!(RECORDS.with_label_values(&["customers"]).get(), 3);
        assert_eq!(RECORDS.with_label_values(&["employees"]).get(), 2);

        let output = encode_metrics();
        assert!(output.contains("honeyrae_records"));
    }
}
