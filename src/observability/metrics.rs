//! Metrics collection and exposition.
//!
//! # Metrics
//! - `credits_cache_lookups_total` (counter): cache reads by key, result (hit/miss)
//! - `credits_cache_entries` (gauge): entries in the in-memory cache
//! - `credits_vm_queries_total` (counter): VM queries by function, outcome
//! - `credits_vm_query_duration_seconds` (histogram): VM query latency by function
//! - `credits_http_requests_total` (counter): API requests by route, status

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and serve it on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_cache_lookup(key: &str, hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!("credits_cache_lookups_total", "key" => key.to_string(), "result" => result)
        .increment(1);
}

pub fn record_cache_size(entries: usize) {
    gauge!("credits_cache_entries").set(entries as f64);
}

pub fn record_vm_query(function: &str, outcome: &'static str, start: Instant) {
    counter!(
        "credits_vm_queries_total",
        "function" => function.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("credits_vm_query_duration_seconds", "function" => function.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_request(route: &'static str, status: u16) {
    counter!(
        "credits_http_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
}

/// In-process recorder for asserting on emitted metrics.
#[cfg(test)]
pub(crate) mod testing {
    use ::metrics::{
        Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
    };
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Captures every counter registration as `name{label=value,...}` and the
    /// last value written to any gauge.
    #[derive(Default)]
    pub(crate) struct CapturingRecorder {
        counters: Mutex<Vec<String>>,
        gauge: Arc<AtomicU64>,
    }

    impl CapturingRecorder {
        pub(crate) fn counters(&self, name: &str) -> Vec<String> {
            self.counters
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.starts_with(name))
                .cloned()
                .collect()
        }

        pub(crate) fn gauge(&self) -> f64 {
            f64::from_bits(self.gauge.load(Ordering::SeqCst))
        }
    }

    fn render(key: &Key) -> String {
        let labels: Vec<String> = key
            .labels()
            .map(|l| format!("{}={}", l.key(), l.value()))
            .collect();
        format!("{}{{{}}}", key.name(), labels.join(","))
    }

    impl Recorder for CapturingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            self.counters.lock().unwrap().push(render(key));
            Counter::noop()
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::from_arc(self.gauge.clone())
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }
}
