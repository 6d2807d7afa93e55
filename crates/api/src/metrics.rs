//! In-process HTTP metrics rendered in the Prometheus text exposition format.
//!
//! Counters are keyed by method, matched route template, and status code, so
//! cardinality stays bounded by the route table rather than by request URLs.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Prefix applied to every exported metric name.
const METRIC_PREFIX: &str = "gorello";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RequestKey {
    method: String,
    route: String,
    status: u16,
}

#[derive(Debug, Default, Clone, Copy)]
struct LatencyTotals {
    count: u64,
    sum_secs: f64,
}

#[derive(Debug, Default)]
struct Registry {
    requests: BTreeMap<RequestKey, u64>,
    latency: BTreeMap<(String, String), LatencyTotals>,
}

/// Thread-safe request counter and latency accumulator.
#[derive(Debug, Default)]
pub struct HttpMetrics {
    registry: Mutex<Registry>,
}

impl HttpMetrics {
    /// Record one completed request.
    pub fn record(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);

        let key = RequestKey {
            method: method.to_string(),
            route: route.to_string(),
            status,
        };
        *registry.requests.entry(key).or_insert(0) += 1;

        let totals = registry
            .latency
            .entry((method.to_string(), route.to_string()))
            .or_default();
        totals.count += 1;
        totals.sum_secs += elapsed.as_secs_f64();
    }

    /// Render all metrics in Prometheus text format (version 0.0.4).
    pub fn render(&self) -> String {
        let registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let mut out = String::new();

        let requests = format!("{METRIC_PREFIX}_http_requests_total");
        let _ = writeln!(out, "# HELP {requests} Total number of HTTP requests handled.");
        let _ = writeln!(out, "# TYPE {requests} counter");
        for (key, count) in &registry.requests {
            let _ = writeln!(
                out,
                "{requests}{{method=\"{}\",route=\"{}\",status=\"{}\"}} {count}",
                escape_label(&key.method),
                escape_label(&key.route),
                key.status,
            );
        }

        let duration = format!("{METRIC_PREFIX}_http_request_duration_seconds");
        let _ = writeln!(out, "# HELP {duration} Time spent handling HTTP requests.");
        let _ = writeln!(out, "# TYPE {duration} summary");
        for ((method, route), totals) in &registry.latency {
            let labels = format!(
                "method=\"{}\",route=\"{}\"",
                escape_label(method),
                escape_label(route)
            );
            let _ = writeln!(out, "{duration}_sum{{{labels}}} {}", totals.sum_secs);
            let _ = writeln!(out, "{duration}_count{{{labels}}} {}", totals.count);
        }

        out
    }
}

/// Escape a label value per the exposition format (`\`, `"`, newline).
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
