//! In-process operational metrics for the monitoring service.
//!
//! Counters and histograms keyed by label sets in a `DashMap`, rendered in
//! Prometheus text format by `/ops/metrics`. Label keys are sorted so the same
//! label set always lands on the same series. Histogram buckets are fixed in
//! microseconds.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn render_labels(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}{{{}}} {val}", render_labels(r.key()));
        }
    }
}

// 1ms .. 10s; scans are network round trips, not in-process work.
const BUCKETS_MICROS: [u64; 8] = [
    1_000, 5_000, 25_000, 100_000, 250_000, 1_000_000, 5_000_000, 10_000_000,
];

#[derive(Default)]
struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; BUCKETS_MICROS.len()],
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<LabelKey, AtomicHistogram>,
}

impl HistogramVec {
    /// Record a duration into cumulative buckets (microsecond scale).
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self.map.entry(label_key(labels)).or_default();
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum.fetch_add(micros, Ordering::Relaxed);
        for (bucket, &le) in hist.buckets.iter().zip(BUCKETS_MICROS.iter()) {
            if micros <= le {
                bucket.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn count(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|h| h.count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} histogram");
        for r in self.map.iter() {
            let hist = r.value();
            let labels = render_labels(r.key());
            let prefix = if labels.is_empty() { String::new() } else { format!("{labels},") };

            for (bucket, le) in hist.buckets.iter().zip(BUCKETS_MICROS.iter()) {
                let n = bucket.load(Ordering::Relaxed);
                let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"{le}\"}} {n}");
            }
            let count = hist.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"+Inf\"}} {count}");
            let _ = writeln!(out, "{name}_sum{{{labels}}} {}", hist.sum.load(Ordering::Relaxed));
            let _ = writeln!(out, "{name}_count{{{labels}}} {count}");
        }
    }
}

#[derive(Default)]
pub struct ServiceMetrics {
    pub http_requests: CounterVec,
    pub store_scans: CounterVec,
    pub scan_duration: HistogramVec, // microseconds
    pub alerts_created: CounterVec,
}

impl ServiceMetrics {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render("monitoring_http_requests_total", &mut out);
        self.store_scans.render("monitoring_store_scans_total", &mut out);
        self.scan_duration.render("monitoring_store_scan_duration_micros", &mut out);
        self.alerts_created.render("monitoring_alerts_created_total", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels_are_order_independent() {
        let c = CounterVec::default();
        c.inc(&[("route", "/health"), ("status", "200")]);
        c.inc(&[("status", "200"), ("route", "/health")]);
        assert_eq!(c.get(&[("route", "/health"), ("status", "200")]), 2);
        assert_eq!(c.get(&[("route", "/health"), ("status", "500")]), 0);
    }

    #[test]
    fn render_includes_series_and_buckets() {
        let m = ServiceMetrics::default();
        m.store_scans.inc(&[("outcome", "ok")]);
        m.scan_duration.observe(&[], Duration::from_millis(3));
        assert_eq!(m.scan_duration.count(&[]), 1);
        assert_eq!(m.scan_duration.count(&[("outcome", "ok")]), 0);

        let text = m.render();
        assert!(text.contains("# TYPE monitoring_store_scans_total counter"));
        assert!(text.contains("monitoring_store_scans_total{outcome=\"ok\"} 1"));
        assert!(text.contains("monitoring_store_scan_duration_micros_bucket{le=\"1000\"} 0"));
        assert!(text.contains("monitoring_store_scan_duration_micros_bucket{le=\"5000\"} 1"));
        assert!(text.contains("monitoring_store_scan_duration_micros_count{} 1"));
    }

    #[test]
    fn label_values_are_escaped() {
        let c = CounterVec::default();
        c.inc(&[("severity", "a\"b")]);
        let mut out = String::new();
        c.render("x", &mut out);
        assert!(out.contains("x{severity=\"a\\\"b\"} 1"));
    }
}
