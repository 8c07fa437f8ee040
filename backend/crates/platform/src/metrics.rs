//! Request Metrics Collector
//!
//! Keeps the most recent request samples in a bounded ring buffer and derives
//! latency summaries from them on demand. Nothing is persisted; a restart
//! starts from an empty window.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

/// Default number of samples retained
pub const DEFAULT_CAPACITY: usize = 1000;

/// Number of endpoints reported in [`MetricsSummary::slowest_endpoints`]
const SLOWEST_ENDPOINTS: usize = 5;

/// One observed request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSample {
    pub endpoint: String,
    pub method: String,
    /// Milliseconds
    pub response_time: u64,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointLatency {
    /// `"METHOD path"`
    pub endpoint: String,
    pub avg_time: u64,
}

/// Aggregate view over the retained window. All values in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total: usize,
    pub average: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub slowest_endpoints: Vec<EndpointLatency>,
}

impl MetricsSummary {
    fn empty() -> Self {
        Self {
            total: 0,
            average: 0,
            p50: 0,
            p95: 0,
            p99: 0,
            slowest_endpoints: Vec::new(),
        }
    }
}

/// Bounded, shared request-metrics store
#[derive(Debug)]
pub struct MetricsCollector {
    capacity: usize,
    samples: Mutex<VecDeque<RequestSample>>,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl MetricsCollector {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Record a finished request, evicting the oldest sample when full.
    pub async fn record(&self, endpoint: &str, method: &str, status_code: u16, elapsed: Duration) {
        let sample = RequestSample {
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            response_time: elapsed.as_millis() as u64,
            status_code,
            timestamp: Utc::now(),
        };

        let mut samples = self.samples.lock().await;
        samples.push_back(sample);
        while samples.len() > self.capacity {
            samples.pop_front();
        }
    }

    pub async fn len(&self) -> usize {
        self.samples.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.samples.lock().await.is_empty()
    }

    /// The last `n` samples, oldest first
    pub async fn recent(&self, n: usize) -> Vec<RequestSample> {
        let samples = self.samples.lock().await;
        let skip = samples.len().saturating_sub(n);
        samples.iter().skip(skip).cloned().collect()
    }

    pub async fn summary(&self) -> MetricsSummary {
        let samples = self.samples.lock().await;
        summarize(samples.iter())
    }
}

fn summarize<'a>(samples: impl Iterator<Item = &'a RequestSample>) -> MetricsSummary {
    let mut latencies = Vec::new();
    let mut per_endpoint: HashMap<String, (u64, u64)> = HashMap::new();

    for sample in samples {
        latencies.push(sample.response_time);
        let entry = per_endpoint
            .entry(format!("{} {}", sample.method, sample.endpoint))
            .or_insert((0, 0));
        entry.0 += sample.response_time;
        entry.1 += 1;
    }

    if latencies.is_empty() {
        return MetricsSummary::empty();
    }

    latencies.sort_unstable();
    let total = latencies.len();
    let sum: u64 = latencies.iter().sum();

    let mut slowest_endpoints: Vec<EndpointLatency> = per_endpoint
        .into_iter()
        .map(|(endpoint, (sum, count))| EndpointLatency {
            endpoint,
            avg_time: sum / count,
        })
        .collect();
    slowest_endpoints.sort_by(|a, b| {
        b.avg_time
            .cmp(&a.avg_time)
            .then_with(|| a.endpoint.cmp(&b.endpoint))
    });
    slowest_endpoints.truncate(SLOWEST_ENDPOINTS);

    MetricsSummary {
        total,
        average: (sum as f64 / total as f64).round() as u64,
        p50: percentile(&latencies, 50.0),
        p95: percentile(&latencies, 95.0),
        p99: percentile(&latencies, 99.0),
        slowest_endpoints,
    }
}

/// Nearest-rank percentile over an already sorted slice
fn percentile(sorted: &[u64], pct: f64) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let rank = ((pct / 100.0) * sorted.len() as f64).ceil() as usize;
    sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_percentile_nearest_rank() {
        let sorted: Vec<u64> = (1..=100).collect();
        assert_eq!(percentile(&sorted, 50.0), 50);
        assert_eq!(percentile(&sorted, 95.0), 95);
        assert_eq!(percentile(&sorted, 99.0), 99);
        assert_eq!(percentile(&[7], 99.0), 7);
        assert_eq!(percentile(&[], 50.0), 0);
    }

    #[tokio::test]
    async fn test_empty_summary_is_zeroed() {
        let collector = MetricsCollector::default();
        let summary = collector.summary().await;
        assert_eq!(summary, MetricsSummary::empty());
        assert!(collector.recent(20).await.is_empty());
    }

    #[tokio::test]
    async fn test_ring_buffer_evicts_oldest() {
        let collector = MetricsCollector::new(3);
        for i in 0..5 {
            collector
                .record(&format!("/api/{i}"), "GET", 200, ms(i))
                .await;
        }

        assert_eq!(collector.len().await, 3);
        let recent = collector.recent(10).await;
        let endpoints: Vec<_> = recent.iter().map(|s| s.endpoint.as_str()).collect();
        assert_eq!(endpoints, vec!["/api/2", "/api/3", "/api/4"]);
    }

    #[tokio::test]
    async fn test_recent_returns_tail() {
        let collector = MetricsCollector::default();
        for i in 0..30 {
            collector.record("/api/health", "GET", 200, ms(i)).await;
        }
        let recent = collector.recent(20).await;
        assert_eq!(recent.len(), 20);
        assert_eq!(recent[0].response_time, 10);
        assert_eq!(recent[19].response_time, 29);
    }

    #[tokio::test]
    async fn test_summary_averages_and_slowest() {
        let collector = MetricsCollector::default();
        collector.record("/api/workouts", "GET", 200, ms(10)).await;
        collector.record("/api/workouts", "GET", 200, ms(30)).await;
        collector.record("/api/workouts", "POST", 201, ms(50)).await;
        collector.record("/api/health", "GET", 200, ms(2)).await;

        let summary = collector.summary().await;
        assert_eq!(summary.total, 4);
        assert_eq!(summary.average, 23);
        assert_eq!(summary.p50, 10);
        assert_eq!(summary.p99, 50);
        assert_eq!(
            summary.slowest_endpoints[0],
            EndpointLatency {
                endpoint: "POST /api/workouts".to_string(),
                avg_time: 50,
            }
        );
        assert_eq!(summary.slowest_endpoints[1].avg_time, 20);
        assert_eq!(summary.slowest_endpoints.len(), 3);
    }

    #[tokio::test]
    async fn test_slowest_endpoints_capped_at_five() {
        let collector = MetricsCollector::default();
        for i in 0..8 {
            collector
                .record(&format!("/api/{i}"), "GET", 200, ms(i * 10))
                .await;
        }
        let summary = collector.summary().await;
        assert_eq!(summary.slowest_endpoints.len(), 5);
        assert_eq!(summary.slowest_endpoints[0].endpoint, "GET /api/7");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(MetricsSummary::empty()).unwrap();
        assert!(json.get("slowestEndpoints").is_some());
        assert_eq!(json["total"], 0);
    }
}
