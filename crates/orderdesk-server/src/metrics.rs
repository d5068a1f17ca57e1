// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_default()
            .push(latency.as_nanos() as u64);
    }

    /// Plain-text exposition: request counts per route/status plus p50/p95
    /// latency per route, in deterministic order.
    pub(crate) async fn render_text(&self) -> String {
        let mut out = String::new();

        let counts = self.counts.lock().await;
        let mut count_rows: Vec<(&(String, u16), &u64)> = counts.iter().collect();
        count_rows.sort_by(|a, b| a.0.cmp(b.0));
        for ((route, status), total) in count_rows {
            out.push_str(&format!(
                "orderdesk_requests_total{{route=\"{route}\",status=\"{status}\"}} {total}\n"
            ));
        }
        drop(counts);

        let latency_map = self.latency_ns.lock().await;
        let mut routes: Vec<&String> = latency_map.keys().collect();
        routes.sort();
        for route in routes {
            let mut samples = latency_map[route].clone();
            if samples.is_empty() {
                continue;
            }
            samples.sort_unstable();
            for (label, q) in [("0.5", 0.5_f64), ("0.95", 0.95_f64)] {
                let idx = (((samples.len() as f64) * q).ceil() as usize)
                    .saturating_sub(1)
                    .min(samples.len() - 1);
                out.push_str(&format!(
                    "orderdesk_request_latency_ns{{route=\"{route}\",quantile=\"{label}\"}} {}\n",
                    samples[idx]
                ));
            }
        }
        out
    }
}
