//! # Request Metrics
//!
//! Lightweight request metrics using atomic counters, shared with
//! handlers and tests via an `Extension`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Shared counters for served requests and error responses.
#[derive(Debug, Clone, Default)]
pub struct RequestMetrics {
    requests: Arc<AtomicU64>,
    errors: Arc<AtomicU64>,
}

impl RequestMetrics {
    /// Create a fresh metrics instance with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requests observed.
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Requests that produced a 4xx or 5xx response.
    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}

/// Middleware that increments request and error counters.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<RequestMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        m.requests.fetch_add(1, Ordering::Relaxed);
        if response.status().is_client_error() || response.status().is_server_error() {
            m.errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let metrics = RequestMetrics::new();
        assert_eq!(metrics.requests(), 0);
        assert_eq!(metrics.errors(), 0);
    }

    #[test]
    fn clones_share_counters() {
        let metrics = RequestMetrics::new();
        let clone = metrics.clone();
        metrics.requests.fetch_add(3, Ordering::Relaxed);
        assert_eq!(clone.requests(), 3);
    }
}
