//! # tally-api — Axum HTTP Service for Receipt Points
//!
//! Thin HTTP glue around the `tally-core` validator and points engine:
//! decode a submitted receipt, validate it, score it, hand the score to
//! the injected store, and serve lookups by identifier.
//!
//! ## API Surface
//!
//! | Route                  | Method | Purpose                           |
//! |------------------------|--------|-----------------------------------|
//! | `/receipts/process`    | POST   | Validate, score, and store a receipt |
//! | `/receipts/:id/points` | GET    | Look up the points for a receipt  |
//! | `/health/liveness`     | GET    | Liveness probe                    |
//! | `/health/readiness`    | GET    | Readiness probe                   |
//! | `/openapi.json`        | GET    | Generated OpenAPI spec            |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;

use crate::middleware::metrics::RequestMetrics;
use crate::state::AppState;

/// Assemble the application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the middleware stack
/// so they stay cheap and unlogged.
pub fn app(state: AppState) -> Router {
    let metrics = RequestMetrics::new();

    let api = Router::new()
        .merge(routes::receipts::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe. Returns 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The service has no startup dependencies, so ready
/// and alive coincide.
async fn readiness() -> &'static str {
    "ready"
}
