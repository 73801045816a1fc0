//! # Request Middleware
//!
//! - `metrics` — in-process request/error counters
//! - `tracing_layer` — structured request logging via `tower-http`

pub mod metrics;
pub mod tracing_layer;
