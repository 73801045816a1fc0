//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tally Receipt Points API",
        version = "0.1.0",
        description = "Receipt submission with structural validation and deterministic points scoring, plus points lookup by identifier.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::receipts::process_receipt,
        crate::routes::receipts::get_points,
    ),
    components(schemas(
        // Receipt DTOs
        crate::routes::receipts::ProcessReceiptRequest,
        crate::routes::receipts::ItemPayload,
        crate::routes::receipts::ProcessReceiptResponse,
        crate::routes::receipts::PointsResponse,
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "receipts", description = "Receipt submission and points lookup"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_both_receipt_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/receipts/process"));
        assert!(spec.paths.paths.contains_key("/receipts/{id}/points"));
    }
}
