//! # Receipts API
//!
//! Receipt submission and points lookup.
//!
//! ## Endpoints
//!
//! - `POST /receipts/process` — validate and score a submitted receipt
//! - `GET /receipts/:id/points` — points for a previously accepted receipt

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tally_core::{Item, Receipt, ReceiptId};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// A candidate receipt as submitted over the wire.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    /// Name of the retailer or store.
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Purchased items; at least one is required.
    pub items: Vec<ItemPayload>,
    /// Receipt total, digits with exactly two fractional digits.
    pub total: String,
}

/// One purchased item on a submitted receipt.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    /// Short product description.
    pub short_description: String,
    /// Item price, same format as the receipt total.
    pub price: String,
}

impl From<ProcessReceiptRequest> for Receipt {
    fn from(req: ProcessReceiptRequest) -> Self {
        Receipt {
            retailer: req.retailer,
            purchase_date: req.purchase_date,
            purchase_time: req.purchase_time,
            items: req.items.into_iter().map(Item::from).collect(),
            total: req.total,
        }
    }
}

impl From<ItemPayload> for Item {
    fn from(item: ItemPayload) -> Self {
        Item {
            short_description: item.short_description,
            price: item.price,
        }
    }
}

/// Identifier issued for an accepted receipt.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessReceiptResponse {
    /// Opaque identifier for later points lookup.
    #[schema(value_type = String)]
    pub id: ReceiptId,
}

/// Points recorded for an accepted receipt.
#[derive(Debug, Serialize, ToSchema)]
pub struct PointsResponse {
    /// Total points awarded.
    pub points: u64,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the receipts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /receipts/process — Validate, score, and store a receipt.
#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = ProcessReceiptRequest,
    responses(
        (status = 200, description = "Receipt accepted", body = ProcessReceiptResponse),
        (status = 400, description = "Body is not a receipt-shaped JSON object", body = crate::error::ErrorBody),
        (status = 422, description = "Receipt fails a validation rule", body = crate::error::ErrorBody),
    ),
    tag = "receipts"
)]
pub(crate) async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Json<ProcessReceiptRequest>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let receipt: Receipt = extract_json(body)?.into();
    receipt.validate()?;

    let points = tally_core::score(&receipt);
    let id = ReceiptId::new();
    state.scores.put(id.clone(), points);

    tracing::debug!(%id, points, retailer = %receipt.retailer, "receipt accepted");
    Ok(Json(ProcessReceiptResponse { id }))
}

/// GET /receipts/:id/points — Look up the points for an accepted receipt.
#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    params(("id" = String, Path, description = "Receipt identifier")),
    responses(
        (status = 200, description = "Points found", body = PointsResponse),
        (status = 404, description = "No receipt recorded under that identifier", body = crate::error::ErrorBody),
    ),
    tag = "receipts"
)]
pub(crate) async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    // An identifier that does not parse cannot name a stored receipt, so
    // it falls on the same not-found axis as an unknown one.
    let id = ReceiptId::parse(&id)
        .map_err(|_| AppError::NotFound(format!("no receipt found for id {id}")))?;

    state
        .scores
        .get(&id)
        .map(|points| Json(PointsResponse { points }))
        .ok_or_else(|| AppError::NotFound(format!("no receipt found for id {id}")))
}
