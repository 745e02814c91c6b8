//! Cart API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use validator::Validate;

use crate::api::quote::{QuantityPolicy, QuoteLine, QuoteResponse, build_cart};
use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use crate::utils::AppResult;
use crate::utils::validation::validate_payload;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[validate(length(max = 500), nested)]
    pub items: Vec<QuoteLine>,
}

/// POST /api/cart/quote - totals for a set of lines
///
/// Lines with a quantity of zero or below are dropped.
pub async fn quote(
    State(state): State<ServerState>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<QuoteResponse>> {
    validate_payload(&payload)?;
    let catalog = ProductRepository::new(state.store.clone()).get_all()?;
    let cart = build_cart(&catalog, &payload.items, QuantityPolicy::DropNonPositive)?;
    Ok(Json(QuoteResponse::from(&cart)))
}
