//! Shopping list API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use shared::error::ErrorCode;
use shared::models::{Product, ShoppingList, ShoppingListEntry, ShoppingListPatch};
use validator::Validate;

use crate::api::quote::{QuantityPolicy, QuoteLine, QuoteResponse, build_cart};
use crate::cart::MAX_QUANTITY;
use crate::core::ServerState;
use crate::db::repository::{ProductRepository, ShoppingListRepository};
use crate::utils::validation::{
    MAX_LINE_ITEMS, MAX_NAME_LEN, validate_payload, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShoppingList {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub customer_id: Option<String>,
    #[serde(default)]
    pub items: Vec<ShoppingListEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub customer_id: Option<String>,
}

fn not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::ShoppingListNotFound, format!("Shopping list {id} not found"))
        .with_detail("id", id)
}

/// Entries must name known products with quantities in `1..=MAX_QUANTITY`
fn check_entries(state: &ServerState, entries: &[ShoppingListEntry]) -> AppResult<()> {
    if entries.len() > MAX_LINE_ITEMS {
        return Err(AppError::validation(format!("At most {MAX_LINE_ITEMS} entries allowed"))
            .with_detail("field", "items"));
    }
    let catalog: Vec<Product> = ProductRepository::new(state.store.clone()).get_all()?;
    for entry in entries {
        if !catalog.iter().any(|p| p.id == entry.product_id) {
            return Err(AppError::product_not_found(&entry.product_id));
        }
        if entry.quantity == 0 {
            return Err(AppError::with_message(
                ErrorCode::CartInvalidQuantity,
                format!("Quantity for {} must be positive", entry.product_id),
            )
            .with_detail("productId", entry.product_id.clone()));
        }
        if entry.quantity > MAX_QUANTITY {
            return Err(AppError::with_message(
                ErrorCode::CartInvalidQuantity,
                format!("Quantity for {} cannot exceed {MAX_QUANTITY}", entry.product_id),
            )
            .with_detail("productId", entry.product_id.clone()));
        }
    }
    Ok(())
}

/// GET /api/shopping-lists
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ShoppingList>>> {
    let repo = ShoppingListRepository::new(state.store.clone());
    Ok(Json(repo.get_all(query.customer_id.as_deref())?))
}

/// GET /api/shopping-lists/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ShoppingList>> {
    ShoppingListRepository::new(state.store.clone())
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

/// POST /api/shopping-lists
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateShoppingList>,
) -> AppResult<(StatusCode, Json<ShoppingList>)> {
    validate_payload(&payload)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    check_entries(&state, &payload.items)?;

    let now = Utc::now();
    let list = ShoppingList {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name.trim().to_string(),
        customer_id: payload.customer_id,
        items: payload.items,
        created_at: now,
        updated_at: now,
        last_used_at: None,
    };
    let list = ShoppingListRepository::new(state.store.clone()).add(list)?;
    tracing::info!(list_id = %list.id, "Shopping list created");
    Ok((StatusCode::CREATED, Json(list)))
}

/// PUT /api/shopping-lists/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<ShoppingListPatch>,
) -> AppResult<Json<ShoppingList>> {
    if let Some(name) = &patch.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(items) = &patch.items {
        check_entries(&state, items)?;
    }

    let repo = ShoppingListRepository::new(state.store.clone());
    if !repo.update(&id, patch)? {
        return Err(not_found(&id));
    }
    repo.get_by_id(&id)?.map(Json).ok_or_else(|| not_found(&id))
}

/// DELETE /api/shopping-lists/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = ShoppingListRepository::new(state.store.clone()).delete(&id)?;
    if !deleted {
        return Err(not_found(&id));
    }
    Ok(Json(true))
}

/// POST /api/shopping-lists/{id}/quote - reorder at current prices
pub async fn quote(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<QuoteResponse>> {
    let repo = ShoppingListRepository::new(state.store.clone());
    let list = repo.get_by_id(&id)?.ok_or_else(|| not_found(&id))?;
    if list.items.is_empty() {
        return Err(AppError::new(ErrorCode::ShoppingListEmpty).with_detail("id", id));
    }

    let lines: Vec<QuoteLine> = list.items.iter().map(QuoteLine::from).collect();
    let catalog = ProductRepository::new(state.store.clone()).get_all()?;
    let cart = build_cart(&catalog, &lines, QuantityPolicy::Reject)?;

    repo.touch_used(&id)?;
    Ok(Json(QuoteResponse::from(&cart)))
}
