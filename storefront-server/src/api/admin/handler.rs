//! Admin panel API Handlers

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::ErrorCode;
use shared::models::{
    Customer, CustomerPatch, Order, OrderStatus, PriceUpdate, Product, ProductPatch, SettingUpdate,
    StoreSettings,
};

use crate::backend::{BackendClient, Profile, RemoteResult};
use crate::core::ServerState;
use crate::db::repository::{
    CustomerRepository, OrderRepository, PriceHistoryRepository, ProductRepository,
    SettingsRepository,
};
use crate::db::{backup, csv};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult};

// =============================================================================
// Login
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub key: String,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<ApiResponse<()>> {
    if !state.is_admin_key(&payload.key) {
        tracing::warn!("Admin login rejected");
        return Err(AppError::invalid_credentials());
    }
    Ok(ApiResponse::ok())
}

// =============================================================================
// Orders & customers
// =============================================================================

/// GET /api/admin/orders
pub async fn list_orders(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(OrderRepository::new(state.store.clone()).get_all()?))
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// PUT /api/admin/orders/{id}/status
pub async fn update_order_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusRequest>,
) -> AppResult<Json<Order>> {
    let status: OrderStatus = payload.status.parse().map_err(|e: shared::models::UnknownLabel| {
        AppError::with_message(ErrorCode::OrderInvalidStatus, e.to_string())
    })?;

    let repo = OrderRepository::new(state.store.clone());
    let order_not_found =
        || AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"));
    if !repo.update_status(&id, status)? {
        return Err(order_not_found());
    }

    let order = repo.get_by_id(&id)?.ok_or_else(order_not_found)?;
    state
        .notifier
        .info(format!("Order {} is now {}", order.order_number, status));
    Ok(Json(order))
}

/// GET /api/admin/customers
pub async fn list_customers(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(CustomerRepository::new(state.store.clone()).get_all()?))
}

/// PUT /api/admin/customers/{id}
pub async fn update_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<CustomerPatch>,
) -> AppResult<Json<Customer>> {
    if let Some(name) = &patch.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(phone) = &patch.phone {
        validate_required_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&patch.company_name, "companyName", MAX_NAME_LEN)?;
    validate_optional_text(&patch.delivery_address, "deliveryAddress", MAX_ADDRESS_LEN)?;

    let repo = CustomerRepository::new(state.store.clone());
    let customer_not_found = || {
        AppError::with_message(ErrorCode::CustomerNotFound, format!("Customer {id} not found"))
    };
    if !repo.update(&id, patch)? {
        return Err(customer_not_found());
    }
    repo.get_by_id(&id)?.map(Json).ok_or_else(customer_not_found)
}

// =============================================================================
// Products & prices
// =============================================================================

/// PATCH /api/admin/products/{id}
pub async fn update_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> AppResult<Json<Product>> {
    if patch.is_empty() {
        return Err(AppError::validation("Nothing to update"));
    }
    if let Some(pack_size) = &patch.pack_size {
        validate_required_text(pack_size, "packSize", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(unit) = &patch.unit {
        validate_required_text(unit, "unit", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&patch.image, "image", MAX_URL_LEN)?;

    let products = ProductRepository::new(state.store.clone());
    let Some(appended) = products.update(&id, &patch)? else {
        return Err(AppError::product_not_found(id));
    };
    mirror_price_updates(&state, &appended).await;

    let product = products
        .get_by_id(&id)?
        .ok_or_else(|| AppError::product_not_found(&id))?;
    state.notifier.success(format!("{} updated", product.name));
    Ok(Json(product))
}

#[derive(Debug, Deserialize)]
pub struct BulkPriceRequest {
    /// Product id → new price
    pub prices: BTreeMap<String, Decimal>,
}

#[derive(Debug, Serialize)]
pub struct BulkPriceResponse {
    pub requested: usize,
    pub changed: usize,
}

/// POST /api/admin/products/prices
pub async fn update_prices(
    State(state): State<ServerState>,
    Json(payload): Json<BulkPriceRequest>,
) -> AppResult<Json<BulkPriceResponse>> {
    let appended = ProductRepository::new(state.store.clone()).update_multiple_prices(&payload.prices)?;
    let changed = appended.len();

    if changed > 0 {
        mirror_price_updates(&state, &appended).await;
        state.notifier.success(format!("Updated {changed} prices"));
    }

    Ok(Json(BulkPriceResponse {
        requested: payload.prices.len(),
        changed,
    }))
}

/// Push fresh audit records to the hosted backend; failures only notify
async fn mirror_price_updates(state: &ServerState, updates: &[PriceUpdate]) {
    let Some(backend) = &state.backend else {
        return;
    };
    if updates.is_empty() {
        return;
    }
    if let Err(e) = backend.insert_price_updates(updates).await {
        tracing::error!(error = %e, count = updates.len(), "Price history mirror failed");
        state.notifier.error("Price changes saved locally but not synced");
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub product_id: Option<String>,
}

/// GET /api/admin/price-history
pub async fn price_history(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<PriceUpdate>>> {
    let repo = PriceHistoryRepository::new(state.store.clone());
    let records = match query.product_id.as_deref() {
        Some(product_id) => repo.get_for_product(product_id)?,
        None => repo.get_all()?,
    };
    Ok(Json(records))
}

// =============================================================================
// Export / import
// =============================================================================

/// GET /api/admin/export/products.csv
pub async fn export_csv(State(state): State<ServerState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepository::new(state.store.clone()).get_all()?;
    let body = csv::products_csv(&products);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"products.csv\""),
        ],
        body,
    ))
}

/// GET /api/admin/export/backup
pub async fn export_backup(State(state): State<ServerState>) -> AppResult<impl IntoResponse> {
    let body = backup::export_json(&state.store)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"superempire-backup.json\""),
        ],
        body,
    ))
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: bool,
}

/// POST /api/admin/import - raw JSON body; malformed input reports `false`
pub async fn import_backup(State(state): State<ServerState>, body: String) -> Json<ImportResponse> {
    let imported = backup::import_json(&state.store, &body);
    if imported {
        state.notifier.success("Backup imported");
    } else {
        state.notifier.error("Backup import failed");
    }
    Json(ImportResponse { imported })
}

// =============================================================================
// Settings & hosted backend
// =============================================================================

/// GET /api/admin/settings
pub async fn get_settings(State(state): State<ServerState>) -> AppResult<Json<StoreSettings>> {
    Ok(Json(SettingsRepository::new(state.store.clone()).get()?))
}

/// PUT /api/admin/settings - one `{"key", "value"}` change
pub async fn update_setting(
    State(state): State<ServerState>,
    Json(update): Json<SettingUpdate>,
) -> AppResult<Json<StoreSettings>> {
    match &update {
        SettingUpdate::BusinessName(v) => validate_required_text(v, "businessName", MAX_NAME_LEN)?,
        SettingUpdate::ContactEmail(v) => validate_required_text(v, "contactEmail", MAX_EMAIL_LEN)?,
        SettingUpdate::ContactPhone(v) => validate_required_text(v, "contactPhone", MAX_SHORT_TEXT_LEN)?,
        SettingUpdate::DeliveryNote(v) => validate_optional_text(v, "deliveryNote", MAX_NOTE_LEN)?,
        SettingUpdate::MinimumOrder(Some(v)) if *v < Decimal::ZERO => {
            return Err(AppError::validation("minimumOrder cannot be negative")
                .with_detail("field", "minimumOrder"));
        }
        SettingUpdate::MinimumOrder(_) | SettingUpdate::QuoteFollowUpHours(_) => {}
    }

    let settings = SettingsRepository::new(state.store.clone()).apply(update)?;
    tracing::info!("Store settings updated");
    Ok(Json(settings))
}

fn configured_backend(state: &ServerState) -> AppResult<&BackendClient> {
    state
        .backend
        .as_ref()
        .ok_or_else(|| AppError::config("Hosted backend is not configured"))
}

/// POST /api/admin/backend/sync - `{data, error}` outcome
pub async fn sync_backend(State(state): State<ServerState>) -> AppResult<Json<RemoteResult<usize>>> {
    let backend = configured_backend(&state)?;

    let products = ProductRepository::new(state.store.clone()).get_all()?;
    let result = backend.upsert_products(&products).await;
    match &result {
        Ok(count) => state.notifier.success(format!("Synced {count} products")),
        Err(e) => {
            tracing::error!(error = %e, "Catalog sync failed");
            state.notifier.error("Catalog sync failed");
        }
    }
    Ok(Json(RemoteResult::from(result)))
}

/// GET /api/admin/backend/profiles/{id}
pub async fn backend_profile(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<RemoteResult<Option<Profile>>>> {
    let backend = configured_backend(&state)?;
    let result = backend.fetch_profile(&id).await;
    if let Err(e) = &result {
        tracing::warn!(user_id = %id, error = %e, "Profile lookup failed");
    }
    Ok(Json(RemoteResult::from(result)))
}
