//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::error::ErrorCode;
use shared::models::{Order, OrderStatus};
use validator::Validate;

use crate::api::quote::{QuantityPolicy, QuoteLine, build_cart};
use crate::backend::RemoteResult;
use crate::core::ServerState;
use crate::db::repository::customer::CustomerContact;
use crate::db::repository::{
    CustomerRepository, OrderRepository, ProductRepository, SettingsRepository, ShoppingListRepository,
};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_payload, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Checkout form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,
    #[validate(email, length(max = 254))]
    pub customer_email: String,
    #[validate(length(min = 1, max = 100))]
    pub customer_phone: String,
    #[validate(length(max = 200))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub delivery_address: String,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
    #[validate(length(max = 500), nested)]
    pub items: Vec<QuoteLine>,
    /// Standing order this checkout was started from
    pub shopping_list_id: Option<String>,
}

impl CheckoutRequest {
    fn check(&self) -> AppResult<()> {
        validate_payload(self)?;
        validate_required_text(&self.customer_name, "customerName", MAX_NAME_LEN)?;
        validate_required_text(&self.customer_phone, "customerPhone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&self.delivery_address, "deliveryAddress", MAX_ADDRESS_LEN)?;
        if self.items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order: Order,
    /// Outcome of mirroring to the hosted backend, absent when not configured
    pub remote: Option<RemoteResult<()>>,
}

/// Customer-facing order number from the submission time
fn order_number(at: chrono::DateTime<Utc>) -> String {
    format!("SE-{}", at.format("%Y%m%d-%H%M%S%3f"))
}

/// POST /api/orders - checkout
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    if let Err(e) = payload.check() {
        state.notifier.warning(e.message.clone());
        return Err(e);
    }

    let catalog = ProductRepository::new(state.store.clone()).get_all()?;
    let cart = build_cart(&catalog, &payload.items, QuantityPolicy::Reject)?;
    let totals = cart.totals().rounded();

    let settings = SettingsRepository::new(state.store.clone()).get()?;
    if let Some(minimum) = settings.minimum_order
        && totals.subtotal < minimum
    {
        return Err(AppError::with_message(
            ErrorCode::OrderBelowMinimum,
            format!("Minimum order is {minimum}"),
        )
        .with_detail("minimumOrder", minimum.to_string()));
    }

    let customer = CustomerRepository::new(state.store.clone()).upsert_by_email(CustomerContact {
        name: payload.customer_name.trim().to_string(),
        email: payload.customer_email.trim().to_string(),
        phone: payload.customer_phone.trim().to_string(),
        company_name: payload.company_name.clone(),
        delivery_address: Some(payload.delivery_address.trim().to_string()),
    })?;

    let now = Utc::now();
    let order = Order {
        id: uuid::Uuid::new_v4().to_string(),
        order_number: order_number(now),
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        customer_email: customer.email.clone(),
        customer_phone: customer.phone.clone(),
        company_name: customer.company_name.clone(),
        delivery_address: payload.delivery_address.trim().to_string(),
        items: cart.to_order_items(),
        subtotal: totals.subtotal,
        tax: totals.tax,
        total: totals.total,
        status: OrderStatus::Pending,
        notes: payload.notes.clone().filter(|n| !n.trim().is_empty()),
        created_at: now,
        updated_at: now,
    };
    let order = OrderRepository::new(state.store.clone()).add(order)?;

    if let Some(list_id) = &payload.shopping_list_id {
        ShoppingListRepository::new(state.store.clone()).touch_used(list_id)?;
    }

    state
        .notifier
        .success(format!("Order {} submitted", order.order_number));

    let remote = match &state.backend {
        Some(backend) => {
            let result = backend.insert_order(&order).await;
            if let Err(e) = &result {
                tracing::error!(order_id = %order.id, error = %e, "Order mirror failed");
                state
                    .notifier
                    .error(format!("Order {} saved locally but not synced", order.order_number));
            }
            Some(RemoteResult::from(result))
        }
        None => None,
    };

    Ok((StatusCode::CREATED, Json(CheckoutResponse { order, remote })))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    OrderRepository::new(state.store.clone())
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
        })
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub email: String,
}

/// GET /api/orders?email= - newest first, empty for unknown emails
pub async fn list_for_customer(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let Some(customer) = CustomerRepository::new(state.store.clone()).find_by_email(&query.email)? else {
        return Ok(Json(Vec::new()));
    };
    Ok(Json(OrderRepository::new(state.store.clone()).get_by_customer(&customer.id)?))
}
