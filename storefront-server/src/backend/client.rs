//! REST client for the hosted backend tables

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::models::{Order, PriceUpdate, Product};

use super::error::{BackendError, BackendResult};
use crate::core::BackendConfig;
use crate::utils::{AppError, AppResult};

/// `Prefer` header for inserts that need no response body
const RETURN_MINIMAL: &str = "return=minimal";
/// `Prefer` header for upserts keyed by primary key
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=minimal";

/// Row in the remote `products` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub department: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub unit: String,
    pub pack_size: String,
    pub stock_quantity: Option<u32>,
    pub stock_status: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.as_str().to_string(),
            subcategory: p.subcategory.clone(),
            department: p.department.map(|d| d.as_str().to_string()),
            price: p.price,
            unit: p.unit.clone(),
            pack_size: p.pack_size.clone(),
            stock_quantity: p.stock_quantity,
            stock_status: p.stock_status.map(|s| s.as_str().to_string()),
            image_url: p.image.clone(),
        }
    }
}

/// Row in the remote `orders` table
#[derive(Debug, Clone, Serialize)]
struct OrderRow<'a> {
    id: &'a str,
    order_number: &'a str,
    customer_name: &'a str,
    customer_email: &'a str,
    customer_phone: &'a str,
    company_name: Option<&'a str>,
    delivery_address: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
    status: &'static str,
    notes: Option<&'a str>,
    created_at: DateTime<Utc>,
}

/// Row in the remote `order_items` table
#[derive(Debug, Clone, Serialize)]
struct OrderItemRow<'a> {
    order_id: &'a str,
    product_id: &'a str,
    product_name: &'a str,
    quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    line_total: Decimal,
}

/// Row in the remote `price_history` table
#[derive(Debug, Clone, Serialize)]
struct PriceHistoryRow<'a> {
    product_id: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    old_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    new_price: Decimal,
    changed_at: DateTime<Utc>,
    changed_by: &'a str,
}

/// Row in the remote `profiles` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub company_name: Option<String>,
    pub phone: Option<String>,
}

/// HTTP client for the hosted backend's REST interface
///
/// One request per call. Failures are returned to the caller as-is; nothing
/// is retried.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.key)
            .map_err(|_| AppError::config("BACKEND_KEY is not a valid header value"))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|_| AppError::config("BACKEND_KEY is not a valid header value"))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build backend client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn insert<B: Serialize + ?Sized>(&self, table: &str, rows: &B, prefer: &str) -> BackendResult<()> {
        let response = self
            .client
            .post(self.table_url(table))
            .header("Prefer", prefer)
            .json(rows)
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> BackendResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        Err(match status {
            StatusCode::UNAUTHORIZED => BackendError::Unauthorized,
            StatusCode::FORBIDDEN => BackendError::Forbidden(text),
            StatusCode::NOT_FOUND => BackendError::NotFound(text),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                BackendError::Rejected(text)
            }
            _ => BackendError::Service {
                status: status.as_u16(),
                body: text,
            },
        })
    }

    async fn select<T: DeserializeOwned>(&self, table: &str, query: &[(&str, String)]) -> BackendResult<Vec<T>> {
        let response = self
            .client
            .get(self.table_url(table))
            .query(query)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // ========== Tables ==========

    /// Upsert the catalog into `products`, keyed by product id
    pub async fn upsert_products(&self, products: &[Product]) -> BackendResult<usize> {
        let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
        self.insert("products", &rows, MERGE_DUPLICATES).await?;
        tracing::info!(count = rows.len(), "Upserted products to backend");
        Ok(rows.len())
    }

    /// Insert an order header into `orders` and its lines into `order_items`
    pub async fn insert_order(&self, order: &Order) -> BackendResult<()> {
        let header = OrderRow {
            id: &order.id,
            order_number: &order.order_number,
            customer_name: &order.customer_name,
            customer_email: &order.customer_email,
            customer_phone: &order.customer_phone,
            company_name: order.company_name.as_deref(),
            delivery_address: &order.delivery_address,
            subtotal: order.subtotal,
            tax: order.tax,
            total: order.total,
            status: order.status.as_str(),
            notes: order.notes.as_deref(),
            created_at: order.created_at,
        };
        self.insert("orders", &header, RETURN_MINIMAL).await?;

        let items: Vec<OrderItemRow<'_>> = order
            .items
            .iter()
            .map(|item| OrderItemRow {
                order_id: &order.id,
                product_id: &item.product_id,
                product_name: &item.product_name,
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: item.line_total,
            })
            .collect();
        if !items.is_empty() {
            self.insert("order_items", &items, RETURN_MINIMAL).await?;
        }

        tracing::info!(order_id = %order.id, items = items.len(), "Mirrored order to backend");
        Ok(())
    }

    pub async fn insert_price_updates(&self, updates: &[PriceUpdate]) -> BackendResult<usize> {
        if updates.is_empty() {
            return Ok(0);
        }
        let rows: Vec<PriceHistoryRow<'_>> = updates
            .iter()
            .map(|u| PriceHistoryRow {
                product_id: &u.product_id,
                old_price: u.old_price,
                new_price: u.new_price,
                changed_at: u.changed_at,
                changed_by: &u.changed_by,
            })
            .collect();
        self.insert("price_history", &rows, RETURN_MINIMAL).await?;
        Ok(rows.len())
    }

    /// Profile by user id, `None` when the service has no such row
    pub async fn fetch_profile(&self, user_id: &str) -> BackendResult<Option<Profile>> {
        let query = [
            ("id", format!("eq.{user_id}")),
            ("select", "*".to_string()),
        ];
        let rows: Vec<Profile> = self.select("profiles", &query).await?;
        Ok(rows.into_iter().next())
    }
}
