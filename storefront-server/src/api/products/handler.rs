//! Product API Handlers

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Department, Product, ProductCategory, ProductTag, StockStatus};

use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use crate::search::{Facets, PriceRange, ProductFilter, SortBy, facets as facet_counts};
use crate::utils::{AppError, AppResult};

/// Query string accepted by the product list
///
/// `tags` and `stock` are comma-separated; every other value is a single label.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub department: Option<String>,
    pub tags: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub stock: Option<String>,
    pub sort: Option<String>,
}

impl ProductQuery {
    pub fn into_filter(self) -> AppResult<ProductFilter> {
        let min = parse_price(self.min_price.as_deref(), "minPrice")?;
        let max = parse_price(self.max_price.as_deref(), "maxPrice")?;

        Ok(ProductFilter {
            search_query: self.q.unwrap_or_default(),
            category: parse_label::<ProductCategory>(self.category.as_deref(), "category")?,
            subcategory: self.subcategory.filter(|s| !s.trim().is_empty()),
            department: parse_label::<Department>(self.department.as_deref(), "department")?,
            tags: parse_list::<ProductTag>(self.tags.as_deref(), "tags")?,
            price_range: (min.is_some() || max.is_some()).then(|| PriceRange::new(min, max)),
            stock_status: parse_list::<StockStatus>(self.stock.as_deref(), "stock")?,
            sort_by: match self.sort.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(raw) => Some(
                    raw.parse::<SortBy>()
                        .map_err(|e| AppError::validation(e).with_detail("field", "sort"))?,
                ),
            },
        })
    }
}

fn parse_label<T>(raw: Option<&str>, field: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e: T::Err| AppError::validation(e.to_string()).with_detail("field", field)),
    }
}

fn parse_list<T>(raw: Option<&str>, field: &str) -> AppResult<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|e: T::Err| AppError::validation(e.to_string()).with_detail("field", field))
        })
        .collect()
}

fn parse_price(raw: Option<&str>, field: &str) -> AppResult<Option<Decimal>> {
    parse_label::<Decimal>(raw, field)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub total: usize,
    pub products: Vec<Product>,
}

/// GET /api/products - filtered catalog
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductListResponse>> {
    let filter = query.into_filter()?;
    let catalog = ProductRepository::new(state.store.clone()).get_all()?;
    let products: Vec<Product> = filter.apply(&catalog).into_iter().cloned().collect();

    Ok(Json(ProductListResponse {
        total: products.len(),
        products,
    }))
}

/// GET /api/products/facets - counts over the filtered catalog
pub async fn facets(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Facets>> {
    let filter = query.into_filter()?;
    let catalog = ProductRepository::new(state.store.clone()).get_all()?;
    Ok(Json(facet_counts(filter.apply(&catalog))))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    ProductRepository::new(state.store.clone())
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| AppError::product_not_found(id))
}
