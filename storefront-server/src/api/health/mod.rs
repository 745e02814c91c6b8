//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::ProductRepository;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    environment: String,
    products: usize,
    backend_configured: bool,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let products = ProductRepository::new(state.store.clone()).get_all();
    let (status, count) = match products {
        Ok(products) => ("ok", products.len()),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not read products");
            ("degraded", 0)
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        products: count,
        backend_configured: state.backend.is_some(),
    })
}
