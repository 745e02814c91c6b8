//! Product API Module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/products | GET | filtered, searched and sorted catalog |
//! | /api/products/facets | GET | facet counts over the same filter |
//! | /api/products/{id} | GET | single product |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{ProductListResponse, ProductQuery};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/facets", get(handler::facets))
        .route("/{id}", get(handler::get_by_id))
}
