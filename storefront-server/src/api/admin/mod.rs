//! Admin panel API Module
//!
//! Everything except `/login` sits behind [`require_admin`].
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/admin/login | POST | check an admin key |
//! | /api/admin/orders | GET | all orders, newest first |
//! | /api/admin/orders/{id}/status | PUT | change order status |
//! | /api/admin/customers | GET | all customers |
//! | /api/admin/customers/{id} | PUT | edit customer contact details |
//! | /api/admin/products/{id} | PATCH | price, stock, pack size, unit, image |
//! | /api/admin/products/prices | POST | bulk price update |
//! | /api/admin/price-history | GET | audit trail, optional `productId` |
//! | /api/admin/export/products.csv | GET | catalog CSV |
//! | /api/admin/export/backup | GET | JSON backup envelope |
//! | /api/admin/import | POST | restore a JSON backup |
//! | /api/admin/settings | GET, PUT | store settings |
//! | /api/admin/backend/sync | POST | push the catalog to the hosted backend |
//! | /api/admin/backend/profiles/{id} | GET | hosted backend profile lookup |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub use handler::{BulkPriceRequest, LoginRequest, StatusRequest};

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/admin", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let public_routes = Router::new().route("/login", post(handler::login));

    let manage_routes = Router::new()
        .route("/orders", get(handler::list_orders))
        .route("/orders/{id}/status", put(handler::update_order_status))
        .route("/customers", get(handler::list_customers))
        .route("/customers/{id}", put(handler::update_customer))
        .route("/products/prices", post(handler::update_prices))
        .route("/products/{id}", patch(handler::update_product))
        .route("/price-history", get(handler::price_history))
        .route("/export/products.csv", get(handler::export_csv))
        .route("/export/backup", get(handler::export_backup))
        .route("/import", post(handler::import_backup))
        .route("/settings", get(handler::get_settings).put(handler::update_setting))
        .route("/backend/sync", post(handler::sync_backend))
        .route("/backend/profiles/{id}", get(handler::backend_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    public_routes.merge(manage_routes)
}
