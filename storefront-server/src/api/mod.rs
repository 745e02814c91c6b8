//! HTTP API
//!
//! # Structure
//!
//! | Module | Prefix | Access |
//! |--------|--------|--------|
//! | [`health`] | `/health` | public |
//! | [`products`] | `/api/products` | public |
//! | [`cart`] | `/api/cart` | public |
//! | [`orders`] | `/api/orders` | public |
//! | [`shopping_lists`] | `/api/shopping-lists` | public |
//! | [`notifications`] | `/api/notifications` | public |
//! | [`admin`] | `/api/admin` | `X-Admin-Key` |

pub mod admin;
pub mod cart;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod quote;
pub mod shopping_lists;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}

/// Build the routes; `state` is only captured by the admin guard
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        // Storefront
        .merge(products::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(shopping_lists::router())
        .merge(notifications::router())
        // Admin panel
        .merge(admin::router(state))
}

/// Build the complete application bound to `state`
///
/// Used by the server and by tests driving the router with `oneshot`.
pub fn build_app(state: ServerState) -> Router {
    build_router(&state)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}
