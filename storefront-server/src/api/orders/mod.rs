//! Order API Module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/orders | POST | submit a quote request (checkout) |
//! | /api/orders?email= | GET | order history for a customer email |
//! | /api/orders/{id} | GET | single order |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{CheckoutRequest, CheckoutResponse};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_for_customer).post(handler::checkout))
        .route("/{id}", get(handler::get_by_id))
}
