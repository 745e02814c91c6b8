//! Cart API Module
//!
//! Quotes are computed from the submitted lines and the current catalog;
//! the server keeps no cart state.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::QuoteRequest;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/quote", post(handler::quote))
}
