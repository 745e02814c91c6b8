//! Shopping list (standing order) API Module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/shopping-lists | GET, POST | list (optionally by `customerId`), create |
//! | /api/shopping-lists/{id} | GET, PUT, DELETE | single list |
//! | /api/shopping-lists/{id}/quote | POST | price the list against the current catalog |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/shopping-lists", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/quote", post(handler::quote))
}
