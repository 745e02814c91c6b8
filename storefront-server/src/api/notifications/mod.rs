//! Recent notifications for polling clients

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::notify::Notification;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/notifications", get(list))
}

/// GET /api/notifications - oldest first
async fn list(State(state): State<ServerState>) -> Json<Vec<Notification>> {
    Json(state.notifier.recent())
}
