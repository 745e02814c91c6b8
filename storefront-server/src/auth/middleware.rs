//! Admin key middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::utils::AppError;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Reject requests whose `X-Admin-Key` does not match the configured key
///
/// | Case | Result |
/// |------|--------|
/// | `OPTIONS` preflight | passed through |
/// | header missing | 403 AdminRequired |
/// | header mismatch | 401 InvalidCredentials |
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let key = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    let verdict = match key {
        None => Err(AppError::admin_required()),
        Some(key) if !state.is_admin_key(key) => Err(AppError::invalid_credentials()),
        Some(_) => Ok(()),
    };

    if let Err(e) = verdict {
        tracing::warn!(uri = %req.uri(), code = %e.code, "Admin request rejected");
        return Err(e);
    }
    Ok(next.run(req).await)
}
