//! Admin access
//!
//! The admin panel is gated by a shared key sent as `X-Admin-Key`. It is a
//! plain string comparison and does not make the panel safe to expose.

mod middleware;

pub use middleware::{ADMIN_KEY_HEADER, require_admin};
