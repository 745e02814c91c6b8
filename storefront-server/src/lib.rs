//! Super Empire storefront server
//!
//! # Overview
//!
//! Backend for the B2B produce ordering storefront:
//!
//! - **Catalog** (`catalog`): static seed data, name-driven enrichment, image resolution
//! - **Search** (`search`): exact-match filters, fuzzy text search, stable sorting
//! - **Cart** (`cart`): line items and subtotal/tax/total arithmetic
//! - **Persistence** (`db`): redb-backed container store and per-entity repositories
//! - **Notifications** (`notify`): explicitly owned notification service
//! - **Hosted backend** (`backend`): thin REST client, errors surfaced never retried
//! - **HTTP API** (`api`): storefront and admin panel endpoints
//!
//! # Module layout
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # config, state, server
//! ├── utils/         # logger, validation helpers
//! ├── catalog/       # seed data, enricher, image resolver
//! ├── search/        # filter engine, fuzzy index
//! ├── cart/          # cart lines, money
//! ├── db/            # store, repositories, backup, csv
//! ├── notify/        # notification service
//! ├── backend/       # hosted backend client
//! ├── auth/          # admin key guard
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod auth;
pub mod backend;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod db;
pub mod notify;
pub mod search;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState, setup_environment};
pub use db::LocalStore;
pub use notify::Notifier;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  ____                          _____                 _
 / ___| _   _ _ __   ___ _ __  | ____|_ __ ___  _ __ (_)_ __ ___
 \___ \| | | | '_ \ / _ \ '__| |  _| | '_ ` _ \| '_ \| | '__/ _ \
  ___) | |_| | |_) |  __/ |    | |___| | | | | | |_) | | | |  __/
 |____/ \__,_| .__/ \___|_|    |_____|_| |_| |_| .__/|_|_|  \___|
             |_|                               |_|
    "#
    );
}
