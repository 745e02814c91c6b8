//! Core module - configuration, state and server lifecycle
//!
//! # Contents
//!
//! - [`Config`] - server configuration
//! - [`BackendConfig`] - hosted backend credentials
//! - [`ServerState`] - shared application state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup and serve errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{BackendConfig, Config};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;

use std::path::Path;

/// Prepare the process environment
///
/// Loads `.env` if present, creates the work directory and its `logs/`
/// subdirectory, and installs the tracing subscriber. Called once by each
/// binary before anything else.
pub fn setup_environment() -> Result<()> {
    // Missing .env is fine, the process environment still applies
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    let log_dir = Path::new(&config.work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    crate::utils::logger::init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        log_dir.to_str(),
    );

    Ok(())
}
