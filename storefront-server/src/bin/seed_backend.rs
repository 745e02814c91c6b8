//! Push the built-in catalog to the hosted backend's `products` table
//!
//! Requires `BACKEND_URL` and `BACKEND_KEY`; exits with an error when either
//! is missing.

use anyhow::Context;
use storefront_server::backend::BackendClient;
use storefront_server::catalog::build_catalog;
use storefront_server::core::BackendConfig;
use storefront_server::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    init_logger();

    let config = BackendConfig::from_env().context("backend credentials are required")?;
    let client = BackendClient::new(&config)?;

    let catalog = build_catalog();
    tracing::info!(url = %client.base_url(), products = catalog.len(), "Seeding hosted backend");

    let count = client
        .upsert_products(&catalog)
        .await
        .context("failed to upsert products")?;

    tracing::info!(count, "Backend catalog seeded");
    Ok(())
}
