use storefront_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, work dir, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("Super Empire storefront server starting...");

    // 2. Configuration
    let config = Config::from_env();

    // 3. State: store, seeded catalog, notifier, backend client
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until Ctrl-C
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
