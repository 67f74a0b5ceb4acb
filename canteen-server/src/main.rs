use canteen_server::{Config, Server, ServerState, init_logger, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenvy::dotenv().ok();

    // 2. Logging before config, which may warn; keep the guard alive
    let _log_guard = init_logger()?;
    let config = Config::from_env();

    print_banner();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Canteen server starting..."
    );

    // 3. Database, seed, JWT
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
