use ledger_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv + logging)
    dotenv::dotenv().ok();
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        std::env::var("LOG_DIR").ok().as_deref(),
    );

    print_banner();
    tracing::info!("Ledger server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize state (connects to storage, retrying until reachable)
    let state = ServerState::initialize(&config).await;

    // 4. Serve until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
