use anyhow::Context;
use clap::Parser;
use portfolio_api::adapters::http;
use portfolio_api::utils::{logger, validation::Validate};
use portfolio_api::{resolve_store, AppState, Catalog, CliConfig, Settings};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl_c: {}", e);
        return;
    }
    tracing::info!("ctrl_c received; shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting portfolio-api");

    let settings = Settings::load(&cli).context("failed to load settings")?;
    if cli.verbose {
        tracing::debug!("Settings: {:?}", settings);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = resolve_store(&settings);
    let state = AppState::new(Catalog::portfolio(), store, &settings);
    let app = http::router(state);

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Listening on http://{}", addr);

    http::serve(listener, app, shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
