use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rsibot::api::{AlpacaClient, YahooFinanceClient};
use rsibot::config::Config;
use rsibot::server;
use rsibot::state::AppState;

const HTTP_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    // Missing credentials are the one legitimately fatal failure; every
    // error past this point is returned to the caller instead.
    let config = Config::from_env().context("unable to load configuration")?;

    // One HTTP client shared by both collaborators.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .context("failed to build HTTP client")?;

    let market = YahooFinanceClient::new(http.clone(), config.yahoo_api_key.clone());
    let broker = AlpacaClient::new(
        http,
        config.alpaca_api_key.clone(),
        config.alpaca_api_secret.clone(),
    );

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .context("invalid bind address")?;

    if config.rsi_gate_enabled {
        tracing::info!("RSI entry gate is ENABLED");
    } else {
        tracing::warn!("RSI entry gate is disabled: every non-GET request places an order");
    }

    let state = AppState::new(config, market, broker);
    let app = server::router(state);

    tracing::info!("trade trigger listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rsibot=info")),
        )
        .init();
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received, stopping");
}
