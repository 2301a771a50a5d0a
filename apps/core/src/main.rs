// BFHL Service Entry Point
// Classification endpoint plus an IST greeting, behind per-client admission control.

mod assembler;
mod classifier;
mod clock;
mod config;
mod error;
mod identity;
mod models;
mod rate_limiter;
mod routes;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use assembler::ResponseAssembler;
use config::AppConfig;
use identity::IdentityInfo;
use rate_limiter::Admission;
use routes::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const DEFAULT_LOG_FILTER: &str = "info,bfhl_core=debug";

/// `LOG_FORMAT=json` switches to bunyan-style JSON lines.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stdout,
            ))
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().inspect_err(|e| error!("{}", e))?;

    let identity = IdentityInfo::from_config(&config.identity);
    info!("Serving identity {}", identity.user_id);

    let state = AppState::new(
        ResponseAssembler::new(identity),
        Admission::new(config.rate_limit),
    );
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", config.bind_addr, e))?;
    info!(
        "BFHL server listening on http://{} (rate limit: {})",
        config.bind_addr, config.rate_limit
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("BFHL server stopped");
    Ok(())
}
