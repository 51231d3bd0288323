//! Dashboard server -- renders the league tables from the aggregator's data.
//!
//! Usage: `cargo run --bin dashboard`
//!
//! Requires `LEAGUE_ID` (reads .env); talks to the aggregator at
//! `AGGREGATOR_URL` and never to the upstream API, so no session cookie.

use std::net::SocketAddr;

use legboard::config::AppConfig;
use legboard::dashboard::{self, DashboardState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legboard=debug,dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env();

    let addr: SocketAddr = format!("{}:{}", config.host, config.dashboard_port).parse()?;
    tracing::info!(
        host = %addr,
        aggregator = %config.aggregator_url,
        "Starting league dashboard"
    );

    let state = DashboardState::new(&config)?;
    let app = dashboard::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
