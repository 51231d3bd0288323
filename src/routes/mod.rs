//! Route definitions for the aggregator API.

pub mod health;
pub mod league;
pub mod players;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the aggregator router with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/league/{league_id}", get(league::results))
        .route("/players/{league_id}", get(players::roster))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
