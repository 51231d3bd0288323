//! Dashboard client: loads league data from the aggregator and serves it as
//! HTML tables.
//!
//! Each page load fetches `/league/{id}` and `/players/{id}` concurrently,
//! derives per-player totals and renders:
//! - the per-round breakdown of the first leg
//! - total score per player
//! - total time per player
//!
//! If either fetch fails, or the data cannot be rendered, the page stays in
//! its empty "not yet available" state and the cause is only logged.

pub mod aggregate;
pub mod render;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use reqwest::Url;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::game::ScoreData;
use crate::models::player::Roster;
use crate::services::upstream::{endpoint, fetch_json, parse_base_url};

use self::render::Templates;

/// Everything one page load fetches from the aggregator.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub score_data: ScoreData,
    pub roster: Roster,
}

/// HTTP client for the aggregator's two read endpoints.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DashboardClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: parse_base_url(&config.aggregator_url)?,
        })
    }

    pub async fn league_results(&self, league_id: &str) -> Result<ScoreData, AppError> {
        fetch_json(&self.http, endpoint(&self.base_url, &["league", league_id])?).await
    }

    pub async fn players(&self, league_id: &str) -> Result<Roster, AppError> {
        fetch_json(&self.http, endpoint(&self.base_url, &["players", league_id])?).await
    }

    /// Fetch league results and roster concurrently; both must succeed.
    pub async fn load(&self, league_id: &str) -> Result<DashboardData, AppError> {
        let (score_data, roster) =
            tokio::try_join!(self.league_results(league_id), self.players(league_id))?;

        tracing::debug!(
            league_id,
            legs = score_data.len(),
            players = roster.len(),
            "Dashboard data loaded"
        );

        Ok(DashboardData { score_data, roster })
    }
}

/// Shared state for the dashboard server.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub client: DashboardClient,
    pub templates: Arc<Templates>,
    pub league_id: String,
    pub round_count: usize,
}

impl DashboardState {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let league_id = config
            .league_id
            .clone()
            .ok_or_else(|| AppError::Validation("LEAGUE_ID must be set".to_string()))?;
        Ok(Self {
            client: DashboardClient::new(config)?,
            templates: Arc::new(Templates::new()?),
            league_id,
            round_count: config.round_count,
        })
    }
}

/// Build the dashboard router.
pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / -- the three dashboard tables for the configured league.
async fn page(State(state): State<DashboardState>) -> Result<Response, AppError> {
    let rendered = state
        .client
        .load(&state.league_id)
        .await
        .and_then(|data| state.templates.render_page(&data, state.round_count));

    match rendered {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!(error = %e, league_id = %state.league_id, "Dashboard not available");
            let pending = state.templates.render_pending()?;
            Ok((StatusCode::SERVICE_UNAVAILABLE, Html(pending)).into_response())
        }
    }
}
