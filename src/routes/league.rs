//! League routes: every leg's game results, current leg last.

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::errors::AppError;
use crate::models::game::ScoreData;
use crate::models::league::LeaguePath;
use crate::services::league;
use crate::AppState;

/// GET /league/{league_id} -- results of every leg in the league.
pub async fn results(
    State(state): State<AppState>,
    Path(path): Path<LeaguePath>,
) -> Result<Json<ScoreData>, AppError> {
    path.validate()?;
    let data = league::get_league_results(
        &state.upstream,
        &path.league_id,
        state.config.leg_fetch_concurrency,
    )
    .await?;
    Ok(Json(data))
}
