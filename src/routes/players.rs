//! Player routes: league roster keyed by user ID.

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::errors::AppError;
use crate::models::league::LeaguePath;
use crate::models::player::Roster;
use crate::services::players;
use crate::AppState;

/// GET /players/{league_id} -- roster entries keyed by user ID.
pub async fn roster(
    State(state): State<AppState>,
    Path(path): Path<LeaguePath>,
) -> Result<Json<Roster>, AppError> {
    path.validate()?;
    let roster =
        players::get_players(&state.upstream, &path.league_id, state.config.roster_limit).await?;
    Ok(Json(roster))
}
