//! League roster keyed by user ID.

use crate::errors::AppError;
use crate::models::player::Roster;
use crate::services::upstream::LeaderboardApi;

/// Fetch the first roster page and index it by user ID.
///
/// Upstream caps the page at `roster_limit` entries; lower-ranked players are
/// simply absent. A repeated user ID keeps the last entry.
pub async fn get_players<A: LeaderboardApi>(
    api: &A,
    league_id: &str,
    roster_limit: u32,
) -> Result<Roster, AppError> {
    let scores = api.fetch_roster(league_id).await?;

    if scores.len() >= roster_limit as usize {
        tracing::debug!(
            league_id,
            roster_limit,
            "Roster page is full, players past the cap are not listed"
        );
    }

    Ok(scores
        .into_iter()
        .map(|player| (player.user.id.clone(), player))
        .collect())
}
