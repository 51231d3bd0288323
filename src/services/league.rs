//! League results: walk a league's legs and collect every leg's game results.

use futures::{StreamExt, TryStreamExt};

use crate::errors::AppError;
use crate::models::game::ScoreData;
use crate::services::upstream::LeaderboardApi;

/// Fetch results for every leg of a league.
///
/// Finished legs come first in the order upstream lists them; the current
/// leg is always last. Up to `concurrency` leg fetches are in flight at once
/// (1 fetches strictly one after another); output order never depends on
/// completion order. The first failed fetch fails the whole call.
pub async fn get_league_results<A: LeaderboardApi>(
    api: &A,
    league_id: &str,
    concurrency: usize,
) -> Result<ScoreData, AppError> {
    let league = api.fetch_league(league_id).await?;
    let challenge_ids = league.challenge_ids()?;

    tracing::info!(
        league_id,
        legs = challenge_ids.len(),
        concurrency,
        "Fetching leg results"
    );

    // Futures are lazy; `buffered` decides how many run at once.
    let fetches: Vec<_> = challenge_ids
        .into_iter()
        .map(|challenge_id| api.fetch_leg_results(challenge_id))
        .collect();

    futures::stream::iter(fetches)
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}
