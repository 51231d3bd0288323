//! Per-player totals derived from a league's score data.

use std::collections::HashMap;

use crate::models::game::LegResults;

/// One player's cumulative value across every leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTotal {
    pub user_id: String,
    pub value: u64,
}

/// Sum of every game's total score, per user.
///
/// Rows are in order of each user's first appearance.
pub fn total_score(score_data: &[LegResults]) -> Vec<PlayerTotal> {
    accumulate(
        score_data
            .iter()
            .flatten()
            .map(|game| (game.user_id.as_str(), game.total_score)),
    )
}

/// Sum of every guess's time in seconds, per user.
///
/// A user who never submitted a guess has no row.
pub fn total_time(score_data: &[LegResults]) -> Vec<PlayerTotal> {
    accumulate(score_data.iter().flatten().flat_map(|game| {
        game.guesses()
            .iter()
            .map(move |guess| (game.user_id.as_str(), guess.time))
    }))
}

fn accumulate<'a>(entries: impl Iterator<Item = (&'a str, u64)>) -> Vec<PlayerTotal> {
    let mut rows: Vec<PlayerTotal> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for (user_id, amount) in entries {
        match index.get(user_id) {
            Some(&row) => rows[row].value += amount,
            None => {
                index.insert(user_id, rows.len());
                rows.push(PlayerTotal {
                    user_id: user_id.to_string(),
                    value: amount,
                });
            }
        }
    }

    rows
}
