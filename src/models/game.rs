//! Per-leg game results from the upstream highscores endpoint.
//!
//! Only the fields the dashboard reads are typed; everything else upstream
//! sends is kept in `extra` and serialized back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /results/highscores/{challengeId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LegStats {
    pub items: Vec<GameResult>,
}

/// Game results of one leg, in upstream rank order.
pub type LegResults = Vec<GameResult>;

/// Every leg of a league: finished legs first, current leg last.
pub type ScoreData = Vec<LegResults>;

/// One player's play-through of a leg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub user_id: String,
    pub player_name: String,
    pub total_score: u64,
    pub game: Game,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub player: GamePlayer,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GamePlayer {
    pub guesses: Vec<Guess>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One round's submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    pub round_score_in_points: u64,
    /// Seconds spent on the round.
    pub time: u64,
    pub lat: f64,
    pub lng: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameResult {
    pub fn guesses(&self) -> &[Guess] {
        &self.game.player.guesses
    }
}
