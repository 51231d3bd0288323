//! In-memory leaderboard used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Map;

use crate::errors::AppError;
use crate::models::game::{Game, GamePlayer, GameResult, Guess, LegResults};
use crate::models::league::{League, LegRef};
use crate::models::player::{PlayerProfile, PlayerUser};
use crate::services::upstream::LeaderboardApi;

/// Build a game result whose guesses take the given times. Round scores
/// split the total evenly.
pub fn game(user_id: &str, total_score: u64, times: &[u64]) -> GameResult {
    let per_round = total_score / times.len().max(1) as u64;
    GameResult {
        user_id: user_id.to_string(),
        player_name: format!("name-{user_id}"),
        total_score,
        game: Game {
            player: GamePlayer {
                guesses: times
                    .iter()
                    .map(|&time| Guess {
                        round_score_in_points: per_round,
                        time,
                        lat: 0.0,
                        lng: 0.0,
                        extra: Map::new(),
                    })
                    .collect(),
                extra: Map::new(),
            },
            extra: Map::new(),
        },
        extra: Map::new(),
    }
}

pub fn player(user_id: &str, nick: &str) -> PlayerProfile {
    PlayerProfile {
        user: PlayerUser {
            id: user_id.to_string(),
            nick: nick.to_string(),
            extra: Map::new(),
        },
        total_points: 0,
        total_score: 0,
        is_winner: false,
        extra: Map::new(),
    }
}

#[derive(Default)]
pub struct FakeLeaderboard {
    leagues: HashMap<String, League>,
    legs: HashMap<String, LegResults>,
    rosters: HashMap<String, Vec<PlayerProfile>>,
    delays_ms: HashMap<String, u64>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeLeaderboard {
    pub fn with_league(league_id: &str, finished: &[&str], current: Option<&str>) -> Self {
        let league = League {
            finished_legs: finished
                .iter()
                .map(|id| LegRef {
                    challenge_id: id.to_string(),
                })
                .collect(),
            current_leg: current.map(|id| LegRef {
                challenge_id: id.to_string(),
            }),
        };
        let mut fake = Self::default();
        fake.leagues.insert(league_id.to_string(), league);
        fake
    }

    pub fn with_leg(mut self, challenge_id: &str, results: LegResults) -> Self {
        self.legs.insert(challenge_id.to_string(), results);
        self
    }

    pub fn with_roster(mut self, league_id: &str, players: Vec<PlayerProfile>) -> Self {
        self.rosters.insert(league_id.to_string(), players);
        self
    }

    pub fn with_delay(mut self, challenge_id: &str, millis: u64) -> Self {
        self.delays_ms.insert(challenge_id.to_string(), millis);
        self
    }

    pub fn failing_leg(mut self, challenge_id: &str) -> Self {
        self.failing.insert(challenge_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn not_found(path: &str) -> AppError {
    AppError::UpstreamStatus {
        status: 404,
        url: path.to_string(),
    }
}

impl LeaderboardApi for FakeLeaderboard {
    async fn fetch_league(&self, league_id: &str) -> Result<League, AppError> {
        self.record(format!("league:{league_id}"));
        self.leagues
            .get(league_id)
            .cloned()
            .ok_or_else(|| not_found(league_id))
    }

    async fn fetch_leg_results(&self, challenge_id: &str) -> Result<LegResults, AppError> {
        self.record(format!("leg:{challenge_id}"));
        if let Some(&millis) = self.delays_ms.get(challenge_id) {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
        if self.failing.contains(challenge_id) {
            return Err(AppError::UpstreamStatus {
                status: 500,
                url: challenge_id.to_string(),
            });
        }
        self.legs
            .get(challenge_id)
            .cloned()
            .ok_or_else(|| not_found(challenge_id))
    }

    async fn fetch_roster(&self, league_id: &str) -> Result<Vec<PlayerProfile>, AppError> {
        self.record(format!("roster:{league_id}"));
        self.rosters
            .get(league_id)
            .cloned()
            .ok_or_else(|| not_found(league_id))
    }
}
