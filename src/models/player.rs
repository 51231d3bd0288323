//! Roster entries from the upstream league scores endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /leagues/{leagueId}/scores/{page}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterPage {
    pub scores: Vec<PlayerProfile>,
}

/// Roster keyed by user ID.
pub type Roster = BTreeMap<String, PlayerProfile>;

/// A league member's standing plus their public profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub user: PlayerUser,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub total_score: u64,
    #[serde(default)]
    pub is_winner: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerUser {
    pub id: String,
    pub nick: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerProfile {
    pub fn nick(&self) -> &str {
        &self.user.nick
    }
}
