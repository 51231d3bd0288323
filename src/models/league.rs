//! League metadata as returned by the upstream league endpoint.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::errors::AppError;

/// `{league_id}` path segment shared by the league and players endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct LeaguePath {
    #[validate(length(min = 1, max = 128), custom(function = "opaque_id"))]
    pub league_id: String,
}

/// League IDs are opaque tokens of ASCII letters, digits, `-` and `_`.
fn opaque_id(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ValidationError::new("opaque_id"));
    }
    Ok(())
}

/// Top-level body of `GET /leagues/{leagueId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueResponse {
    pub league: League,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub finished_legs: Vec<LegRef>,
    pub current_leg: Option<LegRef>,
}

/// Pointer to a single leg's challenge.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegRef {
    pub challenge_id: String,
}

impl League {
    /// Challenge IDs in output order: finished legs as upstream lists them,
    /// then the current leg.
    pub fn challenge_ids(&self) -> Result<Vec<&str>, AppError> {
        let current = self
            .current_leg
            .as_ref()
            .ok_or_else(|| AppError::UpstreamSchema("league has no currentLeg".to_string()))?;

        Ok(self
            .finished_legs
            .iter()
            .chain(std::iter::once(current))
            .map(|leg| leg.challenge_id.as_str())
            .collect())
    }
}
