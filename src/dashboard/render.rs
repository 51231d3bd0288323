//! HTML rendering of the dashboard tables.

use std::borrow::Cow;

use serde::Serialize;
use tera::{Context, Tera};

use crate::dashboard::aggregate::{self, PlayerTotal};
use crate::dashboard::DashboardData;
use crate::errors::AppError;
use crate::models::game::GameResult;
use crate::models::player::Roster;

const BASE: &str = include_str!("../../templates/dashboard/base.html");
const INDEX: &str = include_str!("../../templates/dashboard/index.html");
const PENDING: &str = include_str!("../../templates/dashboard/pending.html");

/// One player's row in the per-round table.
#[derive(Debug, Serialize)]
struct RoundRow<'a> {
    player_name: &'a str,
    scores: Vec<u64>,
    total: u64,
}

#[derive(Debug, Serialize)]
struct TotalRow<'a> {
    name: Cow<'a, str>,
    value: u64,
}

#[derive(Debug, Serialize)]
struct TotalsTable<'a> {
    title: &'static str,
    class: &'static str,
    heading: &'static str,
    rows: Vec<TotalRow<'a>>,
}

/// Compiled dashboard templates. Player names are autoescaped.
#[derive(Debug, Clone)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("index.html", INDEX),
            ("pending.html", PENDING),
        ])?;
        Ok(Self { tera })
    }

    /// Page shown until both aggregator calls have succeeded.
    pub fn render_pending(&self) -> Result<String, AppError> {
        Ok(self.tera.render("pending.html", &Context::new())?)
    }

    /// Render the three dashboard tables.
    ///
    /// Fails if the score data has no legs or if any game in the first leg has
    /// fewer than `round_count` guesses; nothing is rendered in that case.
    pub fn render_page(&self, data: &DashboardData, round_count: usize) -> Result<String, AppError> {
        let first_leg = data
            .score_data
            .first()
            .ok_or_else(|| AppError::UpstreamSchema("league has no legs".to_string()))?;

        let mut context = Context::new();
        context.insert("round_numbers", &(1..=round_count).collect::<Vec<_>>());
        context.insert("round_rows", &round_rows(first_leg, round_count)?);
        context.insert(
            "totals",
            &[
                TotalsTable {
                    title: "Total Scores",
                    class: "total-score-table",
                    heading: "Total Score",
                    rows: total_rows(&aggregate::total_score(&data.score_data), &data.roster),
                },
                TotalsTable {
                    title: "Total time",
                    class: "total-time-table",
                    heading: "Total Time",
                    rows: total_rows(&aggregate::total_time(&data.score_data), &data.roster),
                },
            ],
        );

        Ok(self.tera.render("index.html", &context)?)
    }
}

fn round_rows(games: &[GameResult], round_count: usize) -> Result<Vec<RoundRow<'_>>, AppError> {
    games
        .iter()
        .map(|game| {
            let guesses = game.guesses();
            if guesses.len() < round_count {
                return Err(AppError::RoundOutOfRange {
                    user_id: game.user_id.clone(),
                    guesses: guesses.len(),
                    rounds: round_count,
                });
            }
            Ok(RoundRow {
                player_name: &game.player_name,
                scores: guesses[..round_count]
                    .iter()
                    .map(|guess| guess.round_score_in_points)
                    .collect(),
                total: game.total_score,
            })
        })
        .collect()
}

fn total_rows<'a>(totals: &[PlayerTotal], roster: &'a Roster) -> Vec<TotalRow<'a>> {
    totals
        .iter()
        .map(|total| TotalRow {
            name: display_name(roster, &total.user_id),
            value: total.value,
        })
        .collect()
}

/// Roster nick for `user_id`, or a placeholder naming the ID when the player
/// is not on the fetched roster page.
pub fn display_name<'a>(roster: &'a Roster, user_id: &str) -> Cow<'a, str> {
    match roster.get(user_id) {
        Some(player) => Cow::Borrowed(player.nick()),
        None => {
            tracing::warn!(user_id, "Player missing from roster");
            Cow::Owned(format!("Unknown ({user_id})"))
        }
    }
}
