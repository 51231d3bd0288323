//! Typed views of the upstream leaderboard payloads.

pub mod game;
pub mod league;
pub mod player;
