use std::env;

/// Upstream API root used when `UPSTREAM_BASE_URL` is unset.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://www.geoguessr.com/api/v3";

/// Number of rounds in every game of a leg. The per-round table has one
/// column per round and rejects game results with fewer guesses.
pub const DEFAULT_ROUND_COUNT: usize = 5;

/// Roster page size requested from upstream. Players ranked past this cap are
/// absent from `/players/{leagueId}`; there is no further paging.
pub const DEFAULT_ROSTER_LIMIT: u32 = 26;

/// Maximum game results returned by upstream for a single leg.
pub const DEFAULT_HIGHSCORE_LIMIT: u32 = 26;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upstream credential. Only the aggregator needs it.
    pub session_cookie: Option<String>,
    pub league_id: Option<String>,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: u64,
    pub highscore_limit: u32,
    pub roster_limit: u32,
    pub leg_fetch_concurrency: usize,
    pub dashboard_port: u16,
    pub aggregator_url: String,
    pub round_count: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            session_cookie: env::var("SESSION_COOKIE").ok().filter(|c| !c.is_empty()),
            league_id: env::var("LEAGUE_ID").ok().filter(|id| !id.trim().is_empty()),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            highscore_limit: env::var("HIGHSCORE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HIGHSCORE_LIMIT),
            roster_limit: env::var("ROSTER_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ROSTER_LIMIT),
            leg_fetch_concurrency: env::var("LEG_FETCH_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1)
                .max(1),
            dashboard_port: env::var("DASHBOARD_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            aggregator_url: env::var("AGGREGATOR_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            round_count: env::var("ROUND_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ROUND_COUNT),
        }
    }

    /// Configuration pointing at the given upstream, with every other value
    /// at its default. Used by tests and embedders that bypass the environment.
    pub fn for_upstream(upstream_base_url: &str, session_cookie: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            session_cookie: Some(session_cookie.to_string()),
            league_id: None,
            upstream_base_url: upstream_base_url.to_string(),
            upstream_timeout_secs: 30,
            highscore_limit: DEFAULT_HIGHSCORE_LIMIT,
            roster_limit: DEFAULT_ROSTER_LIMIT,
            leg_fetch_concurrency: 1,
            dashboard_port: 3000,
            aggregator_url: "http://localhost:3001".to_string(),
            round_count: DEFAULT_ROUND_COUNT,
        }
    }
}
