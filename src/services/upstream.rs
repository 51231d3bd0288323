//! HTTP client for the third-party leaderboard API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::game::{LegResults, LegStats};
use crate::models::league::{League, LeagueResponse};
use crate::models::player::{PlayerProfile, RosterPage};

/// Read operations the aggregator needs from the leaderboard API.
pub trait LeaderboardApi: Send + Sync {
    /// League metadata with its finished and current legs.
    fn fetch_league(
        &self,
        league_id: &str,
    ) -> impl std::future::Future<Output = Result<League, AppError>> + Send;

    /// Ranked game results for one leg.
    fn fetch_leg_results(
        &self,
        challenge_id: &str,
    ) -> impl std::future::Future<Output = Result<LegResults, AppError>> + Send;

    /// First roster page, ranked by score.
    fn fetch_roster(
        &self,
        league_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<PlayerProfile>, AppError>> + Send;
}

/// Authenticated client for the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
    highscore_limit: u32,
    roster_limit: u32,
}

impl UpstreamClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let cookie = config
            .session_cookie
            .as_deref()
            .ok_or_else(|| AppError::Validation("SESSION_COOKIE must be set".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, session_header(cookie)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: parse_base_url(&config.upstream_base_url)?,
            highscore_limit: config.highscore_limit,
            roster_limit: config.roster_limit,
        })
    }

    /// Check that the upstream host answers at all. Any HTTP status counts.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.http.get(self.base_url.clone()).send().await?;
        Ok(())
    }

    fn league_url(&self, league_id: &str) -> Result<Url, AppError> {
        endpoint(&self.base_url, &["leagues", league_id])
    }

    fn highscores_url(&self, challenge_id: &str) -> Result<Url, AppError> {
        let mut url = endpoint(&self.base_url, &["results", "highscores", challenge_id])?;
        url.query_pairs_mut()
            .append_pair("friends", "false")
            .append_pair("limit", &self.highscore_limit.to_string());
        Ok(url)
    }

    fn roster_url(&self, league_id: &str) -> Result<Url, AppError> {
        let mut url = endpoint(&self.base_url, &["leagues", league_id, "scores", "0"])?;
        url.query_pairs_mut()
            .append_pair("limit", &self.roster_limit.to_string());
        Ok(url)
    }
}

/// Cookie header carrying the upstream credential, redacted from `Debug`.
fn session_header(cookie: &str) -> Result<HeaderValue, AppError> {
    let mut value = HeaderValue::from_str(cookie)
        .map_err(|e| AppError::Validation(format!("Invalid session cookie: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Parse a service root such as `https://host/api/v3` or `http://host:3001/`.
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::Validation(format!("Invalid base URL {raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Validation(format!("Invalid base URL {raw}")));
    }
    Ok(url)
}

/// Append `segments` to `base`, percent-encoding each one so an identifier
/// can never add path segments, a query or a fragment.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Validation(format!("Invalid base URL {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// GET `url` and decode the body as `T`.
///
/// Non-success statuses become `UpstreamStatus`; a body that does not match
/// `T` becomes `UpstreamSchema`.
pub async fn fetch_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: Url,
) -> Result<T, AppError> {
    tracing::debug!(url = %url, "Fetching JSON");

    let response = http.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::UpstreamStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| AppError::UpstreamSchema(format!("{url}: {e}")))
}

impl LeaderboardApi for UpstreamClient {
    async fn fetch_league(&self, league_id: &str) -> Result<League, AppError> {
        let response: LeagueResponse = fetch_json(&self.http, self.league_url(league_id)?).await?;
        Ok(response.league)
    }

    async fn fetch_leg_results(&self, challenge_id: &str) -> Result<LegResults, AppError> {
        let stats: LegStats = fetch_json(&self.http, self.highscores_url(challenge_id)?).await?;
        Ok(stats.items)
    }

    async fn fetch_roster(&self, league_id: &str) -> Result<Vec<PlayerProfile>, AppError> {
        let page: RosterPage = fetch_json(&self.http, self.roster_url(league_id)?).await?;
        Ok(page.scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UpstreamClient {
        UpstreamClient::new(&AppConfig::for_upstream(base, "_ncfa=1")).unwrap()
    }

    #[test]
    fn builds_upstream_urls() {
        let client = client("http://upstream.test/api/v3/");
        assert_eq!(
            client.league_url("lg").unwrap().as_str(),
            "http://upstream.test/api/v3/leagues/lg"
        );
        assert_eq!(
            client.highscores_url("ch1").unwrap().as_str(),
            "http://upstream.test/api/v3/results/highscores/ch1?friends=false&limit=26"
        );
        assert_eq!(
            client.roster_url("lg").unwrap().as_str(),
            "http://upstream.test/api/v3/leagues/lg/scores/0?limit=26"
        );
    }

    #[test]
    fn identifiers_cannot_rewrite_path_or_query() {
        let client = client("http://upstream.test/api/v3");

        let url = client.roster_url("lg/scores/0?limit=5000#").unwrap();
        assert_eq!(url.path(), "/api/v3/leagues/lg%2Fscores%2F0%3Flimit=5000%23/scores/0");
        assert_eq!(url.query(), Some("limit=26"));
        assert!(url.fragment().is_none());

        let url = client.league_url("../../profiles/me").unwrap();
        assert!(url.path().starts_with("/api/v3/leagues/"));
        assert_eq!(url.path_segments().unwrap().count(), 4);
    }

    #[test]
    fn session_cookie_is_sensitive() {
        let header = session_header("_ncfa=secret").unwrap();
        assert!(header.is_sensitive());
        assert!(!format!("{header:?}").contains("secret"));
    }

    #[test]
    fn rejects_cookie_with_control_characters() {
        let config = AppConfig::for_upstream("http://upstream.test", "bad\ncookie");
        let err = UpstreamClient::new(&config).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn requires_session_cookie() {
        let mut config = AppConfig::for_upstream("http://upstream.test", "_ncfa=1");
        config.session_cookie = None;
        let err = UpstreamClient::new(&config).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("mailto:someone@example.com").is_err());
        assert!(parse_base_url("http://localhost:3001").is_ok());
    }
}
