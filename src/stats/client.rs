//! HTTP client for the football statistics API
//!
//! Read-only JSON GETs with the credential in a request header. Rate-limit
//! responses are retried a fixed number of times with a fixed delay;
//! credential rejections abort immediately.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use super::aggregate::{boosted_goals, build_features, team_averages, TeamSide};
use super::fixtures::{to_records, FixtureRecord, FixturesResponse};
use super::leagues::{find_league_id, LeaguesResponse};
use super::players::{squad_goal_average, top_scorer, PlayerEntry, PlayersResponse};
use super::teams::{team_id_map, TeamSeasonStats, TeamStatisticsResponse, TeamsResponse};
use super::StatsSnapshot;
use crate::teams::canonical_name;

/// Header carrying the API credential
const API_KEY_HEADER: &str = "x-apisports-key";

/// Statistics fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Credential missing or rejected by the source
    #[error("statistics API configuration error: {0}")]
    Config(String),

    /// Rate limited on every attempt within the retry budget
    #[error("rate limited by statistics source")]
    RateLimited,

    /// Network-level failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Unexpected HTTP status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Source reachable but no qualifying records
    #[error("no statistics available: {0}")]
    DataAbsent(String),
}

impl FetchError {
    /// Only rate limiting and transport failures are worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::RateLimited | FetchError::Transport(_))
    }
}

/// Retry policy for the fetch path
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

/// Statistics client configuration
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// API credential; absent means the fetch path is disabled
    pub api_key: Option<String>,
    pub base_url: String,
    pub country: String,
    pub league_name: String,
    /// League id used when name resolution comes up empty
    pub fallback_league_id: u32,
    pub season: u16,
    /// Bound on recent finished fixtures to fetch
    pub recent_limit: u32,
    pub timeout_secs: u64,
    pub retry: RetryPolicy,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://v3.football.api-sports.io".to_string(),
            country: "Cyprus".to_string(),
            league_name: "1. Division".to_string(),
            fallback_league_id: 203,
            season: 2024,
            recent_limit: 20,
            timeout_secs: 10,
            retry: RetryPolicy::default(),
        }
    }
}

impl StatsConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("FOOTBALL_API_KEY")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let env_or = |name: &str, default: String| -> String {
            std::env::var(name)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
        };
        let parse_or = |name: &str, default: u64| -> u64 {
            std::env::var(name)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Self {
            api_key,
            base_url: env_or("FOOTBALL_API_URL", defaults.base_url),
            country: env_or("MATCHCAST_COUNTRY", defaults.country),
            league_name: env_or("MATCHCAST_LEAGUE", defaults.league_name),
            fallback_league_id: parse_or(
                "MATCHCAST_LEAGUE_ID",
                defaults.fallback_league_id as u64,
            ) as u32,
            season: parse_or("MATCHCAST_SEASON", defaults.season as u64) as u16,
            recent_limit: parse_or("MATCHCAST_RECENT_LIMIT", defaults.recent_limit as u64) as u32,
            timeout_secs: parse_or("MATCHCAST_TIMEOUT_SECS", defaults.timeout_secs),
            retry: RetryPolicy {
                max_attempts: parse_or(
                    "MATCHCAST_RETRY_ATTEMPTS",
                    defaults.retry.max_attempts as u64,
                ) as u32,
                delay: Duration::from_secs(parse_or(
                    "MATCHCAST_RETRY_DELAY_SECS",
                    defaults.retry.delay.as_secs(),
                )),
            },
        }
    }
}

/// Run an operation under the retry policy.
///
/// Retryable failures are reattempted after the fixed delay until the
/// attempt budget is spent; everything else propagates immediately.
pub(crate) async fn fetch_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    mut op: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.max_attempts => {
                warn!(
                    "fetch attempt {}/{} failed: {} (retrying in {:?})",
                    attempt, policy.max_attempts, err, policy.delay
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Client for the statistics source
#[derive(Debug)]
pub struct StatsClient {
    client: reqwest::Client,
    api_key: String,
    config: StatsConfig,
}

impl StatsClient {
    /// Create a client. Fails when no credential is configured.
    pub fn new(config: StatsConfig) -> Result<Self, FetchError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| FetchError::Config("no API key configured".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);

        fetch_with_retry(&self.config.retry, || {
            let request = self
                .client
                .get(url.as_str())
                .header(API_KEY_HEADER, self.api_key.as_str())
                .query(query);
            let url = url.clone();

            async move {
                let response = request.send().await?;

                match response.status() {
                    status if status.is_success() => {
                        let body = response.text().await?;
                        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
                    }
                    StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => Err(FetchError::Config(
                        format!("credential rejected by {}", url),
                    )),
                    StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited),
                    status => Err(FetchError::Status(status.as_u16())),
                }
            }
        })
        .await
    }

    /// Resolve the configured league's id, falling back to the configured
    /// constant when the name is not listed
    pub async fn league_id(&self) -> Result<u32, FetchError> {
        let response: LeaguesResponse = self
            .get_json("leagues", &[("country", self.config.country.clone())])
            .await?;

        match find_league_id(&response, &self.config.league_name) {
            Some(id) => Ok(id),
            None => {
                warn!(
                    "league '{}' not listed for {}, using fallback id {}",
                    self.config.league_name, self.config.country, self.config.fallback_league_id
                );
                Ok(self.config.fallback_league_id)
            }
        }
    }

    /// Vendor team name -> id for the configured season
    pub async fn team_ids(&self, league: u32) -> Result<HashMap<String, u32>, FetchError> {
        let response: TeamsResponse = self
            .get_json(
                "teams",
                &[
                    ("league", league.to_string()),
                    ("season", self.config.season.to_string()),
                ],
            )
            .await?;
        Ok(team_id_map(response))
    }

    /// Most recent finished fixtures, bounded by the configured limit
    pub async fn recent_results(&self, league: u32) -> Result<Vec<FixtureRecord>, FetchError> {
        let response: FixturesResponse = self
            .get_json(
                "fixtures",
                &[
                    ("league", league.to_string()),
                    ("season", self.config.season.to_string()),
                    ("status", "FT".to_string()),
                    ("last", self.config.recent_limit.to_string()),
                ],
            )
            .await?;
        Ok(to_records(response))
    }

    /// Season statistics for one team
    pub async fn team_statistics(
        &self,
        league: u32,
        team: u32,
    ) -> Result<TeamSeasonStats, FetchError> {
        let response: TeamStatisticsResponse = self
            .get_json(
                "teams/statistics",
                &[
                    ("league", league.to_string()),
                    ("season", self.config.season.to_string()),
                    ("team", team.to_string()),
                ],
            )
            .await?;
        Ok(response.response)
    }

    /// Player season statistics for one team
    pub async fn players(&self, league: u32, team: u32) -> Result<Vec<PlayerEntry>, FetchError> {
        let response: PlayersResponse = self
            .get_json(
                "players",
                &[
                    ("league", league.to_string()),
                    ("season", self.config.season.to_string()),
                    ("team", team.to_string()),
                ],
            )
            .await?;
        Ok(response.response)
    }

    /// Fetch and aggregate everything the feature vector needs for one match
    pub async fn fetch_match_features(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> Result<StatsSnapshot, FetchError> {
        let home_name = canonical_name(home_team);
        let away_name = canonical_name(away_team);

        let league = self.league_id().await?;
        info!("fetching statistics for {} vs {} (league {})", home_name, away_name, league);

        let ids = self.team_ids(league).await?;
        let home_id = *ids
            .get(home_name)
            .ok_or_else(|| FetchError::DataAbsent(format!("team '{}' not listed", home_name)))?;
        let away_id = *ids
            .get(away_name)
            .ok_or_else(|| FetchError::DataAbsent(format!("team '{}' not listed", away_name)))?;

        let fixtures = self.recent_results(league).await?;
        let home_averages = team_averages(home_name, &fixtures).ok_or_else(|| {
            FetchError::DataAbsent(format!("no recent matches for '{}'", home_name))
        })?;
        let away_averages = team_averages(away_name, &fixtures).ok_or_else(|| {
            FetchError::DataAbsent(format!("no recent matches for '{}'", away_name))
        })?;

        let home_stats = self.team_statistics(league, home_id).await?;
        let away_stats = self.team_statistics(league, away_id).await?;

        let home_players = self.players(league, home_id).await?;
        let away_players = self.players(league, away_id).await?;

        let home_side = TeamSide {
            goals: boosted_goals(squad_goal_average(&home_players)),
            form: home_averages.form,
            possession: home_stats.possession_average(),
            shots_on_target: home_stats.shots_on_target(),
        };
        let away_side = TeamSide {
            goals: boosted_goals(squad_goal_average(&away_players)),
            form: away_averages.form,
            possession: away_stats.possession_average(),
            shots_on_target: away_stats.shots_on_target(),
        };

        Ok(StatsSnapshot {
            features: build_features(&home_side, &away_side),
            home_top_scorer: top_scorer(&home_players),
            away_top_scorer: top_scorer(&away_players),
            fetched_at: Utc::now(),
        })
    }
}
