//! Live statistics fetching and aggregation
//!
//! Queries a football statistics API for recent results, season statistics
//! and player numbers, and reduces them to one feature vector per match.
//! Every failure on this path is represented as a [`FetchError`]; the caller
//! decides when to substitute the fallback vector.
//!
//! # Example
//!
//! ```no_run
//! use matchcast::stats::{StatsClient, StatsConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = StatsConfig {
//!         api_key: Some("secret".to_string()),
//!         ..StatsConfig::default()
//!     };
//!     let client = StatsClient::new(config)?;
//!
//!     let snapshot = client
//!         .fetch_match_features("APOEL Nicosia", "AEK Larnaca")
//!         .await?;
//!     println!("{:?}", snapshot.features);
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
mod client;
mod fixtures;
mod leagues;
mod players;
mod teams;

pub use client::{FetchError, RetryPolicy, StatsClient, StatsConfig};
pub use fixtures::FixtureRecord;
pub use players::{PlayerEntry, SQUAD_SAMPLE_SIZE};
pub use teams::TeamSeasonStats;

use chrono::{DateTime, Utc};

use crate::features::MatchFeatures;
use crate::models::TopScorer;

/// Everything fetched and aggregated for one match
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub features: MatchFeatures,
    pub home_top_scorer: Option<TopScorer>,
    pub away_top_scorer: Option<TopScorer>,
    pub fetched_at: DateTime<Utc>,
}
