//! Match feature vector construction
//!
//! Features are kept in the same column order as the embedded training
//! sample; the classifier relies on that ordering.

use serde::{Deserialize, Serialize};

/// Number of columns in the production feature vector
pub const FEATURE_COUNT: usize = 8;

/// Column names, in vector order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "home_goals",
    "away_goals",
    "home_form",
    "away_form",
    "home_possession",
    "away_possession",
    "home_shots",
    "away_shots",
];

/// Average goals assumed when no statistics are available
pub const DEFAULT_GOALS: f64 = 1.0;
/// Neutral form score (draw-level)
pub const DEFAULT_FORM: f64 = 0.5;
/// Possession assumed when the statistics source omits it
pub const DEFAULT_POSSESSION: f64 = 50.0;
/// Shots on target assumed when the statistics source omits them
pub const DEFAULT_SHOTS_ON_TARGET: f64 = 4.0;

/// One prospective match, reduced to numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchFeatures {
    pub home_goals: f64,
    pub away_goals: f64,
    pub home_form: f64,
    pub away_form: f64,
    pub home_possession: f64,
    pub away_possession: f64,
    pub home_shots: f64,
    pub away_shots: f64,
}

impl MatchFeatures {
    /// The fixed default vector used whenever live statistics cannot be
    /// obtained
    pub fn fallback() -> Self {
        MatchFeatures {
            home_goals: DEFAULT_GOALS,
            away_goals: DEFAULT_GOALS,
            home_form: DEFAULT_FORM,
            away_form: DEFAULT_FORM,
            home_possession: DEFAULT_POSSESSION,
            away_possession: DEFAULT_POSSESSION,
            home_shots: DEFAULT_SHOTS_ON_TARGET,
            away_shots: DEFAULT_SHOTS_ON_TARGET,
        }
    }

    /// Flatten into classifier column order
    pub fn to_vector(&self) -> Vec<f64> {
        vec![
            self.home_goals,
            self.away_goals,
            self.home_form,
            self.away_form,
            self.home_possession,
            self.away_possession,
            self.home_shots,
            self.away_shots,
        ]
    }
}
