use serde::{Deserialize, Serialize};

use crate::features::MatchFeatures;

/// Three-way match outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Outcome {
    /// All outcomes in classifier class order
    pub const ALL: [Outcome; 3] = [Outcome::HomeWin, Outcome::Draw, Outcome::AwayWin];

    /// Class index used by the classifier
    pub fn index(self) -> usize {
        match self {
            Outcome::HomeWin => 0,
            Outcome::Draw => 1,
            Outcome::AwayWin => 2,
        }
    }
}

/// Probability per outcome, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbabilities {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}

impl OutcomeProbabilities {
    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::HomeWin => self.home_win,
            Outcome::Draw => self.draw,
            Outcome::AwayWin => self.away_win,
        }
    }

    /// Sum of all three percentages
    pub fn total(&self) -> f64 {
        self.home_win + self.draw + self.away_win
    }
}

/// Classifier output for a single feature vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub outcome: Outcome,
    pub probabilities: OutcomeProbabilities,
}

/// Where the feature vector came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSource {
    /// Built from freshly fetched statistics
    Live,
    /// The fixed default vector
    Fallback,
}

/// A team's leading goal scorer for the season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopScorer {
    pub name: String,
    pub goals: f64,
}

/// Match prediction request
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub home_team: String,
    pub away_team: String,
}

/// Full prediction for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub home_team: String,
    pub away_team: String,
    pub result: PredictionResult,
    pub source: FeatureSource,
    pub features: MatchFeatures,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_top_scorer: Option<TopScorer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_top_scorer: Option<TopScorer>,
    /// Why the fallback vector was used, when it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub live_stats: bool,
}

/// Supported teams response
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serde_labels() {
        assert_eq!(
            serde_json::to_string(&Outcome::HomeWin).unwrap(),
            "\"home_win\""
        );
        assert_eq!(serde_json::to_string(&Outcome::Draw).unwrap(), "\"draw\"");
        assert_eq!(
            serde_json::to_string(&Outcome::AwayWin).unwrap(),
            "\"away_win\""
        );
    }

    #[test]
    fn test_outcome_index_matches_class_order() {
        for (i, outcome) in Outcome::ALL.iter().enumerate() {
            assert_eq!(outcome.index(), i);
        }
    }

    #[test]
    fn test_probabilities_get_covers_all_outcomes() {
        let probs = OutcomeProbabilities {
            home_win: 55.0,
            draw: 25.0,
            away_win: 20.0,
        };
        assert_eq!(probs.get(Outcome::HomeWin), 55.0);
        assert_eq!(probs.get(Outcome::Draw), 25.0);
        assert_eq!(probs.get(Outcome::AwayWin), 20.0);
        assert!((probs.total() - 100.0).abs() < 1e-9);
    }
}
