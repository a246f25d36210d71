//! Prediction orchestration
//!
//! Ties the feature aggregator and the classifier together. Fetch failures
//! degrade to the fallback vector; once a model is fitted, a prediction is
//! always produced.

use chrono::Utc;
use tracing::warn;

use crate::classifier::{ClassifierError, ClassifierModel};
use crate::features::{MatchFeatures, FEATURE_COUNT};
use crate::models::{FeatureSource, Prediction};
use crate::stats::StatsClient;

/// Match predictor with an optional live statistics source
#[derive(Debug)]
pub struct MatchPredictor {
    model: ClassifierModel,
    client: Option<StatsClient>,
}

impl MatchPredictor {
    /// Build a predictor around a fitted model.
    ///
    /// The model must match the production feature width; without a client
    /// every prediction uses the fallback vector.
    pub fn new(
        model: ClassifierModel,
        client: Option<StatsClient>,
    ) -> Result<Self, ClassifierError> {
        if model.n_features() != FEATURE_COUNT {
            return Err(ClassifierError::Arity {
                expected: FEATURE_COUNT,
                actual: model.n_features(),
            });
        }
        Ok(Self { model, client })
    }

    /// Whether live statistics are configured
    pub fn has_live_stats(&self) -> bool {
        self.client.is_some()
    }

    /// Predict one match.
    ///
    /// The classifier never sees a fetch error: any failure on the
    /// aggregation path is converted to the fallback vector here, with the
    /// cause recorded on the prediction.
    pub async fn predict(
        &self,
        home_team: &str,
        away_team: &str,
    ) -> Result<Prediction, ClassifierError> {
        let mut features = MatchFeatures::fallback();
        let mut source = FeatureSource::Fallback;
        let mut fallback_reason = None;
        let mut home_top_scorer = None;
        let mut away_top_scorer = None;

        match &self.client {
            Some(client) => match client.fetch_match_features(home_team, away_team).await {
                Ok(snapshot) => {
                    features = snapshot.features;
                    source = FeatureSource::Live;
                    home_top_scorer = snapshot.home_top_scorer;
                    away_top_scorer = snapshot.away_top_scorer;
                }
                Err(err) => {
                    warn!("statistics fetch failed, using fallback features: {}", err);
                    fallback_reason = Some(err.to_string());
                }
            },
            None => {
                fallback_reason = Some("no statistics source configured".to_string());
            }
        }

        let result = self.model.predict(&features.to_vector())?;

        Ok(Prediction {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            result,
            source,
            features,
            home_top_scorer,
            away_top_scorer,
            fallback_reason,
            generated_at: Utc::now(),
        })
    }
}
