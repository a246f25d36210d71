//! Matchcast - football match outcome prediction
//!
//! This library provides:
//! - A three-way outcome classifier (home win / draw / away win) fit on an
//!   embedded training sample with per-column standardization
//! - Live statistics fetching from a football data API, with a bounded
//!   retry policy and explicit error taxonomy
//! - A guaranteed fallback feature vector, so a prediction is always
//!   produced once the classifier is trained
//!
//! # Example
//!
//! ```no_run
//! use matchcast::classifier::{ClassifierModel, TrainOptions, EXTENDED_SAMPLE};
//! use matchcast::predictor::MatchPredictor;
//! use matchcast::stats::{StatsClient, StatsConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let model = ClassifierModel::fit(&EXTENDED_SAMPLE, &TrainOptions::default())?;
//!     let client = StatsClient::new(StatsConfig::from_env()).ok();
//!     let predictor = MatchPredictor::new(model, client)?;
//!
//!     let prediction = predictor.predict("APOEL Nicosia", "AEK Larnaca").await?;
//!     println!("{:?}: {:?}", prediction.result.outcome, prediction.result.probabilities);
//!
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod features;
pub mod models;
pub mod predictor;
pub mod stats;
pub mod teams;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod error;
#[cfg(feature = "api")]
pub mod handlers;

// Re-export commonly used types
pub use classifier::{ClassifierError, ClassifierModel, TrainOptions};
pub use features::MatchFeatures;
pub use models::{
    FeatureSource, Outcome, OutcomeProbabilities, PredictRequest, Prediction, PredictionResult,
};
pub use predictor::MatchPredictor;
pub use stats::{FetchError, StatsClient, StatsConfig};
