//! HTTP API handlers

mod health;
mod predict;
mod teams;

pub use health::health_check;
pub use predict::predict_match;
pub use teams::list_teams;

use crate::predictor::MatchPredictor;

/// Application state shared across handlers
pub struct AppState {
    pub predictor: MatchPredictor,
}
