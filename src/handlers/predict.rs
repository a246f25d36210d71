use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::{validate_team, AppError};
use crate::handlers::AppState;
use crate::models::PredictRequest;

/// Predict a match outcome
pub async fn predict_match(
    state: web::Data<Arc<AppState>>,
    req: web::Json<PredictRequest>,
) -> Result<HttpResponse, AppError> {
    validate_team(&req.home_team)?;
    validate_team(&req.away_team)?;

    let prediction = state
        .predictor
        .predict(&req.home_team, &req.away_team)
        .await
        .map_err(|e| AppError::PredictionError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(prediction))
}
