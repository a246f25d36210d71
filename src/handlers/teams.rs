use actix_web::{HttpResponse, Responder};

use crate::models::TeamsResponse;
use crate::teams::supported_teams;

/// List the teams available for prediction
pub async fn list_teams() -> impl Responder {
    let response = TeamsResponse {
        teams: supported_teams().iter().map(|s| s.to_string()).collect(),
    };

    HttpResponse::Ok().json(response)
}
