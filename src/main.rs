use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use matchcast::classifier::{ClassifierModel, TrainOptions, EXTENDED_SAMPLE};
use matchcast::handlers::{self, AppState};
use matchcast::predictor::MatchPredictor;
use matchcast::stats::{StatsClient, StatsConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    // Fit the classifier once; the model is immutable for the process lifetime
    let model = ClassifierModel::fit(&EXTENDED_SAMPLE, &TrainOptions::default())
        .expect("Failed to fit classifier on embedded sample");
    info!("Classifier fitted on {} rows", EXTENDED_SAMPLE.rows.len());

    // Live statistics are optional; without them every prediction uses the
    // fallback vector
    let client = match StatsClient::new(StatsConfig::from_env()) {
        Ok(client) => {
            info!("Live statistics source configured");
            Some(client)
        }
        Err(e) => {
            warn!("Live statistics disabled: {}. Using fallback features.", e);
            None
        }
    };

    let predictor =
        MatchPredictor::new(model, client).expect("Classifier width does not match feature vector");
    let app_state = Arc::new(AppState { predictor });

    info!("Starting matchcast API server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(handlers::health_check))
            .route("/teams", web::get().to(handlers::list_teams))
            .route("/predict", web::post().to(handlers::predict_match))
    })
    .bind(&addr)?
    .run()
    .await
}
