//! API handlers for ConectaSonda REST endpoints

pub mod equipment;
pub mod health;
pub mod maintenance;
pub mod metrics;
pub mod openapi;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::CorsConfig, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    let api = Router::new()
        .route("/", get(health::root))
        .route("/api/health", get(health::health_check))
        // Dashboard
        .route("/api/metrics", get(metrics::get_metrics))
        .route("/api/type-summary", get(metrics::get_type_summary))
        .route("/api/status-summary", get(metrics::get_status_summary))
        // Equipment
        .route("/api/equipments", get(equipment::list_equipments))
        .route("/api/equipments/:id", get(equipment::get_equipment))
        .route("/api/equipments/:id/status", put(equipment::update_status))
        .route("/api/failures", get(equipment::list_failures))
        // Maintenance & predictions
        .route("/api/maintenance", post(maintenance::schedule_maintenance))
        .route("/api/predict/:id", post(maintenance::predict_failure))
        .route("/api/reports/generate", get(maintenance::generate_report))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS restricted to the configured origins
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
