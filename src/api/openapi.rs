//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, maintenance, metrics};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ConectaSonda API",
        version = "1.0.0",
        description = "API para el Sistema Predictivo de Fallas - Torniquetes y Transbank",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        // Metrics
        metrics::get_metrics,
        metrics::get_type_summary,
        metrics::get_status_summary,
        // Equipment
        equipment::list_equipments,
        equipment::get_equipment,
        equipment::update_status,
        equipment::list_failures,
        // Maintenance
        maintenance::schedule_maintenance,
        maintenance::predict_failure,
        maintenance::generate_report,
    ),
    components(
        schemas(
            // Health
            health::RootResponse,
            crate::services::health::HealthResponse,
            crate::services::health::ComponentHealth,
            // Metrics
            crate::services::metrics::MetricsResponse,
            crate::services::metrics::TypeSummary,
            crate::services::metrics::StatusSummary,
            // Equipment
            crate::models::Equipment,
            crate::models::EquipmentType,
            crate::models::EquipmentStatus,
            crate::models::FailureEvent,
            equipment::StatusUpdateResponse,
            // Maintenance
            crate::models::MaintenanceRequest,
            crate::models::RiskEstimate,
            crate::models::RiskLevel,
            maintenance::MaintenanceResponse,
            maintenance::ReportResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and health"),
        (name = "metrics", description = "Dashboard metrics"),
        (name = "equipment", description = "Turnstiles and Transbank terminals"),
        (name = "maintenance", description = "Maintenance, predictions and reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
