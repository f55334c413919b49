//! # OpenAPI Specification Assembly
//!
//! Assembles every utoipa-documented route into one OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "UZTRUCK API — Fleet Compliance Stack",
        version = "0.2.6",
        description = "HTTP service for the UZTRUCK fleet-compliance stack.\n\nProvides:\n- **Requirement catalog** lookups per destination country, `ALL`-scoped entries included\n- **Fleet views**: trucks, held documents with derived expiry state\n- **Document registration** and the field-validation rules engine\n- **Deficiency checks** for country selections and corridor routes\n- **Expiry alerts** and dashboard statistics, computed for an explicit date\n\nThe service carries no authentication; it fronts seeded reference data and an in-memory fleet store.",
        license(name = "BUSL-1.1")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::countries::list_countries,
        crate::routes::requirements::list_requirements,
        crate::routes::requirements::get_requirement,
        crate::routes::document_types::list_document_types,
        crate::routes::trucks::list_trucks,
        crate::routes::trucks::get_truck,
        crate::routes::trucks::truck_documents,
        crate::routes::documents::register_document,
        crate::routes::documents::validate_document,
        crate::routes::deficiency::check,
        crate::routes::eurasian::list_routes,
        crate::routes::eurasian::get_route,
        crate::routes::eurasian::check_route,
        crate::routes::alerts::list_alerts,
        crate::routes::dashboard::stats,
    ),
    components(
        schemas(
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
            crate::routes::documents::RegisterDocumentRequest,
            crate::routes::documents::ValidateDocumentRequest,
            crate::routes::deficiency::DeficiencyCheckRequest,
            crate::routes::eurasian::RouteCheckRequest,
        )
    ),
    tags(
        (name = "catalog", description = "Requirement catalog and country directory"),
        (name = "fleet", description = "Trucks and held documents"),
        (name = "documents", description = "Registration and field validation"),
        (name = "deficiency", description = "Deficiency evaluation"),
        (name = "routes", description = "Corridor routes and route checks"),
        (name = "alerts", description = "Expiry alerts"),
        (name = "dashboard", description = "Fleet statistics"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// GET /openapi.json — the generated OpenAPI document.
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
