//! # uztruck-api — HTTP Service for the UZTRUCK Fleet Stack
//!
//! Axum service over the seeded catalog, fleet store, route directory and
//! deficiency evaluator. Every status-deriving endpoint takes an explicit
//! `as_of` date; the service never reads the wall clock for a client.
//!
//! ## API Surface
//!
//! | Prefix                  | Module                        | Domain        |
//! |-------------------------|-------------------------------|---------------|
//! | `/v1/countries`         | [`routes::countries`]         | Catalog       |
//! | `/v1/requirements/*`    | [`routes::requirements`]      | Catalog       |
//! | `/v1/document-types`    | [`routes::document_types`]    | Fleet         |
//! | `/v1/trucks/*`          | [`routes::trucks`]            | Fleet         |
//! | `/v1/documents/*`       | [`routes::documents`]         | Registration  |
//! | `/v1/deficiency/check`  | [`routes::deficiency`]        | Evaluation    |
//! | `/v1/routes/*`          | [`routes::eurasian`]          | Corridors     |
//! | `/v1/alerts`            | [`routes::alerts`]            | Alerts        |
//! | `/v1/dashboard/stats`   | [`routes::dashboard`]         | Dashboard     |
//!
//! Health probes live under `/health/*` and the OpenAPI document at
//! `/openapi.json`.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes are mounted alongside the API routes; nothing requires
/// credentials, so there is no authenticated/unauthenticated split.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::countries::router())
        .merge(routes::requirements::router())
        .merge(routes::document_types::router())
        .merge(routes::trucks::router())
        .merge(routes::documents::router())
        .merge(routes::deficiency::router())
        .merge(routes::eurasian::router())
        .merge(routes::alerts::router())
        .merge(routes::dashboard::router())
        .merge(openapi::router())
        // Request bodies are small JSON documents; cap them at 1 MiB.
        .layer(DefaultBodyLimit::max(1024 * 1024));

    Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: verifies the seeded stores are populated and the
/// fleet lock is healthy, reporting the store counts.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.catalog.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "requirement catalog empty").into_response();
    }
    if state.routes.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "route directory empty").into_response();
    }

    let body = serde_json::json!({
        "status": "ready",
        "requirements": state.catalog.len(),
        "countries": state.countries.len(),
        "trucks": state.fleet.truck_count(),
        "document_types": state.fleet.type_count(),
        "documents": state.fleet.document_count(),
        "routes": state.routes.len(),
    });
    Json(body).into_response()
}
