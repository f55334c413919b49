//! # Corridor Route API
//!
//! Route directory lookups and the route-based deficiency check: a route
//! check runs the evaluator over the route's transit country set.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use uztruck_core::{parse_date, RouteId, TruckId};
use uztruck_deficiency::DeficiencyReport;
use uztruck_routes::{EurasianRoute, RouteDirectory};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request for a route-based deficiency check.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RouteCheckRequest {
    /// The truck to evaluate.
    pub truck_id: u32,
    /// Evaluation date, `YYYY-MM-DD`.
    pub as_of: String,
}

impl Validate for RouteCheckRequest {
    fn validate(&self) -> Result<(), String> {
        parse_date(&self.as_of).map_err(|e| e.to_string())?;
        Ok(())
    }
}

/// Build the corridor routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/routes", get(list_routes))
        .route("/v1/routes/:id", get(get_route))
        .route("/v1/routes/:id/check", post(check_route))
}

fn resolve_route(state: &AppState, id: &str) -> Result<EurasianRoute, AppError> {
    let route_id = RouteId::new(id)?;
    state
        .routes
        .get(&route_id)
        .ok_or_else(|| AppError::NotFound(format!("route {route_id} not found")))
}

/// GET /v1/routes — the corridor route directory, ordered by slug.
#[utoipa::path(
    get,
    path = "/v1/routes",
    responses(
        (status = 200, description = "Routes, ordered by slug"),
    ),
    tag = "routes"
)]
async fn list_routes(State(state): State<AppState>) -> Json<Vec<EurasianRoute>> {
    Json(state.routes.list())
}

/// GET /v1/routes/:id — one route with crossings and tolls.
#[utoipa::path(
    get,
    path = "/v1/routes/{id}",
    params(("id" = String, Path, description = "Route slug, e.g. route_1")),
    responses(
        (status = 200, description = "Route found"),
        (status = 404, description = "Unknown route", body = crate::error::ErrorBody),
    ),
    tag = "routes"
)]
async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EurasianRoute>, AppError> {
    resolve_route(&state, &id).map(Json)
}

/// POST /v1/routes/:id/check — deficiency report for a route's countries.
#[utoipa::path(
    post,
    path = "/v1/routes/{id}/check",
    params(("id" = String, Path, description = "Route slug, e.g. route_1")),
    request_body = RouteCheckRequest,
    responses(
        (status = 200, description = "Deficiency report over the route's transit countries"),
        (status = 404, description = "Unknown route or truck", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid request", body = crate::error::ErrorBody),
    ),
    tag = "routes"
)]
async fn check_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RouteCheckRequest>, JsonRejection>,
) -> Result<Json<DeficiencyReport>, AppError> {
    let req = extract_validated_json(body)?;
    let route = resolve_route(&state, &id)?;
    let as_of = parse_date(&req.as_of)?;
    let report = state
        .evaluator
        .evaluate(TruckId::new(req.truck_id), &route.country_set(), as_of)?;
    Ok(Json(report))
}
