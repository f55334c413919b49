//! # Requirement Catalog API
//!
//! Read-only lookups over the per-country requirement catalog.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use uztruck_catalog::{DocumentRequirement, RequirementCatalog};
use uztruck_core::{CountryCode, RequirementId};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for the requirement list.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct RequirementQuery {
    /// Destination country code. Absent means the full catalog.
    pub country: Option<String>,
}

/// Build the requirements router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/requirements", get(list_requirements))
        .route("/v1/requirements/:id", get(get_requirement))
}

/// GET /v1/requirements — catalog entries, optionally scoped to a country.
///
/// With `?country=RU` the response carries the country's entries plus
/// every `ALL`-scoped entry, ordered by id.
#[utoipa::path(
    get,
    path = "/v1/requirements",
    params(
        ("country" = Option<String>, Query, description = "Destination country code (two letters)"),
    ),
    responses(
        (status = 200, description = "Requirements, ordered by id"),
        (status = 422, description = "Malformed country code", body = crate::error::ErrorBody),
    ),
    tag = "catalog"
)]
async fn list_requirements(
    State(state): State<AppState>,
    Query(query): Query<RequirementQuery>,
) -> Result<Json<Vec<DocumentRequirement>>, AppError> {
    let entries = match query.country {
        Some(code) => {
            let country = CountryCode::new(code)?;
            state.catalog.requirements_for(&country)
        }
        None => state.catalog.all(),
    };
    Ok(Json(entries))
}

/// GET /v1/requirements/:id — one catalog entry.
#[utoipa::path(
    get,
    path = "/v1/requirements/{id}",
    params(("id" = u32, Path, description = "Requirement id")),
    responses(
        (status = 200, description = "Requirement found"),
        (status = 404, description = "Unknown requirement", body = crate::error::ErrorBody),
    ),
    tag = "catalog"
)]
async fn get_requirement(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DocumentRequirement>, AppError> {
    let id = RequirementId::new(id);
    state
        .catalog
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("requirement {id} not found")))
}
