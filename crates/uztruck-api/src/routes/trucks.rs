//! # Fleet API
//!
//! Truck listings and per-truck document views. Document status is always
//! derived for the caller's explicit `as_of` date.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use uztruck_core::TruckId;
use uztruck_fleet::{DocumentRegistry, DocumentSnapshot, Truck, TruckRegistry, TypeDirectory};

use crate::error::AppError;
use crate::routes::parse_as_of;
use crate::state::AppState;

/// Pagination parameters for the fleet list.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct PaginationParams {
    /// Maximum number of items to return (default 100, max 1000).
    pub limit: Option<usize>,
    /// Number of items to skip (default 0).
    pub offset: Option<usize>,
}

impl PaginationParams {
    const DEFAULT_LIMIT: usize = 100;
    const MAX_LIMIT: usize = 1000;

    fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .min(Self::MAX_LIMIT)
    }

    fn effective_offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

/// Query parameters for the per-truck document view.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct DocumentViewQuery {
    /// Evaluation date for the derived expiry state, `YYYY-MM-DD`.
    pub as_of: Option<String>,
}

/// Build the fleet router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/trucks", get(list_trucks))
        .route("/v1/trucks/:id", get(get_truck))
        .route("/v1/trucks/:id/documents", get(truck_documents))
}

/// GET /v1/trucks — fleet list with pagination.
#[utoipa::path(
    get,
    path = "/v1/trucks",
    params(
        ("limit" = Option<usize>, Query, description = "Max items to return (default 100, max 1000)"),
        ("offset" = Option<usize>, Query, description = "Items to skip (default 0)"),
    ),
    responses(
        (status = 200, description = "Trucks, ordered by id"),
    ),
    tag = "fleet"
)]
async fn list_trucks(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Json<Vec<Truck>> {
    let all = state.fleet.list_trucks();
    let offset = pagination.effective_offset().min(all.len());
    let limit = pagination.effective_limit();
    Json(all.into_iter().skip(offset).take(limit).collect())
}

/// GET /v1/trucks/:id — one truck.
#[utoipa::path(
    get,
    path = "/v1/trucks/{id}",
    params(("id" = u32, Path, description = "Truck id")),
    responses(
        (status = 200, description = "Truck found"),
        (status = 404, description = "Unknown truck", body = crate::error::ErrorBody),
    ),
    tag = "fleet"
)]
async fn get_truck(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Truck>, AppError> {
    let id = TruckId::new(id);
    state
        .fleet
        .get_truck(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("truck {id} not found")))
}

/// GET /v1/trucks/:id/documents?as_of= — held documents with derived state.
///
/// Documents whose type id no longer resolves in the directory are
/// omitted; they cannot carry a type name or match any requirement.
#[utoipa::path(
    get,
    path = "/v1/trucks/{id}/documents",
    params(
        ("id" = u32, Path, description = "Truck id"),
        ("as_of" = String, Query, description = "Evaluation date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Document snapshots, ordered by document id"),
        (status = 404, description = "Unknown truck", body = crate::error::ErrorBody),
        (status = 422, description = "Missing or malformed as_of", body = crate::error::ErrorBody),
    ),
    tag = "fleet"
)]
async fn truck_documents(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(query): Query<DocumentViewQuery>,
) -> Result<Json<Vec<DocumentSnapshot>>, AppError> {
    let as_of = parse_as_of(query.as_of.as_deref())?;
    let id = TruckId::new(id);
    if state.fleet.get_truck(id).is_none() {
        return Err(AppError::NotFound(format!("truck {id} not found")));
    }

    let snapshots = state
        .fleet
        .documents_for(id)
        .into_iter()
        .filter_map(|doc| {
            state
                .fleet
                .get_type(doc.document_type_id)
                .map(|ty| DocumentSnapshot::derive(&doc, &ty.name, as_of))
        })
        .collect();
    Ok(Json(snapshots))
}
