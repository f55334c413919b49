//! # Document-Type Directory API
//!
//! Read-only view of the fleet's document-type directory, including each
//! type's requirement-slug mapping.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use uztruck_fleet::{DocumentType, TypeDirectory};

use crate::state::AppState;

/// Build the document-types router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/document-types", get(list_document_types))
}

/// GET /v1/document-types — the type directory, ordered by id.
#[utoipa::path(
    get,
    path = "/v1/document-types",
    responses(
        (status = 200, description = "Document-type directory, ordered by id"),
    ),
    tag = "fleet"
)]
async fn list_document_types(State(state): State<AppState>) -> Json<Vec<DocumentType>> {
    Json(state.fleet.list_types())
}
