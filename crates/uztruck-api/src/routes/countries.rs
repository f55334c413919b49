//! # Country Directory API
//!
//! Read-only view of the corridor country directory.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use uztruck_catalog::CountryInfo;

use crate::state::AppState;

/// Build the countries router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/countries", get(list_countries))
}

/// GET /v1/countries — the corridor country directory, ordered by code.
#[utoipa::path(
    get,
    path = "/v1/countries",
    responses(
        (status = 200, description = "Country directory, ordered by code"),
    ),
    tag = "catalog"
)]
async fn list_countries(State(state): State<AppState>) -> Json<Vec<CountryInfo>> {
    Json(state.countries.as_ref().clone())
}
