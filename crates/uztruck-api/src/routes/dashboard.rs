//! # Dashboard Statistics API
//!
//! Fleet-wide totals for the operator dashboard, computed per request.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use uztruck_fleet::{fleet_stats, DashboardStats};

use crate::error::AppError;
use crate::routes::parse_as_of;
use crate::state::AppState;

/// Query parameters for the dashboard view.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct DashboardQuery {
    /// Evaluation date, `YYYY-MM-DD`.
    pub as_of: Option<String>,
}

/// Build the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/dashboard/stats", get(stats))
}

/// GET /v1/dashboard/stats?as_of= — computed fleet totals.
#[utoipa::path(
    get,
    path = "/v1/dashboard/stats",
    params(
        ("as_of" = String, Query, description = "Evaluation date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Dashboard statistics"),
        (status = 422, description = "Missing or malformed as_of", body = crate::error::ErrorBody),
    ),
    tag = "dashboard"
)]
async fn stats(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let as_of = parse_as_of(query.as_of.as_deref())?;
    Ok(Json(fleet_stats(&state.fleet, &state.fleet, as_of)))
}
