//! # Expiry Alerts API
//!
//! Fleet-wide expiry alerts, computed on demand for an explicit date.
//! Alerts are views, not stored notifications.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use uztruck_fleet::{expiry_alerts, ExpiryAlert, DEFAULT_ALERT_WINDOW_DAYS};

use crate::error::AppError;
use crate::routes::parse_as_of;
use crate::state::AppState;

/// Query parameters for the alerts view.
#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct AlertQuery {
    /// Evaluation date, `YYYY-MM-DD`.
    pub as_of: Option<String>,
    /// Look-ahead window in days (default 30). Expired documents are
    /// always included regardless of the window.
    pub within: Option<i64>,
}

/// Build the alerts router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/alerts", get(list_alerts))
}

/// GET /v1/alerts?as_of=&within= — expiry alerts, most urgent first.
#[utoipa::path(
    get,
    path = "/v1/alerts",
    params(
        ("as_of" = String, Query, description = "Evaluation date, YYYY-MM-DD"),
        ("within" = Option<i64>, Query, description = "Look-ahead window in days (default 30)"),
    ),
    responses(
        (status = 200, description = "Alerts ordered by days until expiry"),
        (status = 422, description = "Missing or malformed parameters", body = crate::error::ErrorBody),
    ),
    tag = "alerts"
)]
async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Result<Json<Vec<ExpiryAlert>>, AppError> {
    let as_of = parse_as_of(query.as_of.as_deref())?;
    let within = query.within.unwrap_or(DEFAULT_ALERT_WINDOW_DAYS);
    if within < 0 {
        return Err(AppError::Validation(
            "within must not be negative".to_string(),
        ));
    }
    Ok(Json(expiry_alerts(
        &state.fleet,
        &state.fleet,
        &state.fleet,
        as_of,
        within,
    )))
}
