//! # Deficiency Check API
//!
//! The front door to the evaluator: one POST with a truck, a country
//! selection and an explicit evaluation date.

use std::collections::BTreeSet;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use uztruck_core::{parse_date, CountryCode, TruckId};
use uztruck_deficiency::DeficiencyReport;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request for a deficiency check.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeficiencyCheckRequest {
    /// The truck to evaluate.
    pub truck_id: u32,
    /// Destination country codes. Duplicates collapse into a set.
    pub countries: Vec<String>,
    /// Evaluation date, `YYYY-MM-DD`.
    pub as_of: String,
}

impl Validate for DeficiencyCheckRequest {
    fn validate(&self) -> Result<(), String> {
        parse_date(&self.as_of).map_err(|e| e.to_string())?;
        for code in &self.countries {
            CountryCode::new(code.clone()).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl DeficiencyCheckRequest {
    /// The selection as a typed set. Call after `validate`.
    fn country_set(&self) -> Result<BTreeSet<CountryCode>, AppError> {
        self.countries
            .iter()
            .map(|code| CountryCode::new(code.clone()).map_err(AppError::from))
            .collect()
    }
}

/// Build the deficiency router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/deficiency/check", post(check))
}

/// POST /v1/deficiency/check — evaluate a truck against a selection.
#[utoipa::path(
    post,
    path = "/v1/deficiency/check",
    request_body = DeficiencyCheckRequest,
    responses(
        (status = 200, description = "Deficiency report"),
        (status = 404, description = "Unknown truck", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid request", body = crate::error::ErrorBody),
    ),
    tag = "deficiency"
)]
async fn check(
    State(state): State<AppState>,
    body: Result<Json<DeficiencyCheckRequest>, JsonRejection>,
) -> Result<Json<DeficiencyReport>, AppError> {
    let req = extract_validated_json(body)?;
    let countries = req.country_set()?;
    let as_of = parse_date(&req.as_of)?;
    let report = state
        .evaluator
        .evaluate(TruckId::new(req.truck_id), &countries, as_of)?;
    Ok(Json(report))
}
