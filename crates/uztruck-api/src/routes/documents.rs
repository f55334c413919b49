//! # Document Registration and Field Validation API
//!
//! The one mutating endpoint of the service (document registration) plus
//! the rules-engine endpoint operators call before submitting paperwork.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use uztruck_catalog::ValidationReport;
use uztruck_core::{parse_date, DocumentTypeId, TruckId};
use uztruck_fleet::{DocumentRegistry, HeldDocument, NewDocument};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request to register a document for a truck.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterDocumentRequest {
    /// The truck the document belongs to.
    pub truck_id: u32,
    /// Directory id of the document's type.
    pub document_type_id: u32,
    /// Serial number printed on the paper.
    pub document_number: String,
    /// Issue date, `YYYY-MM-DD`.
    pub issue_date: String,
    /// Expiry date, `YYYY-MM-DD`.
    pub expiry_date: String,
    /// Authority that issued the paper.
    pub issuing_authority: String,
}

impl Validate for RegisterDocumentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.document_number.trim().is_empty() {
            return Err("document_number must not be empty".to_string());
        }
        if self.issuing_authority.trim().is_empty() {
            return Err("issuing_authority must not be empty".to_string());
        }
        let issued = parse_date(&self.issue_date).map_err(|e| e.to_string())?;
        let expires = parse_date(&self.expiry_date).map_err(|e| e.to_string())?;
        if issued >= expires {
            return Err("issue_date must precede expiry_date".to_string());
        }
        Ok(())
    }
}

/// Request to run the field-validation rules for a requirement slug.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateDocumentRequest {
    /// Requirement slug, e.g. `"glonass_license"`.
    pub document_type: String,
    /// Submitted field values.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Validate for ValidateDocumentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.document_type.trim().is_empty() {
            return Err("document_type must not be empty".to_string());
        }
        Ok(())
    }
}

/// Build the documents router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/documents", post(register_document))
        .route("/v1/documents/validate", post(validate_document))
}

/// POST /v1/documents — register a document, allocating its id.
#[utoipa::path(
    post,
    path = "/v1/documents",
    request_body = RegisterDocumentRequest,
    responses(
        (status = 201, description = "Document registered"),
        (status = 422, description = "Invalid request", body = crate::error::ErrorBody),
    ),
    tag = "documents"
)]
async fn register_document(
    State(state): State<AppState>,
    body: Result<Json<RegisterDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HeldDocument>), AppError> {
    let req = extract_validated_json(body)?;

    let new_document = NewDocument {
        truck_id: TruckId::new(req.truck_id),
        document_type_id: DocumentTypeId::new(req.document_type_id),
        document_number: req.document_number,
        issue_date: parse_date(&req.issue_date)?,
        expiry_date: parse_date(&req.expiry_date)?,
        issuing_authority: req.issuing_authority,
    };

    let held = state.fleet.register(new_document)?;
    tracing::info!(document_id = %held.id, truck_id = %held.truck_id, "document registered");
    Ok((StatusCode::CREATED, Json(held)))
}

/// POST /v1/documents/validate — run a slug's field rules.
///
/// A slug with no registered rules validates trivially; the rule table
/// gates known document types, it does not reject unknown ones.
#[utoipa::path(
    post,
    path = "/v1/documents/validate",
    request_body = ValidateDocumentRequest,
    responses(
        (status = 200, description = "Validation report"),
        (status = 422, description = "Invalid request", body = crate::error::ErrorBody),
    ),
    tag = "documents"
)]
async fn validate_document(
    State(state): State<AppState>,
    body: Result<Json<ValidateDocumentRequest>, JsonRejection>,
) -> Result<Json<ValidationReport>, AppError> {
    let req = extract_validated_json(body)?;
    Ok(Json(state.rules.validate(&req.document_type, &req.fields)))
}
