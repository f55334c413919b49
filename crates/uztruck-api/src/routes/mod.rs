//! # HTTP Route Modules
//!
//! One module per API surface. Every status-deriving endpoint takes an
//! explicit `as_of` date; the service never reads the wall clock on
//! behalf of a client.

pub mod alerts;
pub mod countries;
pub mod dashboard;
pub mod deficiency;
pub mod document_types;
pub mod documents;
pub mod eurasian;
pub mod requirements;
pub mod trucks;

use chrono::NaiveDate;

use crate::error::AppError;

/// Parse a required `as_of` query value into a calendar date.
pub(crate) fn parse_as_of(param: Option<&str>) -> Result<NaiveDate, AppError> {
    let value = param.ok_or_else(|| {
        AppError::Validation("as_of query parameter is required (YYYY-MM-DD)".to_string())
    })?;
    Ok(uztruck_core::parse_date(value)?)
}
