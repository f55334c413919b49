//! # Evaluator Errors
//!
//! The evaluator can fail in exactly two ways: the truck does not exist,
//! or the country selection exceeds the supported window. Everything else
//! is a total computation over typed data — malformed dates cannot reach
//! this crate because every boundary parses into `chrono::NaiveDate`
//! before calling in.

use thiserror::Error;

use uztruck_core::TruckId;

/// Errors raised by a deficiency evaluation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeficiencyError {
    /// The requested truck is not in the register.
    ///
    /// The original system silently produced no report for an unknown
    /// vehicle; a hard failure is the corrected behavior.
    #[error("truck {truck_id} not found")]
    TruckNotFound {
        /// The id that failed to resolve.
        truck_id: TruckId,
    },

    /// The country selection is larger than the supported window.
    #[error("selection of {given} countries exceeds the maximum of {max}")]
    TooManyCountries {
        /// Number of countries requested.
        given: usize,
        /// Largest supported selection.
        max: usize,
    },
}
