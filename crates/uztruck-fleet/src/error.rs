//! # Fleet Errors
//!
//! Structured errors for the one mutating fleet operation, document
//! registration. Lookup misses on read paths are `Option` returns;
//! registration fails loudly when it references a truck or type that does
//! not exist, because accepting the document would orphan it.

use thiserror::Error;

use uztruck_core::{DocumentTypeId, TruckId};

/// Errors raised by fleet registry operations.
#[derive(Error, Debug)]
pub enum FleetError {
    /// Registration referenced a truck that is not in the register.
    #[error("unknown truck id {truck_id}")]
    UnknownTruck {
        /// The id that failed to resolve.
        truck_id: TruckId,
    },

    /// Registration referenced a document type that is not in the directory.
    #[error("unknown document type id {type_id}")]
    UnknownDocumentType {
        /// The id that failed to resolve.
        type_id: DocumentTypeId,
    },
}
