//! # Fleet Registries
//!
//! Trait seams for truck and document access, plus the in-memory
//! [`FleetStore`] backing both. The store is `parking_lot::RwLock` guarded
//! and cloneable; all operations are synchronous because no lock is ever
//! held across an await point. Trucks and types are read-only after
//! seeding; the document table accepts runtime registration with ids
//! allocated from an in-memory sequence.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use uztruck_core::{DocumentId, DocumentTypeId, TruckId};

use crate::document::{HeldDocument, NewDocument};
use crate::document_type::{DocumentType, TypeDirectory};
use crate::error::FleetError;
use crate::truck::Truck;

/// Read access to the truck register.
pub trait TruckRegistry: Send + Sync {
    /// Look up a truck by id.
    fn get_truck(&self, id: TruckId) -> Option<Truck>;

    /// Every truck, ordered by id.
    fn list_trucks(&self) -> Vec<Truck>;
}

/// Access to the held-document registry.
pub trait DocumentRegistry: Send + Sync {
    /// Look up a document by id.
    fn get_document(&self, id: DocumentId) -> Option<HeldDocument>;

    /// Every document on file for the given truck, ordered by id.
    fn documents_for(&self, truck_id: TruckId) -> Vec<HeldDocument>;

    /// Every document on file, ordered by id.
    fn list_documents(&self) -> Vec<HeldDocument>;

    /// Register a new document, allocating its id.
    ///
    /// # Errors
    ///
    /// Fails with [`FleetError::UnknownTruck`] or
    /// [`FleetError::UnknownDocumentType`] when the referenced truck or
    /// type does not exist; an orphaned document would never surface in
    /// any evaluation.
    fn register(&self, document: NewDocument) -> Result<HeldDocument, FleetError>;
}

#[derive(Debug)]
struct FleetInner {
    trucks: HashMap<TruckId, Truck>,
    types: HashMap<DocumentTypeId, DocumentType>,
    documents: HashMap<DocumentId, HeldDocument>,
    next_document_id: u32,
}

/// Thread-safe in-memory fleet store.
///
/// One lock over the whole fleet: the tables are small reference data and
/// registration must see a consistent view of trucks and types anyway.
#[derive(Debug, Clone)]
pub struct FleetStore {
    inner: Arc<RwLock<FleetInner>>,
}

impl FleetStore {
    /// Build a store from seeded tables. The document id sequence starts
    /// one past the highest seeded id.
    pub fn new(
        trucks: Vec<Truck>,
        types: Vec<DocumentType>,
        documents: Vec<HeldDocument>,
    ) -> Self {
        let next_document_id = documents.iter().map(|d| d.id.as_u32()).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(FleetInner {
                trucks: trucks.into_iter().map(|t| (t.id, t)).collect(),
                types: types.into_iter().map(|t| (t.id, t)).collect(),
                documents: documents.into_iter().map(|d| (d.id, d)).collect(),
                next_document_id,
            })),
        }
    }

    /// The seeded reference fleet (five trucks, ten types, six documents).
    pub fn seeded() -> Self {
        Self::new(
            crate::seed::reference_trucks(),
            crate::seed::reference_document_types(),
            crate::seed::reference_documents(),
        )
    }

    /// Number of trucks in the register.
    pub fn truck_count(&self) -> usize {
        self.inner.read().trucks.len()
    }

    /// Number of documents on file.
    pub fn document_count(&self) -> usize {
        self.inner.read().documents.len()
    }

    /// Number of document-type directory entries.
    pub fn type_count(&self) -> usize {
        self.inner.read().types.len()
    }
}

impl TruckRegistry for FleetStore {
    fn get_truck(&self, id: TruckId) -> Option<Truck> {
        self.inner.read().trucks.get(&id).cloned()
    }

    fn list_trucks(&self) -> Vec<Truck> {
        let mut trucks: Vec<Truck> = self.inner.read().trucks.values().cloned().collect();
        trucks.sort_by_key(|t| t.id);
        trucks
    }
}

impl DocumentRegistry for FleetStore {
    fn get_document(&self, id: DocumentId) -> Option<HeldDocument> {
        self.inner.read().documents.get(&id).cloned()
    }

    fn documents_for(&self, truck_id: TruckId) -> Vec<HeldDocument> {
        let mut docs: Vec<HeldDocument> = self
            .inner
            .read()
            .documents
            .values()
            .filter(|d| d.truck_id == truck_id)
            .cloned()
            .collect();
        docs.sort_by_key(|d| d.id);
        docs
    }

    fn list_documents(&self) -> Vec<HeldDocument> {
        let mut docs: Vec<HeldDocument> = self.inner.read().documents.values().cloned().collect();
        docs.sort_by_key(|d| d.id);
        docs
    }

    fn register(&self, document: NewDocument) -> Result<HeldDocument, FleetError> {
        let mut inner = self.inner.write();
        if !inner.trucks.contains_key(&document.truck_id) {
            return Err(FleetError::UnknownTruck {
                truck_id: document.truck_id,
            });
        }
        if !inner.types.contains_key(&document.document_type_id) {
            return Err(FleetError::UnknownDocumentType {
                type_id: document.document_type_id,
            });
        }

        let id = DocumentId::new(inner.next_document_id);
        inner.next_document_id += 1;
        let held = HeldDocument {
            id,
            truck_id: document.truck_id,
            document_type_id: document.document_type_id,
            document_number: document.document_number,
            issue_date: document.issue_date,
            expiry_date: document.expiry_date,
            issuing_authority: document.issuing_authority,
        };
        inner.documents.insert(id, held.clone());
        Ok(held)
    }
}

impl TypeDirectory for FleetStore {
    fn get_type(&self, id: DocumentTypeId) -> Option<DocumentType> {
        self.inner.read().types.get(&id).cloned()
    }

    fn list_types(&self) -> Vec<DocumentType> {
        let mut types: Vec<DocumentType> = self.inner.read().types.values().cloned().collect();
        types.sort_by_key(|t| t.id);
        types
    }
}
