//! Infrastructure layer - External systems integration
//!
//! This module handles all persistence concerns:
//! - The JSON document store (the only disk I/O)
//! - Natural-key repositories over its collections

pub mod document_store;
pub mod repositories;

pub use document_store::{Document, DocumentStore};
pub use repositories::{
    FirestationRepository, FirestationStore, MedicalRecordRepository, MedicalRecordStore,
    PersonRepository, PersonStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockFirestationRepository, MockMedicalRecordRepository, MockPersonRepository};
