//! Repository layer - Data access abstraction
//!
//! Repositories provide natural-key CRUD over the collections of the JSON
//! document, following the Repository pattern for clean separation of
//! concerns.

mod base;
mod firestation_repository;
mod medical_record_repository;
mod person_repository;

pub use base::{JsonCollection, Record};
pub use firestation_repository::{FirestationRepository, FirestationStore};
pub use medical_record_repository::{MedicalRecordRepository, MedicalRecordStore};
pub use person_repository::{PersonRepository, PersonStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use firestation_repository::MockFirestationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use medical_record_repository::MockMedicalRecordRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use person_repository::MockPersonRepository;
