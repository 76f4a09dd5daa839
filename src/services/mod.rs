//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, so every
//! service can be exercised against mocks.

mod alert_service;
pub mod container;
mod firestation_service;
mod medical_record_service;
mod person_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use alert_service::{AlertEngine, AlertService};
pub use firestation_service::{FirestationManager, FirestationService};
pub use medical_record_service::{MedicalRecordManager, MedicalRecordService};
pub use person_service::{PersonManager, PersonService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
