//! Service Container - Centralized service access.
//!
//! Wires the document store, the repositories and the services together
//! so that commands only depend on service traits.

use std::sync::Arc;

use super::{
    AlertEngine, AlertService, FirestationManager, FirestationService, MedicalRecordManager,
    MedicalRecordService, PersonManager, PersonService,
};
use crate::config::Config;
use crate::domain::{AgeClassifier, Clock, SystemClock};
use crate::infra::{DocumentStore, FirestationStore, MedicalRecordStore, PersonStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get person service
    fn persons(&self) -> Arc<dyn PersonService>;

    /// Get fire station service
    fn firestations(&self) -> Arc<dyn FirestationService>;

    /// Get medical record service
    fn medical_records(&self) -> Arc<dyn MedicalRecordService>;

    /// Get alert service
    fn alerts(&self) -> Arc<dyn AlertService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    person_service: Arc<dyn PersonService>,
    firestation_service: Arc<dyn FirestationService>,
    medical_record_service: Arc<dyn MedicalRecordService>,
    alert_service: Arc<dyn AlertService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        person_service: Arc<dyn PersonService>,
        firestation_service: Arc<dyn FirestationService>,
        medical_record_service: Arc<dyn MedicalRecordService>,
        alert_service: Arc<dyn AlertService>,
    ) -> Self {
        Self {
            person_service,
            firestation_service,
            medical_record_service,
            alert_service,
        }
    }

    /// Create service container over one document store and clock
    pub fn with_store(store: Arc<DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        let persons = Arc::new(PersonStore::new(store.clone()));
        let firestations = Arc::new(FirestationStore::new(store.clone()));
        let medical_records = Arc::new(MedicalRecordStore::new(store));
        let ages = AgeClassifier::new(clock);

        Self {
            person_service: Arc::new(PersonManager::new(persons.clone())),
            firestation_service: Arc::new(FirestationManager::new(firestations.clone())),
            medical_record_service: Arc::new(MedicalRecordManager::new(
                medical_records.clone(),
                ages.clone(),
            )),
            alert_service: Arc::new(AlertEngine::new(persons, firestations, medical_records, ages)),
        }
    }

    /// Create service container from config, using the system clock
    pub fn from_config(config: &Config) -> Self {
        tracing::debug!("Using data document {}", config.data_path.display());
        let store = Arc::new(DocumentStore::new(config.data_path.clone()));
        Self::with_store(store, Arc::new(SystemClock))
    }
}

impl ServiceContainer for Services {
    fn persons(&self) -> Arc<dyn PersonService> {
        self.person_service.clone()
    }

    fn firestations(&self) -> Arc<dyn FirestationService> {
        self.firestation_service.clone()
    }

    fn medical_records(&self) -> Arc<dyn MedicalRecordService> {
        self.medical_record_service.clone()
    }

    fn alerts(&self) -> Arc<dyn AlertService> {
        self.alert_service.clone()
    }
}
