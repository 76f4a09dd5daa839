//! Medical record repository over the `medicalrecords` collection.

use std::sync::Arc;

use async_trait::async_trait;

use super::base::JsonCollection;
use crate::domain::{MedicalRecord, NameKey};
use crate::errors::AppResult;
use crate::infra::document_store::DocumentStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Medical record repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    /// List every medical record
    async fn find_all(&self) -> AppResult<Vec<MedicalRecord>>;

    /// Find a record by (firstName, lastName)
    async fn find_by_name(&self, key: &NameKey) -> AppResult<Option<MedicalRecord>>;

    /// Insert or replace by natural key
    async fn upsert(&self, record: MedicalRecord) -> AppResult<MedicalRecord>;

    /// Delete by natural key (NotFound if absent)
    async fn delete_by_name(&self, key: &NameKey) -> AppResult<()>;
}

/// Concrete implementation of MedicalRecordRepository backed by the JSON document
pub struct MedicalRecordStore {
    records: JsonCollection<MedicalRecord>,
}

impl MedicalRecordStore {
    /// Create new repository instance
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            records: JsonCollection::new(store),
        }
    }
}

#[async_trait]
impl MedicalRecordRepository for MedicalRecordStore {
    async fn find_all(&self) -> AppResult<Vec<MedicalRecord>> {
        self.records.find_all().await
    }

    async fn find_by_name(&self, key: &NameKey) -> AppResult<Option<MedicalRecord>> {
        self.records.find_by_key(key).await
    }

    async fn upsert(&self, record: MedicalRecord) -> AppResult<MedicalRecord> {
        let saved = self.records.upsert(record).await?;
        tracing::debug!("Saved medical record of {} {}", saved.first_name, saved.last_name);
        Ok(saved)
    }

    async fn delete_by_name(&self, key: &NameKey) -> AppResult<()> {
        self.records.delete_by_key(key).await
    }
}
