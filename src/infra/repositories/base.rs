//! Generic natural-key collection over the JSON document.
//!
//! Every entity repository is a thin, typed facade over [`JsonCollection`].
//! Reads re-parse the persisted document each time; writes go through
//! [`DocumentStore::modify`] so each one is a full load/save cycle.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{FIRESTATIONS_COLLECTION, MEDICAL_RECORDS_COLLECTION, PERSONS_COLLECTION};
use crate::domain::{Firestation, Keyed, MedicalRecord, Person};
use crate::errors::{AppError, AppResult};
use crate::infra::document_store::DocumentStore;

/// A keyed entity persisted in one named collection.
pub trait Record: Keyed + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Name of the top-level collection
    const COLLECTION: &'static str;
    /// Human-readable entity name for messages
    const KIND: &'static str;
}

impl Record for Person {
    const COLLECTION: &'static str = PERSONS_COLLECTION;
    const KIND: &'static str = "person";
}

impl Record for Firestation {
    const COLLECTION: &'static str = FIRESTATIONS_COLLECTION;
    const KIND: &'static str = "fire station";
}

impl Record for MedicalRecord {
    const COLLECTION: &'static str = MEDICAL_RECORDS_COLLECTION;
    const KIND: &'static str = "medical record";
}

/// Typed access to one collection of the document.
pub struct JsonCollection<T: Record> {
    store: Arc<DocumentStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonCollection<T> {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// All records, in document order
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        self.store.load().await.records(T::COLLECTION)
    }

    /// Records matching a predicate, in document order
    pub async fn find_where<P>(&self, predicate: P) -> AppResult<Vec<T>>
    where
        P: Fn(&T) -> bool + Send,
    {
        let records = self.find_all().await?;
        Ok(records.into_iter().filter(|r| predicate(r)).collect())
    }

    /// First record carrying the key
    pub async fn find_by_key(&self, key: &T::Key) -> AppResult<Option<T>> {
        let found = self.find_all().await?.into_iter().find(|r| &r.key() == key);
        tracing::debug!("Lookup {} {}: found={}", T::KIND, key, found.is_some());
        Ok(found)
    }

    /// Replace any record with the same key, then append `record`.
    pub async fn upsert(&self, record: T) -> AppResult<T> {
        let key = record.key();
        let saved = record.clone();

        self.store
            .modify(move |document| {
                let mut records: Vec<T> = document.records(T::COLLECTION)?;
                let before = records.len();
                records.retain(|r| r.key() != key);
                if records.len() < before {
                    tracing::debug!("Replacing existing {} {}", T::KIND, key);
                }
                records.push(record);
                document.replace_records(T::COLLECTION, &records)
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to save {}: {}", T::KIND, e);
                e
            })?;

        Ok(saved)
    }

    /// Remove every record matching `predicate` and return how many went.
    ///
    /// Fails with NotFound (and writes nothing) when no record matched.
    pub async fn delete_where<P>(&self, predicate: P, what: String) -> AppResult<usize>
    where
        P: Fn(&T) -> bool + Send,
    {
        self.store
            .modify(move |document| {
                let mut records: Vec<T> = document.records(T::COLLECTION)?;
                let before = records.len();
                records.retain(|r| !predicate(r));
                let removed = before - records.len();
                if removed == 0 {
                    return Err(AppError::NotFound(what));
                }
                document.replace_records(T::COLLECTION, &records)?;
                Ok(removed)
            })
            .await
    }

    /// Remove the record carrying the key
    pub async fn delete_by_key(&self, key: &T::Key) -> AppResult<()> {
        let target = key.clone();
        let what = format!("The {} {} does not exist.", T::KIND, key);
        self.delete_where(move |r| r.key() == target, what).await?;
        tracing::debug!("Deleted {} {}", T::KIND, key);
        Ok(())
    }
}

impl<T: Record> Clone for JsonCollection<T> {
    fn clone(&self) -> Self {
        Self::new(self.store.clone())
    }
}
