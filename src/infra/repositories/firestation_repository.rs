//! Fire station repository over the `firestations` collection.

use std::sync::Arc;

use async_trait::async_trait;

use super::base::JsonCollection;
use crate::domain::{AddressKey, Firestation};
use crate::errors::AppResult;
use crate::infra::document_store::DocumentStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fire station repository trait for dependency injection.
///
/// Address is the natural key: at most one mapping exists per address.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FirestationRepository: Send + Sync {
    /// List every address mapping
    async fn find_all(&self) -> AppResult<Vec<Firestation>>;

    /// Find the mapping covering an address
    async fn find_by_address(&self, address: &str) -> AppResult<Option<Firestation>>;

    /// Find every address mapping of a station
    async fn find_by_station(&self, station: u32) -> AppResult<Vec<Firestation>>;

    /// Insert or replace by address
    async fn upsert(&self, firestation: Firestation) -> AppResult<Firestation>;

    /// Delete the mapping of an address (NotFound if absent)
    async fn delete_by_address(&self, address: &str) -> AppResult<()>;

    /// Delete every mapping of a station, returning how many went
    /// (NotFound if the station covers nothing)
    async fn delete_by_station(&self, station: u32) -> AppResult<usize>;
}

/// Concrete implementation of FirestationRepository backed by the JSON document
pub struct FirestationStore {
    firestations: JsonCollection<Firestation>,
}

impl FirestationStore {
    /// Create new repository instance
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            firestations: JsonCollection::new(store),
        }
    }
}

#[async_trait]
impl FirestationRepository for FirestationStore {
    async fn find_all(&self) -> AppResult<Vec<Firestation>> {
        self.firestations.find_all().await
    }

    async fn find_by_address(&self, address: &str) -> AppResult<Option<Firestation>> {
        self.firestations.find_by_key(&AddressKey::new(address)).await
    }

    async fn find_by_station(&self, station: u32) -> AppResult<Vec<Firestation>> {
        self.firestations.find_where(|f| f.station == station).await
    }

    async fn upsert(&self, firestation: Firestation) -> AppResult<Firestation> {
        let saved = self.firestations.upsert(firestation).await?;
        tracing::debug!("Saved fire station n°{} for {}", saved.station, saved.address);
        Ok(saved)
    }

    async fn delete_by_address(&self, address: &str) -> AppResult<()> {
        self.firestations.delete_by_key(&AddressKey::new(address)).await
    }

    async fn delete_by_station(&self, station: u32) -> AppResult<usize> {
        let removed = self
            .firestations
            .delete_where(
                move |f| f.station == station,
                format!("There is no fire station with station number {}.", station),
            )
            .await?;
        tracing::debug!("Deleted fire station n°{} ({} addresses)", station, removed);
        Ok(removed)
    }
}
