//! Fire station service - Handles address → station mappings.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{AddressKey, Firestation};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::FirestationRepository;

/// Fire station service trait for dependency injection.
#[async_trait]
pub trait FirestationService: Send + Sync {
    /// List every address mapping
    async fn list_firestations(&self) -> AppResult<Vec<Firestation>>;

    /// List the address mappings of one station
    async fn get_station(&self, station: u32) -> AppResult<Vec<Firestation>>;

    /// Get the mapping covering an address (NotFound if absent)
    async fn get_by_address(&self, address: &str) -> AppResult<Firestation>;

    /// Save a mapping, replacing any existing one for the address
    async fn save_firestation(&self, firestation: Firestation) -> AppResult<Firestation>;

    /// Replace an existing mapping (NotFound if the address is not covered)
    async fn update_firestation(&self, firestation: Firestation) -> AppResult<Firestation>;

    /// Delete the mapping of an address
    async fn delete_by_address(&self, address: &str) -> AppResult<()>;

    /// Delete every mapping of a station
    async fn delete_by_station(&self, station: u32) -> AppResult<usize>;
}

/// Concrete implementation of FirestationService using repository.
pub struct FirestationManager {
    repo: Arc<dyn FirestationRepository>,
}

impl FirestationManager {
    /// Create new fire station service instance with repository
    pub fn new(repo: Arc<dyn FirestationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FirestationService for FirestationManager {
    async fn list_firestations(&self) -> AppResult<Vec<Firestation>> {
        self.repo.find_all().await
    }

    async fn get_station(&self, station: u32) -> AppResult<Vec<Firestation>> {
        self.repo.find_by_station(station).await
    }

    async fn get_by_address(&self, address: &str) -> AppResult<Firestation> {
        AddressKey::parse(address)?;
        self.repo
            .find_by_address(address)
            .await?
            .ok_or_not_found(format!("There is no fire station at the following address: {}.", address))
    }

    async fn save_firestation(&self, firestation: Firestation) -> AppResult<Firestation> {
        firestation.validate()?;
        AddressKey::parse(&firestation.address)?;
        let saved = self.repo.upsert(firestation).await?;
        tracing::info!("Saved fire station n°{} for {}", saved.station, saved.address);
        Ok(saved)
    }

    async fn update_firestation(&self, firestation: Firestation) -> AppResult<Firestation> {
        firestation.validate()?;
        AddressKey::parse(&firestation.address)?;
        if self.repo.find_by_address(&firestation.address).await?.is_none() {
            tracing::error!("No fire station covers {}", firestation.address);
            return Err(AppError::not_found(format!(
                "There is no fire station at the following address: {}.",
                firestation.address
            )));
        }
        self.save_firestation(firestation).await
    }

    async fn delete_by_address(&self, address: &str) -> AppResult<()> {
        AddressKey::parse(address)?;
        self.repo.delete_by_address(address).await?;
        tracing::info!("Deleted fire station mapping for {}", address);
        Ok(())
    }

    async fn delete_by_station(&self, station: u32) -> AppResult<usize> {
        let removed = self.repo.delete_by_station(station).await?;
        tracing::info!("Deleted fire station n°{} ({} addresses)", station, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockFirestationRepository;

    #[tokio::test]
    async fn test_save_rejects_non_positive_station() {
        let mut repo = MockFirestationRepository::new();
        repo.expect_upsert().never();

        let service = FirestationManager::new(Arc::new(repo));
        let result = service.save_firestation(Firestation::new("1509 Culver St", 0)).await;

        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }

    #[tokio::test]
    async fn test_save_rejects_whitespace_address() {
        let mut repo = MockFirestationRepository::new();
        repo.expect_upsert().never();

        let service = FirestationManager::new(Arc::new(repo));
        let result = service.save_firestation(Firestation::new("   ", 3)).await;

        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }

    #[tokio::test]
    async fn test_update_uncovered_address_is_not_found() {
        let mut repo = MockFirestationRepository::new();
        repo.expect_find_by_address().returning(|_| Ok(None));
        repo.expect_upsert().never();

        let service = FirestationManager::new(Arc::new(repo));
        let result = service
            .update_firestation(Firestation::new("1 Nowhere Rd", 2))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_reassigns_station() {
        let mut repo = MockFirestationRepository::new();
        repo.expect_find_by_address()
            .returning(|address| Ok(Some(Firestation::new(address, 3))));
        repo.expect_upsert().times(1).returning(Ok);

        let service = FirestationManager::new(Arc::new(repo));
        let saved = service
            .update_firestation(Firestation::new("1509 Culver St", 2))
            .await
            .unwrap();

        assert_eq!(saved.station, 2);
    }

    #[tokio::test]
    async fn test_delete_empty_station_is_not_found() {
        let mut repo = MockFirestationRepository::new();
        repo.expect_delete_by_station()
            .returning(|n| Err(AppError::not_found(format!("There is no fire station with station number {}.", n))));

        let service = FirestationManager::new(Arc::new(repo));
        let result = service.delete_by_station(42).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_by_blank_address_is_invalid() {
        let repo = MockFirestationRepository::new();
        let service = FirestationManager::new(Arc::new(repo));

        let result = service.get_by_address("  ").await;

        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }
}
