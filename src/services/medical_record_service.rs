//! Medical record service - Handles birthdates, medications and allergies.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{AgeClassifier, MedicalRecord, NameKey};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::MedicalRecordRepository;

/// Medical record service trait for dependency injection.
#[async_trait]
pub trait MedicalRecordService: Send + Sync {
    /// Get a record by name (NotFound if absent)
    async fn get_record(&self, first_name: &str, last_name: &str) -> AppResult<MedicalRecord>;

    /// List every record
    async fn list_records(&self) -> AppResult<Vec<MedicalRecord>>;

    /// Save a record, replacing any existing one with the same name
    async fn save_record(&self, record: MedicalRecord) -> AppResult<MedicalRecord>;

    /// Replace an existing record (NotFound if absent)
    async fn update_record(&self, record: MedicalRecord) -> AppResult<MedicalRecord>;

    /// Delete a record by name (NotFound if absent)
    async fn delete_record(&self, first_name: &str, last_name: &str) -> AppResult<()>;
}

/// Concrete implementation of MedicalRecordService using repository.
pub struct MedicalRecordManager {
    repo: Arc<dyn MedicalRecordRepository>,
    ages: AgeClassifier,
}

impl MedicalRecordManager {
    /// Create new medical record service; `ages` supplies "today" for birthdate checks
    pub fn new(repo: Arc<dyn MedicalRecordRepository>, ages: AgeClassifier) -> Self {
        Self { repo, ages }
    }

    fn check(&self, record: &MedicalRecord) -> AppResult<()> {
        record.validate()?;
        NameKey::parse(&record.first_name, &record.last_name)?;
        // rejects a missing or future birthdate
        self.ages.age(record.birthdate)?;
        Ok(())
    }
}

#[async_trait]
impl MedicalRecordService for MedicalRecordManager {
    async fn get_record(&self, first_name: &str, last_name: &str) -> AppResult<MedicalRecord> {
        let key = NameKey::parse(first_name, last_name)?;
        self.repo
            .find_by_name(&key)
            .await?
            .ok_or_not_found(format!(
                "Medical record of {} {} was not found.",
                first_name, last_name
            ))
    }

    async fn list_records(&self) -> AppResult<Vec<MedicalRecord>> {
        self.repo.find_all().await
    }

    async fn save_record(&self, record: MedicalRecord) -> AppResult<MedicalRecord> {
        self.check(&record)?;
        let saved = self.repo.upsert(record).await?;
        tracing::info!("Saved medical record of {} {}", saved.first_name, saved.last_name);
        Ok(saved)
    }

    async fn update_record(&self, record: MedicalRecord) -> AppResult<MedicalRecord> {
        self.check(&record)?;
        let key = NameKey::parse(&record.first_name, &record.last_name)?;
        if self.repo.find_by_name(&key).await?.is_none() {
            tracing::error!(
                "Medical record of {} {} does not exist",
                record.first_name,
                record.last_name
            );
            return Err(AppError::not_found(format!(
                "Medical record of {} {} does not exist.",
                record.first_name, record.last_name
            )));
        }
        let saved = self.repo.upsert(record).await?;
        tracing::info!("Updated medical record of {} {}", saved.first_name, saved.last_name);
        Ok(saved)
    }

    async fn delete_record(&self, first_name: &str, last_name: &str) -> AppResult<()> {
        let key = NameKey::parse(first_name, last_name)?;
        self.repo.delete_by_name(&key).await?;
        tracing::info!("Deleted medical record of {} {}", first_name, last_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;
    use crate::infra::MockMedicalRecordRepository;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn manager(repo: MockMedicalRecordRepository) -> MedicalRecordManager {
        let ages = AgeClassifier::new(Arc::new(FixedClock(date(2022, 6, 13))));
        MedicalRecordManager::new(Arc::new(repo), ages)
    }

    fn record(birthdate: Option<NaiveDate>) -> MedicalRecord {
        MedicalRecord {
            first_name: "John".into(),
            last_name: "Boyd".into(),
            birthdate,
            medications: vec!["aznol:350mg".into(), "hydrapermazol:100mg".into()],
            allergies: vec!["nillacilan".into()],
        }
    }

    #[tokio::test]
    async fn test_save_rejects_future_birthdate() {
        let mut repo = MockMedicalRecordRepository::new();
        repo.expect_upsert().never();

        let result = manager(repo).save_record(record(Some(date(2025, 12, 25)))).await;

        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }

    #[tokio::test]
    async fn test_save_rejects_missing_birthdate() {
        let mut repo = MockMedicalRecordRepository::new();
        repo.expect_upsert().never();

        let result = manager(repo).save_record(record(None)).await;

        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }

    #[tokio::test]
    async fn test_save_rejects_whitespace_name() {
        let mut repo = MockMedicalRecordRepository::new();
        repo.expect_upsert().never();

        let mut blank = record(Some(date(1984, 3, 6)));
        blank.last_name = "  ".into();
        let result = manager(repo).save_record(blank).await;

        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }

    #[tokio::test]
    async fn test_save_valid_record() {
        let mut repo = MockMedicalRecordRepository::new();
        repo.expect_upsert().times(1).returning(Ok);

        let saved = manager(repo)
            .save_record(record(Some(date(1984, 3, 6))))
            .await
            .unwrap();

        assert_eq!(saved.allergies, vec!["nillacilan".to_string()]);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let mut repo = MockMedicalRecordRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_upsert().never();

        let result = manager(repo)
            .update_record(record(Some(date(1984, 3, 6))))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_blank_name_is_invalid() {
        let repo = MockMedicalRecordRepository::new();

        let result = manager(repo).get_record("", "Boyd").await;

        assert!(matches!(result, Err(AppError::InvalidValue(_))));
    }
}
