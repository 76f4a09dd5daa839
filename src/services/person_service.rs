//! Person service - Handles resident CRUD.
//!
//! Create and update share the repository's upsert primitive; update
//! additionally requires the person to exist.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{NameKey, Person};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::PersonRepository;

/// Person service trait for dependency injection.
#[async_trait]
pub trait PersonService: Send + Sync {
    /// Get person by name (NotFound if absent)
    async fn get_person(&self, first_name: &str, last_name: &str) -> AppResult<Person>;

    /// List every person
    async fn list_persons(&self) -> AppResult<Vec<Person>>;

    /// Save a person, replacing any existing one with the same name
    async fn save_person(&self, person: Person) -> AppResult<Person>;

    /// Replace an existing person (NotFound if absent)
    async fn update_person(&self, person: Person) -> AppResult<Person>;

    /// Delete person by name (NotFound if absent)
    async fn delete_person(&self, first_name: &str, last_name: &str) -> AppResult<()>;
}

/// Concrete implementation of PersonService using repository.
pub struct PersonManager {
    repo: Arc<dyn PersonRepository>,
}

impl PersonManager {
    /// Create new person service instance with repository
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PersonService for PersonManager {
    async fn get_person(&self, first_name: &str, last_name: &str) -> AppResult<Person> {
        let key = NameKey::parse(first_name, last_name)?;
        self.repo
            .find_by_name(&key)
            .await?
            .ok_or_not_found(format!("Person {} {} was not found.", first_name, last_name))
    }

    async fn list_persons(&self) -> AppResult<Vec<Person>> {
        self.repo.find_all().await
    }

    async fn save_person(&self, person: Person) -> AppResult<Person> {
        person.validate()?;
        NameKey::parse(&person.first_name, &person.last_name)?;
        let saved = self.repo.upsert(person).await?;
        tracing::info!("Saved person {} {}", saved.first_name, saved.last_name);
        Ok(saved)
    }

    async fn update_person(&self, person: Person) -> AppResult<Person> {
        person.validate()?;
        let key = NameKey::parse(&person.first_name, &person.last_name)?;
        if self.repo.find_by_name(&key).await?.is_none() {
            tracing::error!("Person {} {} does not exist", person.first_name, person.last_name);
            return Err(AppError::not_found(format!(
                "Person {} {} does not exist.",
                person.first_name, person.last_name
            )));
        }
        self.save_person(person).await
    }

    async fn delete_person(&self, first_name: &str, last_name: &str) -> AppResult<()> {
        let key = NameKey::parse(first_name, last_name)?;
        self.repo.delete_by_name(&key).await?;
        tracing::info!("Deleted person {} {}", first_name, last_name);
        Ok(())
    }
}
