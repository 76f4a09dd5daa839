//! Person repository over the `persons` collection.

use std::sync::Arc;

use async_trait::async_trait;

use super::base::JsonCollection;
use crate::domain::{NameKey, Person};
use crate::errors::AppResult;
use crate::infra::document_store::DocumentStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Person repository trait for dependency injection.
///
/// Every lookup is a case-insensitive linear scan of the persisted document.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List every person
    async fn find_all(&self) -> AppResult<Vec<Person>>;

    /// Find a person by (firstName, lastName)
    async fn find_by_name(&self, key: &NameKey) -> AppResult<Option<Person>>;

    /// Find everyone living at an address
    async fn find_by_address(&self, address: &str) -> AppResult<Vec<Person>>;

    /// Find everyone living in a city
    async fn find_by_city(&self, city: &str) -> AppResult<Vec<Person>>;

    /// Find everyone carrying a last name
    async fn find_by_last_name(&self, last_name: &str) -> AppResult<Vec<Person>>;

    /// Insert or replace by natural key
    async fn upsert(&self, person: Person) -> AppResult<Person>;

    /// Delete by natural key (NotFound if absent)
    async fn delete_by_name(&self, key: &NameKey) -> AppResult<()>;
}

/// Concrete implementation of PersonRepository backed by the JSON document
pub struct PersonStore {
    persons: JsonCollection<Person>,
}

impl PersonStore {
    /// Create new repository instance
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            persons: JsonCollection::new(store),
        }
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn find_all(&self) -> AppResult<Vec<Person>> {
        self.persons.find_all().await
    }

    async fn find_by_name(&self, key: &NameKey) -> AppResult<Option<Person>> {
        self.persons.find_by_key(key).await
    }

    async fn find_by_address(&self, address: &str) -> AppResult<Vec<Person>> {
        self.persons.find_where(|p| p.lives_at(address)).await
    }

    async fn find_by_city(&self, city: &str) -> AppResult<Vec<Person>> {
        self.persons.find_where(|p| p.lives_in(city)).await
    }

    async fn find_by_last_name(&self, last_name: &str) -> AppResult<Vec<Person>> {
        self.persons.find_where(|p| p.has_last_name(last_name)).await
    }

    async fn upsert(&self, person: Person) -> AppResult<Person> {
        let saved = self.persons.upsert(person).await?;
        tracing::debug!("Saved person {} {}", saved.first_name, saved.last_name);
        Ok(saved)
    }

    async fn delete_by_name(&self, key: &NameKey) -> AppResult<()> {
        self.persons.delete_by_key(key).await
    }
}
