//! JSON document store - the single point of disk I/O.
//!
//! The whole data set lives in one JSON object with three array-valued
//! collections. Every mutation rewrites the entire document; a process-wide
//! mutex serializes load+save pairs so in-process writers never lose each
//! other's updates.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

use crate::config::COLLECTIONS;
use crate::errors::AppResult;

/// In-memory image of the persisted document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    /// Document with every known collection present and empty
    pub fn empty() -> Self {
        let root = COLLECTIONS
            .iter()
            .map(|name| (name.to_string(), Value::Array(Vec::new())))
            .collect();
        Self { root }
    }

    /// Raw records of a collection, or an empty list if it is absent
    pub fn collection(&self, name: &str) -> Vec<Value> {
        match self.root.get(name) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Replace a collection with raw records
    pub fn set_collection(&mut self, name: &str, records: Vec<Value>) {
        self.root.insert(name.to_string(), Value::Array(records));
    }

    /// Decode a collection into typed records
    pub fn records<T: DeserializeOwned>(&self, name: &str) -> AppResult<Vec<T>> {
        let records = match self.root.get(name) {
            Some(value @ Value::Array(_)) => serde_json::from_value(value.clone())?,
            _ => Vec::new(),
        };
        Ok(records)
    }

    /// Encode typed records into a collection, replacing its content
    pub fn replace_records<T: Serialize>(&mut self, name: &str, records: &[T]) -> AppResult<()> {
        let value = serde_json::to_value(records)?;
        self.root.insert(name.to_string(), value);
        Ok(())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// File-backed owner of the document.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the persisted document.
    ///
    /// An absent or unparsable file yields an empty document: nothing that
    /// was ever written successfully can be lost this way.
    pub async fn load(&self) -> Document {
        tracing::debug!("Reading document {}", self.path.display());

        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    "Document {} unreadable ({}), starting empty",
                    self.path.display(),
                    e
                );
                return Document::empty();
            }
        };

        match serde_json::from_str::<Value>(&content).map(Document::from_value) {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::warn!("Document {} is not a JSON object, starting empty", self.path.display());
                Document::empty()
            }
            Err(e) => {
                tracing::warn!("Document {} is malformed ({}), starting empty", self.path.display(), e);
                Document::empty()
            }
        }
    }

    /// Serialize and overwrite the whole document.
    ///
    /// Writes a sibling temp file then renames it over the target, so a
    /// concurrent reader sees either the old or the new document.
    pub async fn save(&self, document: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(document.root.clone()))?;
        let tmp_path = self.tmp_path();

        fs::write(&tmp_path, content).await?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            tracing::error!("Failed to replace {}: {}", self.path.display(), e);
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        tracing::debug!("Wrote document {}", self.path.display());
        Ok(())
    }

    /// Run one load → mutate → save cycle under the single-writer lock.
    ///
    /// If `f` fails nothing is written and its error is returned.
    pub async fn modify<F, R>(&self, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Document) -> AppResult<R> + Send,
        R: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut document = self.load().await;
        let result = f(&mut document)?;
        self.save(&document).await?;

        Ok(result)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FIRESTATIONS_COLLECTION, PERSONS_COLLECTION};
    use crate::errors::AppError;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DocumentStore {
        DocumentStore::new(dir.path().join("data.json"))
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let document = store_in(&dir).load().await;

        assert_eq!(document, Document::empty());
        assert!(document.collection(PERSONS_COLLECTION).is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        assert_eq!(store.load().await, Document::empty());
    }

    #[tokio::test]
    async fn test_absent_collection_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"persons": []}"#).unwrap();

        let document = store.load().await;
        assert!(document.collection(FIRESTATIONS_COLLECTION).is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            json!({
                "persons": [{"firstName": "John", "lastName": "Boyd"}],
                "firestations": [{"address": "1509 Culver St", "station": 3}],
                "medicalrecords": [],
                "comment": "kept as-is"
            })
            .to_string(),
        )
        .unwrap();

        let first = store.load().await;
        store.save(&first).await.unwrap();
        let second = store.load().await;

        assert_eq!(first, second);
        assert_eq!(second.root.get("comment"), Some(&json!("kept as-is")));
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path().join("nested/deeper/data.json"));

        store.save(&Document::empty()).await.unwrap();

        assert!(store.path().exists());
        assert!(!store.tmp_path().exists());
    }

    #[tokio::test]
    async fn test_failed_modify_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let result: AppResult<()> = store
            .modify(|document| {
                document.set_collection(PERSONS_COLLECTION, vec![json!({"firstName": "X"})]);
                Err(AppError::not_found("nothing to delete"))
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_concurrent_modifies_do_not_lose_updates() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(store_in(&dir));

        let tasks: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .modify(move |document| {
                            let mut items = document.collection(PERSONS_COLLECTION);
                            items.push(json!({ "n": i }));
                            document.set_collection(PERSONS_COLLECTION, items);
                            Ok(())
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.load().await.collection(PERSONS_COLLECTION).len(), 10);
    }
}
