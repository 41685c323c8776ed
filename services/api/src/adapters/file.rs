//! services/api/src/adapters/file.rs
//!
//! A `KeyValueStore` persisted as one JSON object on disk. Every write rewrites the
//! whole document through a temporary file and a rename, so a crash mid-write leaves
//! the previous version in place.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use styleconnect_core::ports::{KeyValueStore, PortError, PortResult};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

pub struct FileStore {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the document at `path`, creating parent directories. A missing file
    /// starts out empty.
    pub async fn open(path: impl Into<PathBuf>) -> PortResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PortError::Unexpected(format!("create {}: {}", parent.display(), e)))?;
        }

        let items = match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| PortError::SchemaMismatch {
                key: path.display().to_string(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(PortError::Unexpected(format!(
                    "read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        info!(path = %path.display(), keys = items.len(), "file storage opened");

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self, items: &BTreeMap<String, String>) -> PortResult<()> {
        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .await
            .map_err(|e| PortError::Unexpected(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| PortError::Unexpected(format!("rename {}: {}", tmp.display(), e)))?;
        debug!(path = %self.path.display(), "file storage flushed");
        Ok(())
    }
}

//=========================================================================================
// `KeyValueStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        let mut items = self.items.lock().await;
        items.insert(key.to_string(), value.to_string());
        self.flush(&items).await
    }

    async fn remove_item(&self, key: &str) -> PortResult<()> {
        let mut items = self.items.lock().await;
        if items.remove(key).is_some() {
            self.flush(&items).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("styleconnect-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[tokio::test]
    async fn values_survive_reopening() {
        let path = scratch_path("storage.json");
        let store = FileStore::open(&path).await.unwrap();
        store.set_item("users", "[]").await.unwrap();
        store.set_item("user", r#"{"id":"user-1"}"#).await.unwrap();
        store.remove_item("user").await.unwrap();
        drop(store);

        let reopened = FileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get_item("users").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get_item("user").await.unwrap(), None);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn corrupt_document_is_a_schema_mismatch() {
        let path = scratch_path("storage.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).await.err().unwrap();
        assert!(matches!(err, PortError::SchemaMismatch { .. }));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
