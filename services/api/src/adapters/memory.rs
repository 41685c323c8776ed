//! services/api/src/adapters/memory.rs
//!
//! A process-local `KeyValueStore`. Contents are lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use styleconnect_core::ports::{KeyValueStore, PortResult};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> PortResult<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_replaces_and_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set_item("user", "a").await.unwrap();
        store.set_item("user", "b").await.unwrap();
        assert_eq!(store.get_item("user").await.unwrap().as_deref(), Some("b"));

        store.remove_item("user").await.unwrap();
        store.remove_item("user").await.unwrap();
        assert_eq!(store.get_item("user").await.unwrap(), None);
    }
}
