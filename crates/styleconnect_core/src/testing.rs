//! In-memory `KeyValueStore` used by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{KeyValueStore, PortResult};

#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.items.lock().unwrap().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> PortResult<()> {
        self.items.lock().unwrap().remove(key);
        Ok(())
    }
}

/// A `MemoryStore` that yields to the scheduler on every call, the way network and
/// disk backends do, so interleaved read-modify-write cycles become observable.
#[derive(Default)]
pub struct YieldingStore {
    inner: MemoryStore,
}

#[async_trait]
impl KeyValueStore for YieldingStore {
    async fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        tokio::task::yield_now().await;
        let value = self.inner.get_item(key).await;
        tokio::task::yield_now().await;
        value
    }

    async fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        tokio::task::yield_now().await;
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> PortResult<()> {
        tokio::task::yield_now().await;
        self.inner.remove_item(key).await
    }
}
