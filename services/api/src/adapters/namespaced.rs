//! services/api/src/adapters/namespaced.rs
//!
//! Gives each client its own slice of a shared backend, the way every browser keeps
//! its own local storage. Keys are stored as `<client id>:<key>`.

use std::sync::Arc;

use async_trait::async_trait;
use styleconnect_core::ports::{KeyValueStore, PortResult};

#[derive(Clone)]
pub struct NamespacedStore {
    inner: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl NamespacedStore {
    pub fn new(inner: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            inner,
            namespace: namespace.into(),
        }
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}:{}", self.namespace, key)
    }
}

#[async_trait]
impl KeyValueStore for NamespacedStore {
    async fn get_item(&self, key: &str) -> PortResult<Option<String>> {
        self.inner.get_item(&self.scoped(key)).await
    }

    async fn set_item(&self, key: &str, value: &str) -> PortResult<()> {
        self.inner.set_item(&self.scoped(key), value).await
    }

    async fn remove_item(&self, key: &str) -> PortResult<()> {
        self.inner.remove_item(&self.scoped(key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[tokio::test]
    async fn namespaces_do_not_see_each_other() {
        let shared: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let a = NamespacedStore::new(shared.clone(), "client-a");
        let b = NamespacedStore::new(shared.clone(), "client-b");

        a.set_item("user", "alice").await.unwrap();
        assert_eq!(b.get_item("user").await.unwrap(), None);
        assert_eq!(
            shared.get_item("client-a:user").await.unwrap().as_deref(),
            Some("alice")
        );

        b.remove_item("user").await.unwrap();
        assert_eq!(a.get_item("user").await.unwrap().as_deref(), Some("alice"));
    }
}
