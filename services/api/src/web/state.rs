//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the per-client context derived from it.

use crate::adapters::NamespacedStore;
use crate::config::Config;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use styleconnect_core::records::RecordLock;
use styleconnect_core::{BookingLedger, Catalog, KeyValueStore, SessionStore};

//=========================================================================================
// AppState (Shared Across All Connections)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn KeyValueStore>,
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
    /// One record lock per client partition, alive while any request holds it.
    record_locks: Arc<Mutex<HashMap<String, Weak<tokio::sync::Mutex<()>>>>>,
}

impl AppState {
    pub fn new(storage: Arc<dyn KeyValueStore>, catalog: Catalog, config: Config) -> Self {
        Self {
            storage,
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            record_locks: Arc::default(),
        }
    }

    /// Builds the services for one client, scoped to that client's storage partition.
    pub fn client(&self, client_id: &str) -> ClientContext {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(NamespacedStore::new(self.storage.clone(), client_id));
        let lock = self.record_lock(client_id);
        ClientContext {
            client_id: client_id.to_string(),
            session: SessionStore::new(store.clone()).with_lock(lock.clone()),
            ledger: BookingLedger::new(store, self.catalog.clone())
                .with_lock(lock)
                .with_checkout_delay(self.config.booking_delay),
        }
    }

    /// Returns the lock shared by every in-flight request of `client_id`.
    fn record_lock(&self, client_id: &str) -> RecordLock {
        let mut locks = self
            .record_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(lock) = locks.get(client_id).and_then(Weak::upgrade) {
            return lock;
        }
        locks.retain(|_, lock| lock.strong_count() > 0);
        let lock = RecordLock::default();
        locks.insert(client_id.to_string(), Arc::downgrade(&lock));
        lock
    }
}

//=========================================================================================
// ClientContext (Specific to One Client Cookie)
//=========================================================================================

/// The session and ledger for the client making the current request.
#[derive(Clone)]
pub struct ClientContext {
    pub client_id: String,
    pub session: SessionStore,
    pub ledger: BookingLedger,
}
