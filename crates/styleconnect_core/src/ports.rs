//! crates/styleconnect_core/src/ports.rs
//!
//! Defines the storage contract the core depends on.
//! Adapters in the service crate provide the concrete backends (memory, file, Postgres).

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
    #[error("Unauthorized")]
    Unauthorized,
    /// A persisted value exists but does not have the expected shape.
    #[error("Stored value under '{key}' is malformed: {reason}")]
    SchemaMismatch { key: String, reason: String },
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Storage Port
//=========================================================================================

/// A string key-value store with local-storage semantics: values are opaque strings,
/// writes replace the previous value, removing a missing key is not an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> PortResult<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> PortResult<()>;

    async fn remove_item(&self, key: &str) -> PortResult<()>;
}
