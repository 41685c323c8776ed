//! crates/styleconnect_core/src/records.rs
//!
//! Typed access to the persisted layout. Two keys are used:
//! `users` holds every registered account with its bookings embedded,
//! `user` holds the identity of whoever is signed in.
//!
//! Stored values are never trusted: anything that does not parse, or parses into
//! an inconsistent shape, surfaces as `PortError::SchemaMismatch`.

use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Identity, User};
use crate::ports::{KeyValueStore, PortError, PortResult};

pub const USERS_KEY: &str = "users";
pub const IDENTITY_KEY: &str = "user";

/// Held from load to save of the `users` record. Every service working on the same
/// partition must share one lock, or concurrent updates overwrite each other.
pub type RecordLock = Arc<tokio::sync::Mutex<()>>;

async fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> PortResult<Option<T>> {
    let Some(raw) = store.get_item(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| PortError::SchemaMismatch {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

async fn save<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> PortResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| PortError::Unexpected(e.to_string()))?;
    store.set_item(key, &raw).await
}

fn mismatch(reason: impl Into<String>) -> PortError {
    PortError::SchemaMismatch {
        key: USERS_KEY.to_string(),
        reason: reason.into(),
    }
}

/// Checks the cross-record rules serde cannot express.
fn check_users(users: &[User]) -> PortResult<()> {
    let mut ids = HashSet::new();
    let mut emails = HashSet::new();
    for user in users {
        if user.id.is_empty() {
            return Err(mismatch("user record with empty id"));
        }
        if !ids.insert(user.id.as_str()) {
            return Err(mismatch(format!("duplicate user id '{}'", user.id)));
        }
        if !emails.insert(user.email.as_str()) {
            return Err(mismatch(format!("duplicate email '{}'", user.email)));
        }
        if let Some(b) = user.bookings.iter().find(|b| b.user_id != user.id) {
            return Err(mismatch(format!(
                "booking '{}' stored under '{}' but owned by '{}'",
                b.id, user.id, b.user_id
            )));
        }
    }
    Ok(())
}

/// Loads all registered users. A missing key is an empty list.
pub async fn load_users(store: &dyn KeyValueStore) -> PortResult<Vec<User>> {
    let users: Vec<User> = load(store, USERS_KEY).await?.unwrap_or_default();
    check_users(&users)?;
    Ok(users)
}

pub async fn save_users(store: &dyn KeyValueStore, users: &[User]) -> PortResult<()> {
    save(store, USERS_KEY, users).await
}

pub async fn load_identity(store: &dyn KeyValueStore) -> PortResult<Option<Identity>> {
    load(store, IDENTITY_KEY).await
}

pub async fn save_identity(store: &dyn KeyValueStore, identity: &Identity) -> PortResult<()> {
    save(store, IDENTITY_KEY, identity).await
}

pub async fn clear_identity(store: &dyn KeyValueStore) -> PortResult<()> {
    store.remove_item(IDENTITY_KEY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    #[tokio::test]
    async fn missing_users_key_reads_as_empty() {
        let store = MemoryStore::default();
        assert!(load_users(&store).await.unwrap().is_empty());
        assert!(load_identity(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn garbage_json_is_a_schema_mismatch() {
        let store = MemoryStore::default();
        store.set_item(USERS_KEY, "{not json").await.unwrap();
        let err = load_users(&store).await.unwrap_err();
        assert!(matches!(err, PortError::SchemaMismatch { ref key, .. } if key == USERS_KEY));
    }

    #[tokio::test]
    async fn wrong_shape_is_a_schema_mismatch() {
        let store = MemoryStore::default();
        store
            .set_item(USERS_KEY, r#"[{"id":"user-1","name":"A"}]"#)
            .await
            .unwrap();
        assert!(matches!(
            load_users(&store).await,
            Err(PortError::SchemaMismatch { .. })
        ));

        store
            .set_item(IDENTITY_KEY, r#"{"id":42}"#)
            .await
            .unwrap();
        assert!(matches!(
            load_identity(&store).await,
            Err(PortError::SchemaMismatch { ref key, .. }) if key == IDENTITY_KEY
        ));
    }

    #[tokio::test]
    async fn unknown_booking_status_is_rejected() {
        let store = MemoryStore::default();
        let raw = r#"[{"id":"user-1","name":"A","email":"a@x.com","password":"p","bookings":[
            {"id":"booking-1","userId":"user-1","designerId":"designer-1","categoryId":"category-1",
             "subcategoryId":"subcategory-1-1","subSubcategoryId":"subsubcategory-1-1-1",
             "status":"archived","date":"2024-05-01T10:00:00Z","paymentMethod":"PayPal"}]}]"#;
        store.set_item(USERS_KEY, raw).await.unwrap();
        assert!(matches!(
            load_users(&store).await,
            Err(PortError::SchemaMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn duplicate_emails_are_rejected() {
        let store = MemoryStore::default();
        let raw = r#"[
            {"id":"user-1","name":"A","email":"a@x.com","password":"p"},
            {"id":"user-2","name":"B","email":"a@x.com","password":"q"}]"#;
        store.set_item(USERS_KEY, raw).await.unwrap();
        let err = load_users(&store).await.unwrap_err();
        assert!(err.to_string().contains("duplicate email"));
    }

    #[tokio::test]
    async fn users_without_bookings_field_load_with_empty_ledger() {
        let store = MemoryStore::default();
        store
            .set_item(
                USERS_KEY,
                r#"[{"id":"user-1","name":"A","email":"a@x.com","password":"p"}]"#,
            )
            .await
            .unwrap();
        let users = load_users(&store).await.unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].bookings.is_empty());
    }
}
