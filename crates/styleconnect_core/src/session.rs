//! crates/styleconnect_core/src/session.rs
//!
//! The session store: account creation, credential checks and the persisted
//! "currently signed in" identity.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{Identity, User};
use crate::ports::{KeyValueStore, PortError};
use crate::records::{self, RecordLock};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email already in use")]
    DuplicateEmail,
    #[error("The field '{0}' is required")]
    MissingField(&'static str),
    #[error(transparent)]
    Port(#[from] PortError),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    lock: RecordLock,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: RecordLock::default(),
        }
    }

    /// Shares the partition's record lock with other services on the same store.
    pub fn with_lock(mut self, lock: RecordLock) -> Self {
        self.lock = lock;
        self
    }

    /// Signs in with an exact email and password match.
    ///
    /// Nothing is written unless the credentials match.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<Identity> {
        if email.is_empty() || password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }

        let users = records::load_users(self.store.as_ref()).await?;
        let Some(user) = users
            .iter()
            .find(|u| u.email == email && u.password == password)
        else {
            warn!(email, "login rejected");
            return Err(SessionError::InvalidCredentials);
        };

        let identity = user.identity();
        records::save_identity(self.store.as_ref(), &identity).await?;
        info!(user_id = %identity.id, "user logged in");
        Ok(identity)
    }

    /// Registers a new account with an empty booking list and signs it in.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> SessionResult<Identity> {
        for (field, value) in [("name", name), ("email", email), ("password", password)] {
            if value.trim().is_empty() {
                return Err(SessionError::MissingField(field));
            }
        }

        let _guard = self.lock.lock().await;
        let mut users = records::load_users(self.store.as_ref()).await?;
        if users.iter().any(|u| u.email == email) {
            return Err(SessionError::DuplicateEmail);
        }

        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            bookings: Vec::new(),
        };
        let identity = user.identity();
        users.push(user);

        records::save_users(self.store.as_ref(), &users).await?;
        records::save_identity(self.store.as_ref(), &identity).await?;
        info!(user_id = %identity.id, "account created");
        Ok(identity)
    }

    pub async fn logout(&self) -> SessionResult<()> {
        records::clear_identity(self.store.as_ref()).await?;
        info!("user logged out");
        Ok(())
    }

    pub async fn current_identity(&self) -> SessionResult<Option<Identity>> {
        Ok(records::load_identity(self.store.as_ref()).await?)
    }

    pub async fn is_authenticated(&self) -> SessionResult<bool> {
        Ok(self.current_identity().await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{IDENTITY_KEY, USERS_KEY};
    use crate::testing::{MemoryStore, YieldingStore};

    fn session() -> (Arc<MemoryStore>, SessionStore) {
        let store = Arc::new(MemoryStore::default());
        (store.clone(), SessionStore::new(store))
    }

    #[tokio::test]
    async fn signup_persists_user_and_signs_in() {
        let (store, session) = session();
        let identity = session.signup("Jane", "jane@x.com", "secret1").await.unwrap();
        assert!(identity.id.starts_with("user-"));
        assert_eq!(identity.name, "Jane");

        let users = records::load_users(store.as_ref()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].password, "secret1");
        assert!(users[0].bookings.is_empty());
        assert_eq!(session.current_identity().await.unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn login_yields_the_stored_user_id() {
        let (_, session) = session();
        let created = session.signup("Jane", "jane@x.com", "secret1").await.unwrap();
        session.logout().await.unwrap();

        let identity = session.login("jane@x.com", "secret1").await.unwrap();
        assert_eq!(identity.id, created.id);
        assert!(session.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn bad_credentials_fail_without_touching_storage() {
        let (store, session) = session();
        session.signup("Jane", "jane@x.com", "secret1").await.unwrap();
        session.logout().await.unwrap();
        let before = store.snapshot();

        for (email, password) in [
            ("nobody@x.com", "secret1"),
            ("jane@x.com", "wrong"),
            ("", "secret1"),
            ("jane@x.com", ""),
        ] {
            let err = session.login(email, password).await.unwrap_err();
            assert!(matches!(err, SessionError::InvalidCredentials));
        }
        assert_eq!(store.snapshot(), before);
        assert!(!session.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_does_not_create_a_second_record() {
        let (store, session) = session();
        session.signup("Jane", "jane@x.com", "secret1").await.unwrap();
        let err = session
            .signup("Other Jane", "jane@x.com", "different")
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::DuplicateEmail));
        assert_eq!(records::load_users(store.as_ref()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn signup_requires_every_field() {
        let (store, session) = session();
        let err = session.signup("  ", "jane@x.com", "secret1").await.unwrap_err();
        assert!(matches!(err, SessionError::MissingField("name")));
        let err = session.signup("Jane", "jane@x.com", "").await.unwrap_err();
        assert!(matches!(err, SessionError::MissingField("password")));
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_only_the_identity() {
        let (store, session) = session();
        session.signup("Jane", "jane@x.com", "secret1").await.unwrap();
        session.logout().await.unwrap();

        let snapshot = store.snapshot();
        assert!(snapshot.contains_key(USERS_KEY));
        assert!(!snapshot.contains_key(IDENTITY_KEY));
        assert_eq!(session.current_identity().await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_users_record_surfaces_as_port_error() {
        let (store, session) = session();
        store.set_item(USERS_KEY, "[1, 2, 3]").await.unwrap();
        let err = session.login("jane@x.com", "secret1").await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Port(PortError::SchemaMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn concurrent_signups_keep_every_account() {
        let store: Arc<dyn KeyValueStore> = Arc::new(YieldingStore::default());
        let session = SessionStore::new(store.clone());

        let (jane, sam) = tokio::join!(
            session.signup("Jane", "jane@x.com", "secret1"),
            session.signup("Sam", "sam@x.com", "hunter2"),
        );
        jane.unwrap();
        sam.unwrap();

        assert_eq!(records::load_users(store.as_ref()).await.unwrap().len(), 2);
        session.login("jane@x.com", "secret1").await.unwrap();
        session.login("sam@x.com", "hunter2").await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_signups_with_one_email_create_one_account() {
        let store: Arc<dyn KeyValueStore> = Arc::new(YieldingStore::default());
        let lock = RecordLock::default();
        let first = SessionStore::new(store.clone()).with_lock(lock.clone());
        let second = SessionStore::new(store.clone()).with_lock(lock);

        let (a, b) = tokio::join!(
            first.signup("Jane", "jane@x.com", "secret1"),
            second.signup("Jane", "jane@x.com", "other"),
        );
        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert!(matches!(
            a.err().or(b.err()),
            Some(SessionError::DuplicateEmail)
        ));
        assert_eq!(records::load_users(store.as_ref()).await.unwrap().len(), 1);
    }
}
