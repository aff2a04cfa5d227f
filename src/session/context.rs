//! Shared session state: the durable storage handle plus the in-memory identity.
//!
//! One `SessionContext` is created per application and handed to both the
//! session store and the gateway. Anyone may read it; only login, logout and
//! the gateway's authorization teardown write to it.

use super::types::{Identity, Profile, Role};
use crate::storage::{Storage, StorageError};
use secrecy::{ExposeSecret, SecretString};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::watch;
use tracing::{debug, error, warn};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const STUDENT_NUMBER_KEY: &str = "studentNumber";

/// Every key written at login; all of them are removed together.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_KEY, STUDENT_NUMBER_KEY];

pub struct SessionContext {
    storage: Arc<dyn Storage>,
    state: watch::Sender<Option<Identity>>,
    initialized: AtomicBool,
}

impl SessionContext {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            storage,
            state,
            initialized: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<Identity> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.state
            .borrow()
            .as_ref()
            .map(|identity| identity.profile.clone())
    }

    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.state
            .borrow()
            .as_ref()
            .map(|identity| identity.token.clone())
    }

    #[must_use]
    pub fn student_number(&self) -> Option<String> {
        self.state
            .borrow()
            .as_ref()
            .and_then(|identity| identity.profile.student_number.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// False until the persisted session has been looked at once.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Change notifications for the identity; the receiver sees the current
    /// value immediately.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.state.subscribe()
    }

    /// Token currently persisted in durable storage, which may have been
    /// written by another handle.
    #[must_use]
    pub fn stored_token(&self) -> Option<SecretString> {
        self.storage
            .get_item(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from)
    }

    pub(crate) fn mark_initialized(&self) {
        self.initialized.store(true, Ordering::Release);
    }

    /// Reads the persisted identity. Incomplete or malformed records are purged
    /// and reported as logged out.
    pub(crate) fn restore(&self) -> Option<Identity> {
        let token = self.stored_token();
        let user = self.storage.get_item(USER_KEY);

        let (token, user) = match (token, user) {
            (Some(token), Some(user)) => (token, user),
            (None, None) => return None,
            _ => {
                warn!("Discarding incomplete persisted session");
                self.purge();
                return None;
            }
        };

        match serde_json::from_str::<Profile>(&user) {
            Ok(profile) => Some(Identity {
                profile: profile.normalized(),
                token,
            }),
            Err(err) => {
                warn!("Discarding malformed persisted profile: {}", err);
                self.purge();
                None
            }
        }
    }

    /// Writes all session keys. On failure the previous values are put back so
    /// the persisted session is left as it was.
    pub(crate) fn persist(&self, identity: &Identity) -> Result<(), StorageError> {
        let previous: Vec<(&str, Option<String>)> = SESSION_KEYS
            .iter()
            .map(|key| (*key, self.storage.get_item(key)))
            .collect();

        let result = self.write_identity(identity);
        if result.is_err() {
            for (key, value) in previous {
                let restored = match value {
                    Some(value) => self.storage.set_item(key, &value),
                    None => self.storage.remove_item(key),
                };
                if let Err(err) = restored {
                    error!("Failed to roll back session key {}: {}", key, err);
                }
            }
        }

        result
    }

    fn write_identity(&self, identity: &Identity) -> Result<(), StorageError> {
        let user = serde_json::to_string(&identity.profile)?;

        self.storage
            .set_item(TOKEN_KEY, identity.token.expose_secret())?;
        self.storage.set_item(USER_KEY, &user)?;

        match (&identity.profile.role, &identity.profile.student_number) {
            (Role::Student, Some(number)) => self.storage.set_item(STUDENT_NUMBER_KEY, number),
            _ => self.storage.remove_item(STUDENT_NUMBER_KEY),
        }
    }

    pub(crate) fn publish(&self, identity: Identity) {
        self.state.send_replace(Some(identity));
    }

    /// Drops the in-memory identity and every persisted key.
    pub(crate) fn clear(&self) {
        self.state.send_replace(None);
        self.purge();
    }

    fn purge(&self) {
        for key in SESSION_KEYS {
            if let Err(err) = self.storage.remove_item(key) {
                error!("Failed to remove session key {}: {}", key, err);
            }
        }
        debug!("persisted session cleared");
    }
}
