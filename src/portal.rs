//! Wiring for a running client: durable storage, the shared session, the
//! gateway and the session store, built once from an [`AppConfig`].

use crate::{
    api::{ApiError, Gateway, Navigator},
    config::AppConfig,
    guards::{self, GuardError},
    session::{Profile, Role, SessionContext, SessionStore},
    storage::{FileStorage, Storage},
};
use std::sync::Arc;
use tracing::debug;

pub struct Portal {
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl Portal {
    /// Builds a portal persisting its session to `config.storage_path` and
    /// restores any previous session.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.storage_path));
        debug!("Using session storage at {}", config.storage_path.display());
        Self::with_storage(config, storage, navigator)
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_storage(
        config: &AppConfig,
        storage: Arc<dyn Storage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let context = Arc::new(SessionContext::new(storage));
        let gateway = Arc::new(Gateway::new(config, context, navigator.clone())?);
        let session = SessionStore::new(gateway);
        session.initialize();
        Ok(Self { session, navigator })
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        self.session.gateway()
    }

    /// # Errors
    /// See [`guards::require_authenticated`].
    pub fn require_authenticated(&self) -> Result<Profile, GuardError> {
        guards::require_authenticated(self.session.context(), self.navigator.as_ref())
    }

    /// # Errors
    /// See [`guards::require_role`].
    pub fn require_role(&self, role: Role) -> Result<Profile, GuardError> {
        guards::require_role(self.session.context(), self.navigator.as_ref(), role)
    }
}
