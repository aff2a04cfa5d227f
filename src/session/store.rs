use super::{
    context::SessionContext,
    types::{Identity, Profile},
};
use crate::{
    api::{ApiError, Gateway},
    features::auth::types::{LoginRequest, LoginResponse},
    storage::StorageError,
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Why a login attempt failed. The session is unchanged in every case.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Transport(ApiError),
    #[error("Unexpected login response: {0}")]
    MalformedResponse(String),
    #[error("Failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http {
                status: 400 | 401 | 403,
                ..
            } => LoginError::InvalidCredentials,
            ApiError::Http { status, message } => LoginError::Rejected { status, message },
            ApiError::Parse(message) => LoginError::MalformedResponse(message),
            other => LoginError::Transport(other),
        }
    }
}

/// Login/logout front for the shared [`SessionContext`]. The store and the
/// gateway are the only writers of the session.
pub struct SessionStore {
    context: Arc<SessionContext>,
    gateway: Arc<Gateway>,
}

impl SessionStore {
    #[must_use]
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            context: gateway.context().clone(),
            gateway,
        }
    }

    #[must_use]
    pub fn context(&self) -> &Arc<SessionContext> {
        &self.context
    }

    #[must_use]
    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.context.is_authenticated()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.context.is_initialized()
    }

    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.context.profile()
    }

    /// Restores the persisted session, once. Missing or unusable data simply
    /// leaves the user logged out.
    pub fn initialize(&self) {
        if self.context.is_initialized() {
            return;
        }

        if let Some(identity) = self.context.restore() {
            info!(role = %identity.profile.role, "restored persisted session");
            self.gateway.set_default_token(identity.token.clone());
            self.context.publish(identity);
        }

        self.context.mark_initialized();
    }

    /// Authenticates against the backend and persists the new session.
    ///
    /// # Errors
    /// Returns a [`LoginError`] describing the failure; the previous session,
    /// persisted or in memory, is left untouched.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<Profile, LoginError> {
        let email = email.trim();

        let result = self.try_login(email, password).await;
        match &result {
            Ok(profile) => info!(role = %profile.role, "login succeeded"),
            Err(err) => warn!("Login failed: {}", err),
        }
        result
    }

    async fn try_login(&self, email: &str, password: &SecretString) -> Result<Profile, LoginError> {
        let request = LoginRequest {
            email,
            password: password.expose_secret(),
        };
        let response: LoginResponse = self.gateway.post_public(LOGIN_ENDPOINT, &request).await?;

        let identity = response.into_identity(email)?;
        self.context.persist(&identity)?;

        let profile = identity.profile.clone();
        self.gateway.set_default_token(identity.token.clone());
        self.context.publish(identity);

        Ok(profile)
    }

    /// Clears memory, storage and the gateway token. Safe to call when
    /// already logged out.
    pub fn logout(&self) {
        let was_authenticated = self.context.is_authenticated();
        self.context.clear();
        self.gateway.clear_default_token();
        if was_authenticated {
            info!("logged out");
        }
    }
}

impl LoginResponse {
    fn into_identity(self, email: &str) -> Result<Identity, LoginError> {
        let token = self
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| LoginError::MalformedResponse("no token found".to_string()))?;
        let role = self
            .role
            .ok_or_else(|| LoginError::MalformedResponse("no role found".to_string()))?;
        let name = self
            .name
            .ok_or_else(|| LoginError::MalformedResponse("no name found".to_string()))?;

        Ok(Identity {
            profile: Profile::new(name, email, role, self.student_number),
            token: SecretString::from(token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{RecordingNavigator, LOGIN_PATH},
        config::AppConfig,
        session::{Role, STUDENT_NUMBER_KEY, TOKEN_KEY, USER_KEY},
        storage::{MemoryStorage, Storage},
    };
    use anyhow::{anyhow, Result};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn store(base_url: &str, storage: Arc<MemoryStorage>) -> Result<(SessionStore, Arc<RecordingNavigator>)> {
        let navigator = Arc::new(RecordingNavigator::new());
        let context = Arc::new(SessionContext::new(storage));
        let gateway = Gateway::new(&AppConfig::new(base_url)?, context, navigator.clone())?;
        Ok((SessionStore::new(Arc::new(gateway)), navigator))
    }

    fn password(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn api_errors_map_to_login_errors() {
        let invalid = LoginError::from(ApiError::Http {
            status: 401,
            message: "nope".into(),
        });
        assert!(matches!(invalid, LoginError::InvalidCredentials));

        let rejected = LoginError::from(ApiError::Http {
            status: 503,
            message: "maintenance".into(),
        });
        assert!(matches!(rejected, LoginError::Rejected { status: 503, .. }));

        let transport = LoginError::from(ApiError::Network("down".into()));
        assert!(matches!(transport, LoginError::Transport(_)));
    }

    #[test]
    fn initialize_restores_once_and_sets_flag() -> Result<()> {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "t1")?;
        storage.set_item(
            USER_KEY,
            r#"{"name":"Admin A","email":"a@u.edu","role":"ADMIN"}"#,
        )?;

        let (store, _) = store("http://127.0.0.1:9", storage.clone())?;
        assert!(!store.is_initialized());

        store.initialize();
        assert!(store.is_initialized());
        assert!(store.is_authenticated());
        assert!(store.gateway().has_default_token());
        assert_eq!(
            store.profile().map(|profile| profile.role),
            Some(Role::Admin)
        );

        // A second call does not re-read storage.
        storage.remove_item(TOKEN_KEY)?;
        store.initialize();
        assert!(store.is_authenticated());
        Ok(())
    }

    #[test]
    fn initialize_without_data_is_logged_out() -> Result<()> {
        let (store, _) = store("http://127.0.0.1:9", Arc::new(MemoryStorage::new()))?;
        store.initialize();
        assert!(store.is_initialized());
        assert!(!store.is_authenticated());
        assert!(!store.gateway().has_default_token());
        Ok(())
    }

    #[test]
    fn logout_is_idempotent() -> Result<()> {
        let storage = Arc::new(MemoryStorage::new());
        let (store, navigator) = store("http://127.0.0.1:9", storage.clone())?;
        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
        assert!(navigator.history().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn student_login_persists_student_number() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_ENDPOINT))
            .and(body_json(json!({"email": "s@u.edu", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "t-stu",
                "role": "STUDENT",
                "name": "Stu Dent",
                "studentNumber": "STU001"
            })))
            .mount(&server)
            .await;

        let storage = Arc::new(MemoryStorage::new());
        let (store, _) = store(&server.uri(), storage.clone())?;

        let profile = store.login(" s@u.edu ", &password("pw")).await?;
        assert_eq!(profile.email, "s@u.edu");
        assert_eq!(profile.student_number.as_deref(), Some("STU001"));
        assert_eq!(storage.get_item(TOKEN_KEY), Some("t-stu".to_string()));
        assert_eq!(
            storage.get_item(STUDENT_NUMBER_KEY),
            Some("STU001".to_string())
        );
        assert_eq!(store.context().student_number().as_deref(), Some("STU001"));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_login_response_leaves_session_alone() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "role": "ADMIN",
                "name": "No Token"
            })))
            .mount(&server)
            .await;

        let storage = Arc::new(MemoryStorage::new());
        let (store, navigator) = store(&server.uri(), storage.clone())?;

        let err = store
            .login("a@u.edu", &password("pw"))
            .await
            .err()
            .ok_or_else(|| anyhow!("expected login to fail"))?;
        assert!(matches!(err, LoginError::MalformedResponse(_)));
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
        assert!(navigator.history().iter().all(|p| p != LOGIN_PATH));
        Ok(())
    }
}
