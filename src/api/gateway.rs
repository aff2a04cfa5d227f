//! The authorized request gateway: one HTTP client, one base address, bearer
//! token injection, and session teardown when the backend answers `401`.
//!
//! Page-level code calls [`Gateway::get`], [`Gateway::post`] and friends with a
//! path relative to the base address. The gateway never retries; everything
//! except an authorization failure is returned to the caller as-is.

use super::{
    errors::ApiError,
    navigation::{Navigator, LOGIN_PATH},
};
use crate::{config::AppConfig, session::SessionContext, APP_USER_AGENT};
use reqwest::{header::CONTENT_TYPE, Client, Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, instrument, warn};

/// Maximum number of error body characters surfaced to the caller.
const MAX_ERROR_CHARS: usize = 200;

pub struct Gateway {
    client: Client,
    base_url: String,
    context: Arc<SessionContext>,
    navigator: Arc<dyn Navigator>,
    default_token: RwLock<Option<SecretString>>,
    teardown_lock: Mutex<()>,
}

impl Gateway {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        config: &AppConfig,
        context: Arc<SessionContext>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            context,
            navigator,
            default_token: RwLock::new(None),
            teardown_lock: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn context(&self) -> &Arc<SessionContext> {
        &self.context
    }

    #[must_use]
    pub fn has_default_token(&self) -> bool {
        self.default_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub(crate) fn set_default_token(&self, token: SecretString) {
        *self
            .default_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    pub(crate) fn clear_default_token(&self) {
        *self
            .default_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Token for the next request: durable storage first, so a token written by
    /// another handle is picked up, then the gateway default.
    fn bearer(&self) -> Option<SecretString> {
        self.context.stored_token().or_else(|| {
            self.default_token
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        })
    }

    /// Issues an authorized request and parses the JSON response. An empty body
    /// parses as JSON `null`, so `T = ()` accepts `204 No Content`.
    ///
    /// # Errors
    /// Returns `ApiError::Unauthorized` after tearing the session down on `401`,
    /// or the transport/HTTP/parse error otherwise.
    #[instrument(skip(self, body))]
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.bearer();
        let response = self.send(method, path, body, token.clone()).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.teardown(token.as_ref());
            return Err(ApiError::Unauthorized);
        }

        handle_json_response(response).await
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    /// Posts without a bearer token and without the `401` teardown. Used for
    /// login, where `401` means bad credentials rather than a lost session.
    ///
    /// # Errors
    /// Returns the transport/HTTP/parse error unchanged.
    #[instrument(skip(self, body))]
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body), None).await?;
        handle_json_response(response).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<SecretString>,
    ) -> Result<Response, ApiError> {
        let url = build_url_with_base(&self.base_url, path);
        debug!("{} {}", method, url);

        let mut builder = self.client.request(method, &url);

        if let Some(token) = token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body)
                .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }

        builder.send().await.map_err(map_request_error)
    }

    /// Drops the whole session and sends the user to the login entry point,
    /// but only while `sent` is still the token in use. A `401` for a token
    /// that was already torn down or replaced by a newer login changes nothing.
    fn teardown(&self, sent: Option<&SecretString>) {
        let _guard = self
            .teardown_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let in_use = self.bearer();
        let sent = sent.map(|token| token.expose_secret());
        if sent != in_use.as_ref().map(|token| token.expose_secret()) {
            debug!("Ignoring 401 for a token that is no longer current");
            return;
        }

        warn!("Backend rejected the session token, logging out");
        self.context.clear();
        self.clear_default_token();
        self.navigator.navigate(LOGIN_PATH);
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `ApiError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_request_error)?;

    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: error_message(&bytes),
        });
    }

    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };

    serde_json::from_slice(bytes)
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Prefers the backend's `{"error": ...}` / `{"message": ...}` text over the raw body.
fn error_message(bytes: &[u8]) -> String {
    let body = String::from_utf8_lossy(bytes);

    let structured = serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        });

    sanitize_body(&structured.unwrap_or_else(|| body.into_owned()))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
