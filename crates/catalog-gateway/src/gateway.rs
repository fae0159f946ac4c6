//! Request gateway.
//!
//! Every call to the catalog API goes through [`Gateway::execute`], which
//! attaches the bearer credential, retries once on 401 and turns failures
//! into notices for the host.

use crate::error::{GatewayError, GatewayResult, TransportError};
use crate::notice::{
    Navigator, Notice, Notifier, NETWORK_ERROR, NOT_AUTHENTICATED, REQUEST_FAILED,
    SESSION_EXPIRED,
};
use crate::transport::{Method, PreparedRequest, RawResponse, Transport};
use catalog_config::Config;
use catalog_storage::SessionStore;
use serde_json::{Map, Value};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

/// Authenticate endpoint; never retried on 401.
pub const LOGIN_PATH: &str = "/api/login";
/// Session-validation probe; fails quietly.
pub const CHECK_TOKEN_PATH: &str = "/api/check-token";

const AUTHORIZATION: &str = "Authorization";
const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

fn summarize_response_body(body: &str) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("len={},digest={:016x}", body.len(), hasher.finish())
}

/// Paths that may be called without a credential.
fn is_public_path(path: &str) -> bool {
    path == LOGIN_PATH || path == CHECK_TOKEN_PATH
}

/// Body text to JSON; empty or unparsable text becomes `{}`.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::Object(Map::new()))
}

fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Fixed delays used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewaySettings {
    /// Pause before the single retry after a 401.
    pub retry_delay: Duration,
    /// Passed to the navigator when a session expires.
    pub redirect_delay: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_millis(catalog_config::DEFAULT_RETRY_DELAY_MS),
            redirect_delay: Duration::from_millis(catalog_config::DEFAULT_REDIRECT_DELAY_MS),
        }
    }
}

impl From<&Config> for GatewaySettings {
    fn from(config: &Config) -> Self {
        Self {
            retry_delay: config.retry_delay(),
            redirect_delay: config.redirect_delay(),
        }
    }
}

/// One call as a domain operation describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Applied after the default headers, replacing same-named ones.
    pub headers: Vec<(String, String)>,
    /// Suppress the gateway's own failure notices.
    pub silent: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
            silent: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }
}

/// Authenticated entry point to the catalog API.
///
/// Cheap to clone; clones share the transport, session store and host hooks.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    session: SessionStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    settings: GatewaySettings,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: SessionStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            session,
            notifier,
            navigator,
            settings: GatewaySettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GatewaySettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn settings(&self) -> GatewaySettings {
        self.settings
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    pub(crate) fn redirect_to_login(&self, delay: Duration) {
        self.navigator.redirect_to_login(delay);
    }

    /// [`Gateway::execute`] with the failure collapsed to `None`.
    pub async fn request(&self, request: ApiRequest) -> Option<Value> {
        self.execute(request).await.ok()
    }

    /// Perform `request` and classify the outcome.
    pub async fn execute(&self, request: ApiRequest) -> GatewayResult<Value> {
        let token = self.session.get_credential()?;
        if token.is_none() && !is_public_path(&request.path) {
            tracing::warn!(path = %request.path, "no credential for protected path");
            self.notify_unless_silent(&request, Notice::error(NOT_AUTHENTICATED));
            self.navigator.redirect_to_login(Duration::ZERO);
            return Err(GatewayError::Unauthenticated);
        }

        let body = request
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let mut response = self.send(&request, token.as_deref(), body.clone()).await?;

        if response.status == 401 && request.path != LOGIN_PATH {
            tracing::debug!(
                path = %request.path,
                attempt = 2,
                delay_ms = self.settings.retry_delay.as_millis() as u64,
                "401 received, retrying once"
            );
            tokio::time::sleep(self.settings.retry_delay).await;

            let token = self.session.get_credential()?;
            response = self.send(&request, token.as_deref(), body).await?;
            if response.status == 401 {
                return Err(self.expire_session(&request));
            }
        }

        let parsed = parse_body(&response.body);
        if response.is_success() {
            return Ok(parsed);
        }

        let message = server_message(&parsed).unwrap_or_else(|| REQUEST_FAILED.to_string());
        tracing::warn!(
            path = %request.path,
            status = response.status,
            body_summary = %summarize_response_body(&response.body),
            "request failed"
        );
        self.notify_unless_silent(&request, Notice::error(message.clone()));
        Err(GatewayError::RequestFailed {
            status: response.status,
            message,
        })
    }

    fn prepare(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
        body: Option<String>,
    ) -> PreparedRequest {
        let mut headers = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];
        if let Some(token) = token {
            headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
        }
        for (name, value) in &request.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }

        PreparedRequest {
            method: request.method,
            path: request.path.clone(),
            headers,
            body,
        }
    }

    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
        body: Option<String>,
    ) -> GatewayResult<RawResponse> {
        let prepared = self.prepare(request, token, body);
        match self.transport.send(&prepared).await {
            Ok(response) => {
                tracing::debug!(path = %request.path, status = response.status, "response received");
                Ok(response)
            }
            Err(e) => Err(self.network_failure(request, e)),
        }
    }

    fn network_failure(&self, request: &ApiRequest, error: TransportError) -> GatewayError {
        tracing::error!(path = %request.path, error = %error, "request did not complete");
        self.notify_unless_silent(request, Notice::error(NETWORK_ERROR));
        GatewayError::Network(error)
    }

    fn expire_session(&self, request: &ApiRequest) -> GatewayError {
        if request.path == CHECK_TOKEN_PATH {
            tracing::debug!("session probe rejected");
            return GatewayError::SessionExpired;
        }

        tracing::warn!(path = %request.path, "retry rejected, session expired");
        match self.session.clear_credential() {
            Ok(true) => tracing::info!("credential cleared"),
            Ok(false) => {}
            Err(e) => tracing::error!(error = %e, "failed to clear credential"),
        }
        self.notify_unless_silent(request, Notice::warning(SESSION_EXPIRED));
        self.navigator.redirect_to_login(self.settings.redirect_delay);
        GatewayError::SessionExpired
    }

    fn notify_unless_silent(&self, request: &ApiRequest, notice: Notice) {
        if !request.silent {
            self.notifier.notify(notice);
        }
    }
}
