//! Login, logout and session probing.

use super::CatalogApi;
use crate::error::GatewayError;
use crate::gateway::{ApiRequest, CHECK_TOKEN_PATH, LOGIN_PATH};
use crate::notice::{Notice, LOGIN_FAILED, REQUEST_FAILED};
use catalog_types::{LoginRequest, LoginResponse};

impl CatalogApi {
    /// Authenticate and store the issued credential.
    ///
    /// Any previous credential is replaced. On failure storage is left
    /// untouched and a failed response carrying the reason is returned.
    pub async fn login(&self, name: &str, password: &str) -> LoginResponse {
        let body = LoginRequest {
            name: name.to_string(),
            password: password.to_string(),
        };
        let response = match serde_json::to_value(&body) {
            Ok(body) => self.request_login(body).await,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode login request");
                LoginResponse::failed(LOGIN_FAILED)
            }
        };

        let Some(token) = response.token().map(str::to_string) else {
            let message = if response.message.is_empty() {
                LOGIN_FAILED.to_string()
            } else {
                response.message
            };
            tracing::info!(user = %name, "login rejected");
            self.gateway.notify(Notice::error(message.clone()));
            return LoginResponse::failed(message);
        };

        let session = self.gateway.session();
        let stored = session
            .clear_credential()
            .and_then(|_| session.set_credential(&token));
        if let Err(e) = stored {
            tracing::error!(error = %e, "failed to store credential");
            self.gateway.notify(Notice::error(LOGIN_FAILED));
            return LoginResponse::failed(LOGIN_FAILED);
        }

        tracing::info!(user = %name, "logged in");
        self.gateway.notify(Notice::success("Logged in"));
        response
    }

    async fn request_login(&self, body: serde_json::Value) -> LoginResponse {
        let request = ApiRequest::post(LOGIN_PATH).body(body).silent();
        match self.gateway.execute(request).await {
            Ok(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "unexpected login response shape");
                LoginResponse::failed(LOGIN_FAILED)
            }),
            Err(GatewayError::RequestFailed { message, .. }) if message != REQUEST_FAILED => {
                LoginResponse::failed(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login request failed");
                LoginResponse::failed(LOGIN_FAILED)
            }
        }
    }

    /// Drop the credential and send the user to login.
    ///
    /// Returns whether a credential was present.
    pub async fn logout(&self) -> bool {
        let had_credential = match self.gateway.session().clear_credential() {
            Ok(had) => had,
            Err(e) => {
                tracing::error!(error = %e, "failed to clear credential");
                false
            }
        };
        tracing::info!(had_credential, "logged out");
        self.gateway.notify(Notice::info("Logged out"));
        self.gateway
            .redirect_to_login(self.gateway.settings().redirect_delay);
        had_credential
    }

    /// Whether the stored credential is still accepted. Quiet on failure.
    pub async fn check_login(&self) -> bool {
        match self.gateway.session().get_credential() {
            Ok(Some(_)) => {}
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read credential");
                return false;
            }
        }

        let request = ApiRequest::get(CHECK_TOKEN_PATH).silent();
        match self.gateway.execute(request).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "session probe failed");
                false
            }
        }
    }
}
