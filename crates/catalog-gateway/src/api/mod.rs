//! Typed operations over the [`Gateway`].
//!
//! Each method maps to one resource/action pair on the server. Operations
//! never fail loudly: failures were already reported by the gateway, so
//! callers get `None`, `false` or a fallback value.

mod account;
mod auth;
mod catelog;
mod tokens;
mod tools;

use crate::error::GatewayResult;
use crate::gateway::{ApiRequest, Gateway, GatewaySettings};
use crate::notice::{Navigator, Notice, Notifier};
use crate::transport::ReqwestTransport;
use catalog_config::Config;
use catalog_storage::SessionStore;
use serde_json::Value;
use std::sync::Arc;

pub const TOOLS_PATH: &str = "/api/tools";
pub const TOOLS_SORT_PATH: &str = "/api/tools/sort";
pub const TOOLS_EXPORT_PATH: &str = "/api/tools/export";
pub const TOOLS_IMPORT_PATH: &str = "/api/tools/import";
pub const ADMIN_ALL_PATH: &str = "/api/admin/all";
pub const CATELOG_PATH: &str = "/api/admin/catelog";
pub const TOKENS_PATH: &str = "/api/admin/tokens";
pub const USER_PATH: &str = "/api/admin/user";
pub const SETTINGS_PATH: &str = "/api/admin/settings";

/// Catalog API client.
#[derive(Clone, Debug)]
pub struct CatalogApi {
    gateway: Gateway,
}

impl CatalogApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Client over `reqwest` using the configured base URL and delays.
    pub fn from_config(
        config: &Config,
        session: SessionStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> GatewayResult<Self> {
        let transport = ReqwestTransport::new(&config.api_url()?, config.request_timeout())?;
        let gateway = Gateway::new(Arc::new(transport), session, notifier, navigator)
            .with_settings(GatewaySettings::from(config));
        Ok(Self::new(gateway))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn session(&self) -> &SessionStore {
        self.gateway.session()
    }

    /// Send `request`, emitting `success` when it went through.
    async fn send_with_notice(&self, request: ApiRequest, success: &str) -> Option<Value> {
        let value = self.gateway.request(request).await?;
        self.gateway.notify(Notice::success(success));
        Some(value)
    }

    fn notify_summary(&self, done: usize, total: usize, action: &str) {
        let message = format!("{action} {done} of {total} tools");
        if done == total {
            self.gateway.notify(Notice::success(message));
        } else {
            self.gateway.notify(Notice::warning(message));
        }
    }
}
