//! Request gateway and typed operations for the catalog API.
//!
//! - [`Gateway`]: bearer auth, one retry on 401, session expiry, notices
//! - [`CatalogApi`]: tools, categories, tokens, account and auth operations
//! - [`Transport`]: the HTTP seam, with [`ReqwestTransport`] in production

pub mod api;
mod error;
mod gateway;
mod notice;
mod transport;

pub use api::CatalogApi;
pub use error::{GatewayError, GatewayResult, TransportError, TransportResult};
pub use gateway::{ApiRequest, Gateway, GatewaySettings, CHECK_TOKEN_PATH, LOGIN_PATH};
pub use notice::{
    LoggingNavigator, Navigator, Notice, NoticeLevel, Notifier, TracingNotifier, LOGIN_FAILED,
    NETWORK_ERROR, NOT_AUTHENTICATED, REQUEST_FAILED, SESSION_EXPIRED,
};
pub use transport::{Method, PreparedRequest, RawResponse, ReqwestTransport, Transport};

#[cfg(test)]
mod tests;
