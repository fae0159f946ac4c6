use super::{CatalogApi, TOKENS_PATH};
use crate::gateway::ApiRequest;
use serde_json::Value;

impl CatalogApi {
    /// Issue a new API token. The response is returned as sent; servers
    /// differ in whether they echo the token record.
    pub async fn add_api_token(&self) -> Option<Value> {
        self.send_with_notice(ApiRequest::post(TOKENS_PATH), "Token created")
            .await
    }

    pub async fn delete_api_token(&self, id: &str) -> bool {
        self.send_with_notice(
            ApiRequest::delete(format!("{TOKENS_PATH}/{id}")),
            "Token deleted",
        )
        .await
        .is_some()
    }
}
