use super::{CatalogApi, SETTINGS_PATH, USER_PATH};
use crate::gateway::ApiRequest;
use catalog_types::{Settings, UserUpdate};

impl CatalogApi {
    pub async fn update_user(&self, update: &UserUpdate) -> bool {
        let Ok(body) = serde_json::to_value(update) else {
            return false;
        };
        self.send_with_notice(ApiRequest::put(USER_PATH).body(body), "User updated")
            .await
            .is_some()
    }

    pub async fn update_settings(&self, settings: &Settings) -> bool {
        let Ok(body) = serde_json::to_value(settings) else {
            return false;
        };
        self.send_with_notice(ApiRequest::put(SETTINGS_PATH).body(body), "Settings updated")
            .await
            .is_some()
    }
}
