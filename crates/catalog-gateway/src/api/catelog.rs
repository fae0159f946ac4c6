use super::{CatalogApi, CATELOG_PATH};
use crate::gateway::ApiRequest;
use catalog_types::NewCategory;
use serde_json::Value;

fn catelog_path(id: &str) -> String {
    format!("{CATELOG_PATH}/{id}")
}

impl CatalogApi {
    pub async fn add_catelog(&self, category: &NewCategory) -> Option<Value> {
        let body = serde_json::to_value(category).ok()?;
        self.send_with_notice(ApiRequest::post(CATELOG_PATH).body(body), "Category added")
            .await
    }

    pub async fn update_catelog(&self, id: &str, category: &NewCategory) -> bool {
        let Ok(body) = serde_json::to_value(category) else {
            return false;
        };
        self.send_with_notice(
            ApiRequest::put(catelog_path(id)).body(body),
            "Category updated",
        )
        .await
        .is_some()
    }

    pub async fn delete_catelog(&self, id: &str) -> bool {
        self.send_with_notice(ApiRequest::delete(catelog_path(id)), "Category deleted")
            .await
            .is_some()
    }
}
