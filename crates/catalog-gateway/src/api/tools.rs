use super::{
    CatalogApi, ADMIN_ALL_PATH, TOOLS_EXPORT_PATH, TOOLS_IMPORT_PATH, TOOLS_PATH,
    TOOLS_SORT_PATH,
};
use crate::gateway::ApiRequest;
use catalog_types::{fill_missing_ids, AdminData, Tool, ToolListing, ToolSortUpdate};
use serde_json::{json, Value};

fn tool_path(id: &str) -> String {
    format!("{TOOLS_PATH}/{id}")
}

/// Tool body for create: the server assigns the id.
fn tool_body(tool: &Tool) -> Option<Value> {
    match serde_json::to_value(tool) {
        Ok(Value::Object(mut map)) => {
            map.remove("id");
            Some(Value::Object(map))
        }
        Ok(other) => Some(other),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode tool");
            None
        }
    }
}

impl CatalogApi {
    /// Public listing; falls back to an empty listing when unavailable.
    pub async fn fetch_list(&self) -> ToolListing {
        let Some(value) = self.gateway.request(ApiRequest::get(TOOLS_PATH)).await else {
            return ToolListing::fallback();
        };

        match serde_json::from_value::<ToolListing>(value) {
            Ok(mut listing) => {
                listing.fill_missing_ids();
                tracing::debug!(tools = listing.tools.len(), "fetched listing");
                listing
            }
            Err(e) => {
                tracing::warn!(error = %e, "unexpected listing shape");
                ToolListing::fallback()
            }
        }
    }

    pub async fn fetch_admin_data(&self) -> Option<AdminData> {
        let value = self.gateway.request(ApiRequest::get(ADMIN_ALL_PATH)).await?;
        match serde_json::from_value::<AdminData>(value) {
            Ok(mut data) => {
                fill_missing_ids(&mut data.tools);
                Some(data)
            }
            Err(e) => {
                tracing::warn!(error = %e, "unexpected admin data shape");
                None
            }
        }
    }

    pub async fn add_tool(&self, tool: &Tool) -> Option<Value> {
        let body = tool_body(tool)?;
        self.send_with_notice(ApiRequest::post(TOOLS_PATH).body(body), "Tool added")
            .await
    }

    pub async fn update_tool(&self, tool: &Tool) -> Option<Value> {
        let body = serde_json::to_value(tool).ok()?;
        self.send_with_notice(ApiRequest::put(tool_path(&tool.id)).body(body), "Tool updated")
            .await
    }

    pub async fn delete_tool(&self, id: &str) -> bool {
        self.send_with_notice(ApiRequest::delete(tool_path(id)), "Tool deleted")
            .await
            .is_some()
    }

    /// Delete each id in turn; returns how many succeeded.
    pub async fn bulk_delete_tools(&self, ids: &[String]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let mut done = 0;
        for id in ids {
            if self.gateway.request(ApiRequest::delete(tool_path(id))).await.is_some() {
                done += 1;
            }
        }
        self.notify_summary(done, ids.len(), "Deleted");
        done
    }

    /// Clear the logo of each tool so the server fetches it again.
    pub async fn bulk_reset_logos(&self, tools: &[Tool]) -> usize {
        if tools.is_empty() {
            return 0;
        }
        let mut done = 0;
        for tool in tools {
            let mut reset = tool.clone();
            reset.logo.clear();
            let Ok(body) = serde_json::to_value(&reset) else {
                continue;
            };
            let request = ApiRequest::put(tool_path(&reset.id)).body(body);
            if self.gateway.request(request).await.is_some() {
                done += 1;
            }
        }
        self.notify_summary(done, tools.len(), "Reset logo for");
        done
    }

    /// Persist a new order; the server receives ids in ascending `sort`.
    pub async fn update_tools_sort(&self, updates: &[ToolSortUpdate]) -> bool {
        let mut ordered: Vec<&ToolSortUpdate> = updates.iter().collect();
        ordered.sort_by_key(|u| u.sort);
        let ids: Vec<&str> = ordered.iter().map(|u| u.id.as_str()).collect();

        let request = ApiRequest::put(TOOLS_SORT_PATH).body(json!({ "ids": ids }));
        self.send_with_notice(request, "Sort order updated")
            .await
            .is_some()
    }

    /// Server export payload, unchanged.
    pub async fn export_tools(&self) -> Option<Value> {
        self.send_with_notice(ApiRequest::get(TOOLS_EXPORT_PATH), "Export succeeded")
            .await
    }

    /// Replace the catalog with `payload`, sent as-is.
    pub async fn import_tools(&self, payload: &Value) -> bool {
        let request = ApiRequest::post(TOOLS_IMPORT_PATH).body(payload.clone());
        self.send_with_notice(request, "Import succeeded")
            .await
            .is_some()
    }
}
