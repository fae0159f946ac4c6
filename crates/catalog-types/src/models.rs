use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use uuid::Uuid;

/// Deterministic identifier for records the server sent without one.
///
/// UUIDv5 in the URL namespace, so the same link keeps the same id across
/// reloads.
pub fn stable_id(url: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()).to_string()
}

/// Give every tool without an id one derived from its URL.
///
/// Ids stay unique within `tools`: a derived id already taken by an earlier
/// tool is re-derived from the URL plus an occurrence counter.
pub fn fill_missing_ids(tools: &mut [Tool]) {
    let mut taken: HashSet<String> = tools
        .iter()
        .filter(|t| !t.id.is_empty())
        .map(|t| t.id.clone())
        .collect();

    for tool in tools.iter_mut().filter(|t| t.id.is_empty()) {
        let mut id = stable_id(&tool.url);
        let mut occurrence = 1u32;
        while taken.contains(&id) {
            id = stable_id(&format!("{}#{occurrence}", tool.url));
            occurrence += 1;
        }
        taken.insert(id.clone());
        tool.id = id;
    }
}

/// Ids arrive as strings from some server versions and as integers from
/// others; both normalize to a string, null to empty.
fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// A cataloged link shown to end users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo: String,
    /// Category name (the server's spelling).
    #[serde(default)]
    pub catelog: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    /// Fields this client does not model, kept so payloads pass through
    /// import/export unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        catelog: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            desc: String::new(),
            url: url.into(),
            logo: String::new(),
            catelog: catelog.into(),
            content: None,
            hide: None,
            sort: None,
            extra: Map::new(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hide.unwrap_or(false)
    }

    /// Sort key for admin ordering; missing counts as zero.
    pub fn sort_key(&self) -> i64 {
        self.sort.unwrap_or(0)
    }
}

/// A named grouping of tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
}

/// Body for creating or updating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
}

/// Credential issued to external API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiToken {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: String,
    pub token: String,
    #[serde(default)]
    pub created_at: String,
}

/// Site-level flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_github: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gov_record: Option<String>,
}

impl Settings {
    pub fn is_empty(&self) -> bool {
        self == &Settings::default()
    }
}

/// Public listing returned by `GET /api/tools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolListing {
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub catelogs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<Settings>,
}

impl ToolListing {
    /// What a client shows when the listing could not be fetched.
    pub fn fallback() -> Self {
        Self {
            tools: Vec::new(),
            catelogs: vec![crate::ALL_TOOLS_TAG.to_string()],
            setting: None,
        }
    }

    pub fn fill_missing_ids(&mut self) {
        fill_missing_ids(&mut self.tools);
    }
}

/// Aggregate dataset behind the admin panel (`GET /api/admin/all`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminData {
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub catelogs: Vec<Category>,
    #[serde(default)]
    pub tokens: Vec<ApiToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<Settings>,
}

/// One entry of a bulk reorder; `sort` is the 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSortUpdate {
    pub id: String,
    pub sort: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginData>,
}

impl LoginResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// The issued token, only when the server reports success.
    pub fn token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.data
            .as_ref()
            .map(|d| d.token.as_str())
            .filter(|t| !t.is_empty())
    }
}

/// Body for `PUT /api/admin/user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
}
