use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    // Object on most backends, a JSON string on some
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
    #[serde(default)]
    pub credential_config: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolPayload {
    pub name: String,
    pub description: String,
    pub schema: serde_json::Value,
    pub credential_config: Option<serde_json::Value>,
}
