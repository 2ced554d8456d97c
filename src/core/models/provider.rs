use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProviderPayload {
    pub name: String,
    pub base_url: String,
    pub api_key: String,
    pub is_active: bool,
}

impl ProviderPayload {
    /// A freshly named provider with blank credentials.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            base_url: String::new(),
            api_key: String::new(),
            is_active: true,
        }
    }
}
