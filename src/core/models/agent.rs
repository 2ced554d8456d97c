use serde::{Deserialize, Serialize};

use super::Skill;

pub const DEFAULT_AGENT_ROLE: &str = "assistant";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub model_provider: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub model: Option<Llm>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Agent {
    pub fn skill_ids(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.id.clone()).collect()
    }
}

/// A model the backend discovered for a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Llm {
    pub id: String,
    pub provider_id: String,
    pub remote_id: String,
    #[serde(default = "default_is_llm")]
    pub is_llm: bool,
}

fn default_is_llm() -> bool {
    true
}

/// Body of POST /api/agents and PUT /api/agents/{id}.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgentPayload {
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub model_id: Option<String>,
    pub model_provider: Option<String>,
    pub model_name: Option<String>,
    pub temperature: f64,
    pub system_prompt: String,
    pub skill_ids: Vec<String>,
}
