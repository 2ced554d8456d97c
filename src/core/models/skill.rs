use serde::{Deserialize, Serialize};

use super::Tool;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl Skill {
    pub fn tool_ids(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.id.clone()).collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillPayload {
    pub name: String,
    pub description: String,
    pub prompt: String,
    pub code: String,
    pub tool_ids: Vec<String>,
}
