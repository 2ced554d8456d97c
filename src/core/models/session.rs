use serde::{Deserialize, Serialize};

use super::Message;

pub const DEFAULT_USER_ID: &str = "default_user";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionDetail {
    #[serde(flatten)]
    pub session: Session,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub session_agents: Vec<SessionAgent>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionCreate {
    pub title: String,
    pub user_id: String,
    pub status: String,
}

impl Default for SessionCreate {
    fn default() -> Self {
        Self {
            title: "New Session".to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            status: "active".to_string(),
        }
    }
}

/// A global agent attached to one session. The override fields are part of
/// the contract but not edited by this UI yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionAgent {
    pub id: String,
    #[serde(default)]
    pub session_id: String,
    pub original_agent_id: String,
    #[serde(default)]
    pub override_system_prompt: Option<String>,
    #[serde(default)]
    pub override_model: Option<String>,
    #[serde(default)]
    pub memory_context: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionAgentCreate {
    pub original_agent_id: String,
}
