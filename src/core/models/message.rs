use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub session_id: String,
    pub role: String, // "user", "assistant", "system"
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub thought_process: Option<ThoughtProcess>,
    #[serde(default)]
    pub msg_type: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// An agent's intermediate reasoning: either one block of text or a list of
/// fragments (usually `{"text": ...}` objects).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ThoughtProcess {
    Text(String),
    Fragments(Vec<serde_json::Value>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}
