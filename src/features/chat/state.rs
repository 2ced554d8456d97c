use std::collections::HashMap;

use serde_json::Value;

use crate::core::models::{Agent, Message, ThoughtProcess};
use crate::core::time::clock_time;

/// One rendered row of the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEntry {
    User {
        id: String,
        content: String,
    },
    Assistant {
        id: String,
        // Name of the answering agent, when it is known
        agent: Option<String>,
        content: String,
        // Shown collapsed, before `content`
        thought: Option<String>,
        time: Option<String>,
    },
    System {
        id: String,
        content: String,
    },
}

/// Text of an assistant's reasoning block, or `None` when there is nothing to
/// show. Lists join each fragment's `text` field (or the fragment itself)
/// with newlines.
pub fn thought_text(thought: Option<&ThoughtProcess>) -> Option<String> {
    let text = match thought? {
        ThoughtProcess::Text(text) => text.clone(),
        ThoughtProcess::Fragments(fragments) => fragments
            .iter()
            .map(fragment_text)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn fragment_text(fragment: &Value) -> String {
    match fragment.get("text") {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => match fragment {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    }
}

/// Agent id to display name.
pub fn agent_names(agents: &[Agent]) -> HashMap<String, String> {
    agents.iter().map(|a| (a.id.clone(), a.name.clone())).collect()
}

pub fn to_entries(messages: &[Message], names: &HashMap<String, String>) -> Vec<ChatEntry> {
    messages.iter().map(|m| to_entry(m, names)).collect()
}

fn to_entry(message: &Message, names: &HashMap<String, String>) -> ChatEntry {
    let is_system = message.role == "system" || message.msg_type.as_deref() == Some("system");
    if is_system {
        return ChatEntry::System {
            id: message.id.clone(),
            content: message.content.clone(),
        };
    }
    if message.role == "user" {
        return ChatEntry::User {
            id: message.id.clone(),
            content: message.content.clone(),
        };
    }
    ChatEntry::Assistant {
        id: message.id.clone(),
        agent: message.agent_id.as_ref().and_then(|id| names.get(id)).cloned(),
        content: message.content.clone(),
        thought: thought_text(message.thought_process.as_ref()),
        time: clock_time(&message.created_at),
    }
}

/// Send is available only with non-blank input and no send in flight.
pub fn can_send(input: &str, sending: bool) -> bool {
    !sending && !input.trim().is_empty()
}
