use std::collections::{HashMap, HashSet};

use crate::components::Icon;
use crate::core::models::agent::{DEFAULT_AGENT_ROLE, DEFAULT_TEMPERATURE};
use crate::core::models::{Agent, Llm, Provider, SessionAgent, Skill};

pub const NO_MODEL_LABEL: &str = "—";

/// Everything the agent screens select from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub agents: Vec<Agent>,
    pub skills: Vec<Skill>,
    pub providers: Vec<Provider>,
    pub llms: Vec<Llm>,
}

/// Display projection of a global agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCard {
    pub id: String,
    pub name: String,
    pub role: String,
    pub model_id: Option<String>,
    pub provider_id: Option<String>,
    pub model_label: String,
    pub temperature: f64,
    pub prompt: String,
    pub icon: Icon,
    pub skill_ids: Vec<String>,
    // Fields no screen edits, sent back untouched on save
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub model_provider: Option<String>,
    pub model_name: Option<String>,
}

impl AgentCard {
    pub fn from_agent(agent: &Agent) -> Self {
        let role = agent
            .role
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_AGENT_ROLE.to_string());
        Self {
            id: agent.id.clone(),
            name: agent.name.clone(),
            icon: role_icon(agent.role.as_deref().unwrap_or_default()),
            role,
            model_id: agent.model_id.clone().filter(|m| !m.is_empty()),
            provider_id: agent.model.as_ref().map(|m| m.provider_id.clone()),
            model_label: model_label(agent),
            temperature: agent.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            prompt: agent.system_prompt.clone().unwrap_or_default(),
            skill_ids: agent.skill_ids(),
            avatar: agent.avatar.clone(),
            description: agent.description.clone(),
            model_provider: agent.model_provider.clone(),
            model_name: agent.model_name.clone(),
        }
    }
}

fn model_label(agent: &Agent) -> String {
    agent
        .model
        .as_ref()
        .map(|m| m.remote_id.clone())
        .filter(|id| !id.is_empty())
        .or_else(|| agent.model_name.clone().filter(|n| !n.is_empty()))
        .unwrap_or_else(|| NO_MODEL_LABEL.to_string())
}

pub fn role_icon(role: &str) -> Icon {
    match role {
        "Orchestrator" => Icon::Bot,
        "Code Generation" => Icon::Code,
        "Code Review" => Icon::Eye,
        "Information Retrieval" => Icon::Search,
        "Summarization" => Icon::FileText,
        _ => Icon::Bot,
    }
}

/// Session agents resolved through the global agent list, in session-agent
/// order. Links to agents that no longer exist are dropped.
pub fn resolve_roster(session_agents: &[SessionAgent], agents: &[Agent]) -> Vec<Agent> {
    let by_id: HashMap<&str, &Agent> = agents.iter().map(|a| (a.id.as_str(), a)).collect();
    session_agents
        .iter()
        .filter_map(|link| by_id.get(link.original_agent_id.as_str()).map(|a| (*a).clone()))
        .collect()
}

/// Global agents not yet attached to the session.
pub fn unattached_agents<'a>(agents: &'a [Agent], session_agents: &[SessionAgent]) -> Vec<&'a Agent> {
    let attached: HashSet<&str> = session_agents.iter().map(|l| l.original_agent_id.as_str()).collect();
    agents.iter().filter(|a| !attached.contains(a.id.as_str())).collect()
}

pub fn skill_counter(equipped: usize, total: usize) -> String {
    format!("{} of {} skills equipped", equipped, total)
}
