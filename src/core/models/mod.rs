pub mod agent;
pub mod graph;
pub mod message;
pub mod provider;
pub mod session;
pub mod skill;
pub mod tool;

pub use agent::{Agent, AgentPayload, Llm};
pub use graph::{GraphConfig, GraphEdge, GraphNode, NodeKind};
pub use message::{ChatRequest, Message, ThoughtProcess};
pub use provider::{Provider, ProviderPayload};
pub use session::{Session, SessionAgent, SessionAgentCreate, SessionCreate, SessionDetail};
pub use skill::{Skill, SkillPayload};
pub use tool::{Tool, ToolPayload};

/// Backend entities addressed by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(Agent, Llm, Provider, Session, SessionAgent, Skill, Tool, Message);

/// Replaces the item with the same id, or appends it.
pub fn upsert<T: Identified>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| existing.id() == item.id()) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}

pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
