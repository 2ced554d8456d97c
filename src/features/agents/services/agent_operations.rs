use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::console;
use crate::core::models::{upsert, Agent};
use crate::core::services::{fetch_or_empty, Api, ApiClient, Transport};
use crate::features::agents::editor::AgentDraft;
use crate::features::agents::state::Catalog;

/// Agents, skills, providers and models, requested together. Each list
/// degrades to empty on its own, so a failing model list still leaves the
/// agents usable.
pub async fn fetch_catalog<T: Transport>(api: &ApiClient<T>) -> Catalog {
    let (agents, skills, providers, llms) = futures::join!(
        fetch_or_empty("agents", api.list_agents()),
        fetch_or_empty("skills", api.list_skills()),
        fetch_or_empty("providers", api.list_providers()),
        fetch_or_empty("models", api.list_llms()),
    );
    Catalog {
        agents,
        skills,
        providers,
        llms,
    }
}

pub fn load_catalog(api: Api, catalog: RwSignal<Catalog>, loading: RwSignal<bool>) {
    loading.set(true);
    spawn_local(async move {
        let loaded = fetch_catalog(&api).await;
        console::debug(&format!(
            "Loaded {} agents, {} skills, {} providers, {} models",
            loaded.agents.len(),
            loaded.skills.len(),
            loaded.providers.len(),
            loaded.llms.len()
        ));
        catalog.set(loaded);
        loading.set(false);
    });
}

// PUT the full draft and replace the agent in the catalog with the server copy
pub fn save_agent(
    api: Api,
    agent_id: String,
    draft: AgentDraft,
    catalog: RwSignal<Catalog>,
    saving: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    saving.set(true);
    error.set(None);
    spawn_local(async move {
        match api.update_agent(&agent_id, &draft.to_payload()).await {
            Ok(agent) => {
                console::log(&format!("Saved agent {}", agent.id));
                catalog.update(|c| upsert(&mut c.agents, agent));
            }
            Err(e) => {
                console::error(&format!("Failed to save agent {}: {}", agent_id, e));
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    });
}

// POST a new agent; it is prepended to the list and handed to `on_created`
pub fn create_agent(
    api: Api,
    draft: AgentDraft,
    catalog: RwSignal<Catalog>,
    saving: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_created: impl Fn(Agent) + 'static,
) {
    if !draft.can_create() || saving.get_untracked() {
        return;
    }
    saving.set(true);
    error.set(None);
    spawn_local(async move {
        let mut payload = draft.to_payload();
        payload.skill_ids.clear();
        match api.create_agent(&payload).await {
            Ok(agent) => {
                console::log(&format!("Created agent {}", agent.id));
                catalog.update(|c| c.agents.insert(0, agent.clone()));
                on_created(agent);
            }
            Err(e) => {
                console::error(&format!("Failed to create agent: {}", e));
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    });
}
