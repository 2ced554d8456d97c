use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::console;
use crate::core::models::{upsert, Skill, Tool};
use crate::core::services::{fetch_or_empty, Api, ApiClient, ApiError, Transport};
use super::state::{apply_deletion, new_skill_payload, new_tool_payload, SkillDraft, ToolDraft};

/// Signals shared by the skills and tools screens.
pub struct RegistryState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub selected: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

// Signals are Copy regardless of `T`; a derive would demand `T: Copy`.
impl<T: Send + Sync + 'static> Clone for RegistryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RegistryState<T> {}

impl<T: Send + Sync + 'static> RegistryState<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            selected: RwSignal::new(None),
            loading: RwSignal::new(true),
            busy: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }
}

pub async fn save_tool<T: Transport>(api: &ApiClient<T>, base: &Tool, draft: &ToolDraft) -> Result<Tool, ApiError> {
    api.update_tool(&base.id, &draft.merge_into(base)).await
}

pub async fn save_skill<T: Transport>(api: &ApiClient<T>, base: &Skill, draft: &SkillDraft) -> Result<Skill, ApiError> {
    api.update_skill(&base.id, &draft.merge_into(base)).await
}

// Skills

pub fn load_skills(api: Api, state: RegistryState<Skill>) {
    state.loading.set(true);
    spawn_local(async move {
        let skills = fetch_or_empty("skills", api.list_skills()).await;
        state.items.set(skills);
        state.loading.set(false);
    });
}

pub fn update_skill(api: Api, base: Skill, draft: SkillDraft, state: RegistryState<Skill>) {
    state.busy.set(true);
    state.error.set(None);
    spawn_local(async move {
        match save_skill(&api, &base, &draft).await {
            Ok(saved) => state.items.update(|items| upsert(items, saved)),
            Err(e) => {
                console::error(&format!("Failed to save skill {}: {}", base.id, e));
                state.error.set(Some(e.to_string()));
            }
        }
        state.busy.set(false);
    });
}

pub fn create_skill(
    api: Api,
    name: String,
    description: String,
    code: String,
    state: RegistryState<Skill>,
    on_created: impl Fn() + 'static,
) {
    if name.trim().is_empty() {
        return;
    }
    state.busy.set(true);
    state.error.set(None);
    spawn_local(async move {
        match api.create_skill(&new_skill_payload(&name, &description, &code)).await {
            Ok(skill) => {
                console::log(&format!("Created skill {}", skill.id));
                let id = skill.id.clone();
                state.items.update(|items| items.push(skill));
                state.selected.set(Some(id));
                on_created();
            }
            Err(e) => {
                console::error(&format!("Failed to create skill: {}", e));
                state.error.set(Some(e.to_string()));
            }
        }
        state.busy.set(false);
    });
}

pub fn delete_skill(api: Api, skill_id: String, state: RegistryState<Skill>) {
    state.busy.set(true);
    spawn_local(async move {
        match api.delete_skill(&skill_id).await {
            Ok(_) => {
                let mut selected = state.selected.get_untracked();
                state.items.update(|items| apply_deletion(items, &mut selected, &skill_id));
                state.selected.set(selected);
            }
            Err(e) => console::error(&format!("Failed to delete skill {}: {}", skill_id, e)),
        }
        state.busy.set(false);
    });
}

// Tools

pub fn load_tools(api: Api, state: RegistryState<Tool>) {
    state.loading.set(true);
    spawn_local(async move {
        let tools = fetch_or_empty("tools", api.list_tools()).await;
        state.items.set(tools);
        state.loading.set(false);
    });
}

pub fn update_tool(api: Api, base: Tool, draft: ToolDraft, state: RegistryState<Tool>) {
    state.busy.set(true);
    state.error.set(None);
    spawn_local(async move {
        match save_tool(&api, &base, &draft).await {
            Ok(saved) => state.items.update(|items| upsert(items, saved)),
            Err(e) => {
                console::error(&format!("Failed to save tool {}: {}", base.id, e));
                state.error.set(Some(e.to_string()));
            }
        }
        state.busy.set(false);
    });
}

pub fn create_tool(api: Api, name: String, state: RegistryState<Tool>) {
    if name.trim().is_empty() {
        return;
    }
    state.busy.set(true);
    state.error.set(None);
    spawn_local(async move {
        match api.create_tool(&new_tool_payload(&name)).await {
            Ok(tool) => {
                console::log(&format!("Created tool {}", tool.id));
                let id = tool.id.clone();
                state.items.update(|items| items.push(tool));
                state.selected.set(Some(id));
            }
            Err(e) => {
                console::error(&format!("Failed to create tool: {}", e));
                state.error.set(Some(e.to_string()));
            }
        }
        state.busy.set(false);
    });
}

pub fn delete_tool(api: Api, tool_id: String, state: RegistryState<Tool>) {
    state.busy.set(true);
    spawn_local(async move {
        match api.delete_tool(&tool_id).await {
            Ok(_) => {
                let mut selected = state.selected.get_untracked();
                state.items.update(|items| apply_deletion(items, &mut selected, &tool_id));
                state.selected.set(selected);
            }
            Err(e) => console::error(&format!("Failed to delete tool {}: {}", tool_id, e)),
        }
        state.busy.set(false);
    });
}
