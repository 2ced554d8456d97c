use leptos::prelude::*;
use crate::components::IconBadge;
use crate::features::agents::editor::{models_for_provider, AgentDraft};
use crate::features::agents::state::{skill_counter, Catalog};
use crate::features::registry::icons::skill_icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Agent form shared by the market and the session sidebar. Create mode
/// hides temperature and skills; new agents start with none equipped.
#[component]
pub fn AgentEditor(
    draft: RwSignal<AgentDraft>,
    catalog: RwSignal<Catalog>,
    mode: EditorMode,
    saving: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    #[prop(into)] on_submit: Callback<AgentDraft>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let prefix = if mode == EditorMode::Create { "new-agent" } else { "agent" };
    let prompt_rows = if compact { "5" } else { "8" };
    let field_id = move |name: &str| format!("{}-{}", prefix, name);

    let submit = move |_| {
        let current = draft.get_untracked();
        if mode == EditorMode::Create && !current.can_create() {
            return;
        }
        on_submit.run(current);
    };

    let submit_label = move || match (mode, saving.get()) {
        (EditorMode::Create, true) => "Creating...",
        (EditorMode::Create, false) => "Create Agent",
        (EditorMode::Edit, true) => "Saving...",
        (EditorMode::Edit, false) => "Save Changes",
    };

    view! {
        <div class="form agent-editor" class:compact=compact>
            <label for=field_id("name")>"Agent Name"</label>
            <input
                id=field_id("name")
                type="text"
                placeholder="e.g. Router Agent"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />

            <label for=field_id("role")>"Role"</label>
            <input
                id=field_id("role")
                type="text"
                placeholder="e.g. Orchestrator, Code Generation"
                prop:value=move || draft.with(|d| d.role.clone())
                on:input=move |ev| draft.update(|d| d.role = event_target_value(&ev))
            />

            <label for=field_id("provider")>"Provider"</label>
            <select
                id=field_id("provider")
                prop:value=move || draft.with(|d| d.provider_id.clone())
                on:change=move |ev| draft.update(|d| d.set_provider(&event_target_value(&ev)))
            >
                <option value="">"Select provider"</option>
                {move || catalog.with(|c| c.providers.iter().map(|p| {
                    let id = p.id.clone();
                    let selected_id = p.id.clone();
                    view! {
                        <option
                            value=id
                            selected=move || draft.with(|d| d.provider_id == selected_id)
                        >{p.name.clone()}</option>
                    }
                }).collect::<Vec<_>>())}
            </select>

            <label for=field_id("model")>"LLM Model"</label>
            <select
                id=field_id("model")
                prop:value=move || draft.with(|d| d.model_id.clone())
                prop:disabled=move || draft.with(|d| d.provider_id.is_empty())
                on:change=move |ev| draft.update(|d| d.set_model(&event_target_value(&ev)))
            >
                <option value="">"Select model (refresh in API Keys first)"</option>
                {move || {
                    let provider_id = draft.with(|d| d.provider_id.clone());
                    catalog.with(|c| models_for_provider(&c.llms, &provider_id).into_iter().map(|llm| {
                        let id = llm.id.clone();
                        let selected_id = llm.id.clone();
                        view! {
                            <option
                                value=id
                                selected=move || draft.with(|d| d.model_id == selected_id)
                            >{llm.remote_id.clone()}</option>
                        }
                    }).collect::<Vec<_>>())
                }}
            </select>

            {(mode == EditorMode::Edit).then(|| view! {
                <div class="field-row">
                    <label for=field_id("temperature")>"Temperature"</label>
                    <span class="mono">{move || format!("{:.1}", draft.with(|d| d.temperature))}</span>
                </div>
                <input
                    id=field_id("temperature")
                    type="range"
                    min="0"
                    max="1"
                    step="0.1"
                    prop:value=move || draft.with(|d| d.temperature.to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse::<f64>().unwrap_or(f64::NAN);
                        draft.update(|d| d.set_temperature(value));
                    }
                />
                <div class="range-legend"><span>"Precise"</span><span>"Creative"</span></div>
            })}

            <label for=field_id("prompt")>"System Prompt"</label>
            <textarea
                id=field_id("prompt")
                class="code"
                rows=prompt_rows
                placeholder="Define the agent's behavior and instructions..."
                prop:value=move || draft.with(|d| d.prompt.clone())
                on:input=move |ev| draft.update(|d| d.prompt = event_target_value(&ev))
            ></textarea>

            {(mode == EditorMode::Edit).then(|| view! {
                <span class="field-label">"Equipped Skills"</span>
                <div class="skill-toggles">
                    {move || catalog.with(|c| c.skills.iter().map(|skill| {
                        let id = skill.id.clone();
                        let id_for_class = skill.id.clone();
                        view! {
                            <button
                                class="skill-toggle"
                                class:equipped=move || draft.with(|d| d.is_equipped(&id_for_class))
                                on:click=move |_| draft.update(|d| d.toggle_skill(&id))
                            >
                                <IconBadge icon=skill_icon(&skill.name) small=true />
                                <span>{skill.name.clone()}</span>
                            </button>
                        }
                    }).collect::<Vec<_>>())}
                </div>
                <span class="hint">
                    {move || {
                        let total = catalog.with(|c| c.skills.len());
                        let equipped = draft.with(|d| {
                            catalog.with(|c| c.skills.iter().filter(|s| d.is_equipped(&s.id)).count())
                        });
                        skill_counter(equipped, total)
                    }}
                </span>
            })}

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="form-actions">
                <button
                    class="btn-primary"
                    prop:disabled=move || {
                        saving.get() || (mode == EditorMode::Create && !draft.with(|d| d.can_create()))
                    }
                    on:click=submit
                >{submit_label}</button>
                <button class="btn-secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </div>
    }
}
