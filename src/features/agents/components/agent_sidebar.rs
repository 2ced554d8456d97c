use leptos::prelude::*;
use crate::app::ActiveSession;
use crate::components::IconBadge;
use crate::core::models::SessionAgent;
use crate::core::services::{Api, RequestGeneration};
use crate::features::agents::components::{AgentEditor, EditorMode};
use crate::features::agents::editor::AgentDraft;
use crate::features::agents::hooks::use_agent_catalog;
use crate::features::agents::services::{attach_agent, load_session_agents, save_agent};
use crate::features::agents::state::{resolve_roster, unattached_agents, AgentCard};

/// Right-hand panel of the chat tab: the active session's agent team.
#[component]
pub fn AgentSidebar() -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let active = use_context::<ActiveSession>().expect("active session context");
    let hook = use_agent_catalog(api.clone());
    let catalog = hook.catalog;

    let links = RwSignal::new(Vec::<SessionAgent>::new());
    let attaching = RwSignal::new(false);
    let generation = RequestGeneration::new();

    let editing = RwSignal::new(None::<String>);
    let draft = RwSignal::new(AgentDraft::new_agent());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let (picked, set_picked) = signal(String::new());

    {
        let api = api.clone();
        let generation = generation.clone();
        Effect::new(move |_| {
            let session_id = active.id.get();
            editing.set(None);
            load_session_agents(api.clone(), generation.begin(), session_id, links);
        });
    }

    let roster = Memo::new(move |_| {
        let resolved = links.with(|l| catalog.with(|c| resolve_roster(l, &c.agents)));
        resolved.iter().map(AgentCard::from_agent).collect::<Vec<_>>()
    });

    let attach = {
        let api = api.clone();
        let generation = generation.clone();
        move |_| {
            let agent_id = picked.get_untracked();
            let Some(session_id) = active.id.get_untracked() else {
                return;
            };
            if agent_id.is_empty() {
                return;
            }
            attach_agent(api.clone(), generation.begin(), session_id, agent_id, links, attaching);
            set_picked.set(String::new());
        }
    };

    let on_save = Callback::new(move |submitted: AgentDraft| {
        if let Some(agent_id) = editing.get_untracked() {
            save_agent(api.clone(), agent_id, submitted, catalog, saving, error);
        }
    });
    let back = Callback::new(move |_: ()| {
        error.set(None);
        editing.set(None);
    });

    view! {
        <aside class="agent-sidebar" aria-label="Agent panel">
            {move || {
                let selected = editing.get().and_then(|id| roster.with(|r| r.iter().find(|c| c.id == id).cloned()));
                if let Some(card) = selected {
                    return view! {
                        <button class="link-btn" on:click=move |_| back.run(())>"← Back to team"</button>
                        <div class="agent-heading">
                            <IconBadge icon=card.icon />
                            <div>
                                <h3>{card.name.clone()}</h3>
                                <span class="muted">{card.role.clone()}</span>
                            </div>
                        </div>
                        <AgentEditor
                            draft=draft
                            catalog=catalog
                            mode=EditorMode::Edit
                            saving=saving
                            error=error
                            on_submit=on_save
                            on_cancel=back
                            compact=true
                        />
                    }.into_any();
                }

                view! {
                    <h2 class="section-label">"Agent Team"</h2>
                    <ul class="agent-roster" role="list" aria-label="Agent team">
                        {move || {
                            if active.id.get().is_none() {
                                return view! { <li class="hint">"Select a session"</li> }.into_any();
                            }
                            let cards = roster.get();
                            if cards.is_empty() {
                                return view! { <li class="hint">"No agents in this session"</li> }.into_any();
                            }
                            cards.into_iter().map(|card| {
                                let name = card.name.clone();
                                let role = card.role.clone();
                                let model = card.model_label.clone();
                                let icon = card.icon;
                                view! {
                                    <li>
                                        <button
                                            class="roster-item"
                                            on:click=move |_| {
                                                draft.set(AgentDraft::from_card(&card));
                                                error.set(None);
                                                editing.set(Some(card.id.clone()));
                                            }
                                        >
                                            <IconBadge icon=icon small=true />
                                            <div class="roster-item-body">
                                                <span class="roster-name">{name}</span>
                                                <span class="muted">{role}</span>
                                            </div>
                                            <span class="model-tag">{model}</span>
                                        </button>
                                    </li>
                                }
                            }).collect::<Vec<_>>().into_any()
                        }}
                    </ul>

                    <div class="agent-picker">
                        <select
                            aria-label="Add agent to session"
                            prop:value=move || picked.get()
                            prop:disabled=move || active.id.get().is_none()
                            on:change=move |ev| set_picked.set(event_target_value(&ev))
                        >
                            <option value="">"Add an agent..."</option>
                            {move || {
                                let options = links.with(|l| catalog.with(|c| {
                                    unattached_agents(&c.agents, l)
                                        .into_iter()
                                        .map(|a| (a.id.clone(), a.name.clone()))
                                        .collect::<Vec<_>>()
                                }));
                                options.into_iter().map(|(id, name)| view! {
                                    <option value=id>{name}</option>
                                }).collect::<Vec<_>>()
                            }}
                        </select>
                        <button
                            class="action-btn"
                            prop:disabled=move || attaching.get() || picked.get().is_empty() || active.id.get().is_none()
                            on:click=attach.clone()
                        >
                            {move || if attaching.get() { "Adding..." } else { "Add" }}
                        </button>
                    </div>
                }.into_any()
            }}
        </aside>
    }
}
