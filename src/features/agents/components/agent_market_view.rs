use leptos::prelude::*;
use crate::components::IconBadge;
use crate::core::models::find_by_id;
use crate::core::services::Api;
use crate::features::agents::components::{AgentEditor, EditorMode};
use crate::features::agents::editor::AgentDraft;
use crate::features::agents::hooks::use_agent_catalog;
use crate::features::agents::services::{create_agent, save_agent};
use crate::features::agents::state::AgentCard;

#[derive(Debug, Clone, PartialEq)]
enum MarketScreen {
    List,
    Create,
    Detail(String),
}

#[component]
pub fn AgentMarketView() -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let hook = use_agent_catalog(api.clone());
    let catalog = hook.catalog;

    let screen = RwSignal::new(MarketScreen::List);
    let draft = RwSignal::new(AgentDraft::new_agent());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let open_detail = move |card: &AgentCard| {
        draft.set(AgentDraft::from_card(card));
        error.set(None);
        screen.set(MarketScreen::Detail(card.id.clone()));
    };

    let on_create = {
        let api = api.clone();
        Callback::new(move |submitted: AgentDraft| {
            create_agent(api.clone(), submitted, catalog, saving, error, move |agent| {
                open_detail(&AgentCard::from_agent(&agent));
            });
        })
    };

    let on_save = Callback::new(move |submitted: AgentDraft| {
        if let MarketScreen::Detail(agent_id) = screen.get_untracked() {
            save_agent(api.clone(), agent_id, submitted, catalog, saving, error);
        }
    });

    let back = Callback::new(move |_: ()| {
        error.set(None);
        screen.set(MarketScreen::List);
    });

    view! {
        <section class="market-view">
            {move || match screen.get() {
                MarketScreen::Create => view! {
                    <header class="view-header">
                        <h2>"Create New Agent"</h2>
                    </header>
                    <AgentEditor
                        draft=draft
                        catalog=catalog
                        mode=EditorMode::Create
                        saving=saving
                        error=error
                        on_submit=on_create
                        on_cancel=back
                    />
                }.into_any(),
                MarketScreen::Detail(agent_id) => {
                    let card = catalog.with(|c| find_by_id(&c.agents, &agent_id).map(AgentCard::from_agent));
                    match card {
                        Some(card) => view! {
                            <header class="view-header">
                                <button class="icon-btn" aria-label="Back to agents" on:click=move |_| back.run(())>"←"</button>
                                <IconBadge icon=card.icon />
                                <div>
                                    <h2>{card.name.clone()}</h2>
                                    <span class="muted">{card.role.clone()}</span>
                                </div>
                            </header>
                            <AgentEditor
                                draft=draft
                                catalog=catalog
                                mode=EditorMode::Edit
                                saving=saving
                                error=error
                                on_submit=on_save
                                on_cancel=back
                            />
                        }.into_any(),
                        None => view! {
                            <p class="hint">"Agent not found"</p>
                            <button class="btn-secondary" on:click=move |_| back.run(())>"Back"</button>
                        }.into_any(),
                    }
                }
                MarketScreen::List => view! {
                    <header class="view-header">
                        <div>
                            <h1>"Agent Market"</h1>
                            <p class="muted">"Configure the agents available to every session."</p>
                        </div>
                        <button
                            class="btn-primary"
                            on:click=move |_| {
                                draft.set(AgentDraft::new_agent());
                                error.set(None);
                                screen.set(MarketScreen::Create);
                            }
                        >"+ Create Agent"</button>
                    </header>
                    <div class="card-grid">
                        {move || {
                            if hook.loading.get() {
                                return view! { <p class="hint">"Loading agents..."</p> }.into_any();
                            }
                            let cards: Vec<AgentCard> = catalog.with(|c| c.agents.iter().map(AgentCard::from_agent).collect());
                            if cards.is_empty() {
                                return view! { <p class="hint">"No agents yet. Create one to get started."</p> }.into_any();
                            }
                            cards.into_iter().map(|card| {
                                let prompt = if card.prompt.is_empty() { "No system prompt".to_string() } else { card.prompt.clone() };
                                let subtitle = format!("{} · {}", card.role, card.model_label);
                                let name = card.name.clone();
                                let icon = card.icon;
                                view! {
                                    <button class="card" on:click=move |_| open_detail(&card)>
                                        <IconBadge icon=icon />
                                        <div class="card-body">
                                            <span class="card-title">{name}</span>
                                            <p class="card-subtitle">{subtitle}</p>
                                            <p class="card-text clamp-2">{prompt}</p>
                                        </div>
                                    </button>
                                }
                            }).collect::<Vec<_>>().into_any()
                        }}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
