use leptos::prelude::*;
use crate::components::IconBadge;
use crate::core::models::{find_by_id, Skill};
use crate::core::services::Api;
use crate::features::registry::icons::skill_icon;
use crate::features::registry::services::{
    create_skill, delete_skill, load_skills, update_skill, RegistryState,
};
use crate::features::registry::state::{description_preview, SkillDraft};

#[component]
pub fn SkillsView() -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let state = RegistryState::<Skill>::new();
    let (creating, set_creating) = signal(false);

    load_skills(api.clone(), state);

    let selected_skill = Memo::new(move |_| {
        let id = state.selected.get()?;
        state.items.with(|items| find_by_id(items, &id).cloned())
    });

    let api_for_detail = api.clone();
    view! {
        <section class="registry-view skills-view">
            {move || {
                if creating.get() {
                    return view! {
                        <CreateSkillForm
                            api=api.clone()
                            state=state
                            on_close=move || set_creating.set(false)
                        />
                    }.into_any();
                }
                if let Some(skill) = selected_skill.get() {
                    return view! { <SkillDetail api=api_for_detail.clone() skill=skill state=state /> }.into_any();
                }
                view! {
                    <header class="view-header">
                        <div>
                            <h1>"Skills"</h1>
                            <p class="muted">"Reusable capabilities that agents can equip."</p>
                        </div>
                        <button class="btn-primary" on:click=move |_| set_creating.set(true)>"+ New Skill"</button>
                    </header>
                    <div class="card-grid">
                        {move || {
                            if state.loading.get() {
                                return view! { <p class="hint">"Loading skills..."</p> }.into_any();
                            }
                            let skills = state.items.get();
                            if skills.is_empty() {
                                return view! { <p class="hint">"No skills yet"</p> }.into_any();
                            }
                            skills.into_iter().map(|skill| {
                                let id = skill.id.clone();
                                view! {
                                    <button class="card" on:click=move |_| state.selected.set(Some(id.clone()))>
                                        <IconBadge icon=skill_icon(&skill.name) />
                                        <div class="card-body">
                                            <span class="card-title">{skill.name.clone()}</span>
                                            <p class="card-text">{description_preview(skill.description.as_deref())}</p>
                                        </div>
                                    </button>
                                }
                            }).collect::<Vec<_>>().into_any()
                        }}
                    </div>
                }.into_any()
            }}
        </section>
    }
}

#[component]
fn SkillDetail(api: Api, skill: Skill, state: RegistryState<Skill>) -> impl IntoView {
    let draft = RwSignal::new(SkillDraft::from_skill(&skill));
    let icon = skill_icon(&skill.name);
    let name = skill.name.clone();
    let skill_id = skill.id.clone();

    let save = {
        let api = api.clone();
        move |_| update_skill(api.clone(), skill.clone(), draft.get_untracked(), state)
    };

    view! {
        <header class="view-header">
            <button class="icon-btn" aria-label="Back to skills" on:click=move |_| state.selected.set(None)>"←"</button>
            <IconBadge icon=icon />
            <h2>{name}</h2>
            <button
                class="btn-danger"
                prop:disabled=move || state.busy.get()
                on:click=move |_| delete_skill(api.clone(), skill_id.clone(), state)
            >"Delete"</button>
        </header>
        <div class="form">
            <label for="skill-description">"Description"</label>
            <textarea
                id="skill-description"
                rows="3"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>

            <label for="skill-code">"Code"</label>
            <textarea
                id="skill-code"
                class="code"
                rows="12"
                spellcheck="false"
                prop:value=move || draft.with(|d| d.code.clone())
                on:input=move |ev| draft.update(|d| d.code = event_target_value(&ev))
            ></textarea>

            {move || state.error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <button class="btn-primary" prop:disabled=move || state.busy.get() on:click=save>
                {move || if state.busy.get() { "Saving..." } else { "Save Changes" }}
            </button>
        </div>
    }
}

#[component]
fn CreateSkillForm(
    api: Api,
    state: RegistryState<Skill>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (code, set_code) = signal(String::new());

    let create = move |_| {
        create_skill(
            api.clone(),
            name.get_untracked(),
            description.get_untracked(),
            code.get_untracked(),
            state,
            move || on_close.run(()),
        )
    };

    view! {
        <header class="view-header">
            <h2>"Create New Skill"</h2>
            <button class="icon-btn" aria-label="Close form" on:click=move |_| on_close.run(())>"✕"</button>
        </header>
        <div class="form">
            <label for="new-skill-name">"Skill Name"</label>
            <input
                id="new-skill-name"
                type="text"
                placeholder="e.g. WebSearch"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label for="new-skill-description">"Description"</label>
            <textarea
                id="new-skill-description"
                rows="3"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <label for="new-skill-code">"Code"</label>
            <textarea
                id="new-skill-code"
                class="code"
                rows="10"
                spellcheck="false"
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
            ></textarea>

            {move || state.error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="form-actions">
                <button
                    class="btn-primary"
                    prop:disabled=move || state.busy.get() || name.get().trim().is_empty()
                    on:click=create
                >
                    {move || if state.busy.get() { "Creating..." } else { "Create Skill" }}
                </button>
                <button class="btn-secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
            </div>
        </div>
    }
}
