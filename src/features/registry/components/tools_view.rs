use leptos::prelude::*;
use crate::components::IconBadge;
use crate::core::models::{find_by_id, Tool};
use crate::core::services::Api;
use crate::features::registry::icons::tool_icon;
use crate::features::registry::services::{create_tool, delete_tool, load_tools, update_tool, RegistryState};
use crate::features::registry::state::{description_preview, filter_tools, ToolDraft};

#[component]
pub fn ToolsView() -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let state = RegistryState::<Tool>::new();
    let (query, set_query) = signal(String::new());
    let (new_name, set_new_name) = signal(String::new());

    load_tools(api.clone(), state);

    let selected_tool = Memo::new(move |_| {
        let id = state.selected.get()?;
        state.items.with(|items| find_by_id(items, &id).cloned())
    });

    let create = {
        let api = api.clone();
        move |_| {
            create_tool(api.clone(), new_name.get_untracked(), state);
            set_new_name.set(String::new());
        }
    };

    view! {
        <section class="registry-view tools-view">
            <aside class="tool-list">
                <div class="list-search">
                    <input
                        type="search"
                        placeholder="Search tools..."
                        aria-label="Search tools"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </div>
                <div class="list-header">
                    <span class="section-label">"Tools"</span>
                </div>
                <div class="new-item">
                    <input
                        type="text"
                        placeholder="New tool name"
                        aria-label="New tool name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <button
                        class="action-btn"
                        aria-label="New tool"
                        prop:disabled=move || state.busy.get() || new_name.get().trim().is_empty()
                        on:click=create
                    >"+"</button>
                </div>
                <ul role="listbox" aria-label="Tool list">
                    {move || {
                        if state.loading.get() {
                            return view! { <li class="hint">"Loading tools..."</li> }.into_any();
                        }
                        let tools = state.items.get();
                        let visible = filter_tools(&tools, &query.get());
                        if visible.is_empty() {
                            return view! { <li class="hint">"No tools found"</li> }.into_any();
                        }
                        visible.into_iter().map(|tool| {
                            let id = tool.id.clone();
                            let id_for_class = tool.id.clone();
                            view! {
                                <li role="option">
                                    <button
                                        class="list-item"
                                        class:active=move || state.selected.get().as_deref() == Some(id_for_class.as_str())
                                        on:click=move |_| state.selected.set(Some(id.clone()))
                                    >
                                        <IconBadge icon=tool_icon(&tool.name) small=true />
                                        <div class="list-item-body">
                                            <span class="list-item-title">{tool.name.clone()}</span>
                                            <span class="list-item-text">{description_preview(tool.description.as_deref())}</span>
                                        </div>
                                    </button>
                                </li>
                            }
                        }).collect::<Vec<_>>().into_any()
                    }}
                </ul>
            </aside>

            {move || match selected_tool.get() {
                Some(tool) => view! { <ToolEditor api=api.clone() tool=tool state=state /> }.into_any(),
                None => view! {
                    <div class="empty-detail">
                        <p class="hint">"Select a tool to view its schema"</p>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ToolEditor(api: Api, tool: Tool, state: RegistryState<Tool>) -> impl IntoView {
    let draft = RwSignal::new(ToolDraft::from_tool(&tool));
    let icon = tool_icon(&tool.name);
    let name = tool.name.clone();
    let tool_id = tool.id.clone();

    let discard = {
        let tool = tool.clone();
        move |_| draft.set(ToolDraft::from_tool(&tool))
    };
    let save = {
        let api = api.clone();
        move |_| update_tool(api.clone(), tool.clone(), draft.get_untracked(), state)
    };

    view! {
        <section class="tool-editor" aria-label="Tool editor">
            <header class="view-header">
                <IconBadge icon=icon />
                <h2>{name.clone()}</h2>
                <button
                    class="btn-danger"
                    aria-label=format!("Delete {}", name)
                    prop:disabled=move || state.busy.get()
                    on:click=move |_| delete_tool(api.clone(), tool_id.clone(), state)
                >"Delete"</button>
            </header>
            <div class="form">
                <label for="tool-description">"Description"</label>
                <textarea
                    id="tool-description"
                    rows="2"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>

                <label for="tool-schema">"Schema / Parameters"</label>
                <textarea
                    id="tool-schema"
                    class="code"
                    rows="12"
                    spellcheck="false"
                    prop:value=move || draft.with(|d| d.schema_text.clone())
                    on:input=move |ev| draft.update(|d| d.schema_text = event_target_value(&ev))
                ></textarea>

                {move || state.error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <div class="form-actions">
                    <button class="btn-primary" prop:disabled=move || state.busy.get() on:click=save>
                        {move || if state.busy.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                    <button class="btn-secondary" on:click=discard>"Discard"</button>
                </div>
            </div>
        </section>
    }
}
