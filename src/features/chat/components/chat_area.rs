use std::collections::HashMap;

use leptos::prelude::*;
use crate::app::ActiveSession;
use crate::core::services::{Api, RequestGeneration};
use crate::features::chat::components::MessageBubble;
use crate::features::chat::services::{load_agent_names, load_session_detail, send_message, ChatState, MESSAGES_CONTAINER_ID};
use crate::features::chat::state::{can_send, to_entries};

#[component]
pub fn ChatArea(#[prop(into)] on_view_topology: Callback<()>) -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let active = use_context::<ActiveSession>().expect("active session context");

    let state = ChatState::new();
    let generation = RequestGeneration::new();
    let (input, set_input) = signal(String::new());
    let names = RwSignal::new(HashMap::<String, String>::new());

    load_agent_names(api.clone(), names);

    // Reload whenever the active session changes
    {
        let api = api.clone();
        let generation = generation.clone();
        Effect::new(move |_| {
            let session_id = active.id.get();
            load_session_detail(api.clone(), generation.begin(), session_id, state);
        });
    }

    let submit = Callback::new(move |_: ()| {
        let text = input.get_untracked();
        if !can_send(&text, state.sending.get_untracked()) {
            return;
        }
        let Some(session_id) = active.id.get_untracked() else {
            return;
        };
        send_message(
            api.clone(),
            generation.begin(),
            session_id,
            text.trim().to_string(),
            state,
            move || set_input.set(String::new()),
        );
    });

    let header_title = move || {
        state
            .title
            .get()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| active.title.get())
    };

    view! {
        <section class="chat-area">
            <header class="chat-header">
                <div class="chat-title">
                    {move || if active.id.get().is_some() {
                        view! { <h2>{header_title}</h2> }.into_any()
                    } else {
                        view! { <h2 class="muted">"No session selected"</h2> }.into_any()
                    }}
                </div>
                <button
                    class="btn-secondary"
                    prop:disabled=move || active.id.get().is_none()
                    on:click=move |_| on_view_topology.run(())
                >"View Topology"</button>
            </header>

            <div class="chat-messages" id=MESSAGES_CONTAINER_ID>
                {move || {
                    if state.loading.get() && state.messages.with(|m| m.is_empty()) {
                        return view! { <div class="hint">"Loading messages..."</div> }.into_any();
                    }
                    let entries = names.with(|n| state.messages.with(|m| to_entries(m, n)));
                    if entries.is_empty() {
                        return view! { <div class="hint">"No messages yet"</div> }.into_any();
                    }
                    entries
                        .into_iter()
                        .map(|entry| view! { <MessageBubble entry=entry /> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            {move || state.error.get().map(|e| view! {
                <div class="chat-error" role="alert">{format!("Failed to send: {}", e)}</div>
            })}

            <div class="chat-input">
                <textarea
                    rows="2"
                    placeholder="Message the orchestrator... (Shift+Enter for newline)"
                    prop:value=move || input.get()
                    prop:disabled=move || active.id.get().is_none()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                ></textarea>
                <button
                    class="btn-primary"
                    prop:disabled=move || active.id.get().is_none() || !can_send(&input.get(), state.sending.get())
                    on:click=move |_| submit.run(())
                >
                    {move || if state.sending.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </section>
    }
}
