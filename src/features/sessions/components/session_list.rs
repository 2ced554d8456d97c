use chrono::Utc;
use leptos::prelude::*;
use crate::app::ActiveSession;
use crate::core::services::Api;
use crate::features::sessions::hooks::use_sessions;
use crate::features::sessions::state::{display_title, filter_by_title, updated_label};

#[component]
pub fn SessionList() -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let active = use_context::<ActiveSession>().expect("active session context");
    let hook = use_sessions(api, active);

    let (query, set_query) = signal(String::new());

    view! {
        <aside class="session-list">
            <div class="session-search">
                <input
                    type="search"
                    placeholder="Search sessions..."
                    aria-label="Search sessions"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>
            <div class="session-list-header">
                <span class="section-label">"Sessions"</span>
                <button
                    class="action-btn"
                    title="New Session"
                    prop:disabled=move || hook.creating.get()
                    on:click=move |_| hook.create_session.run(())
                >"+"</button>
            </div>
            <ul class="session-items" role="listbox" aria-label="Chat sessions">
                {move || {
                    if hook.loading.get() && hook.sessions.with(|s| s.is_empty()) {
                        return view! { <li class="hint">"Loading sessions..."</li> }.into_any();
                    }
                    let sessions = hook.sessions.get();
                    let visible = filter_by_title(&sessions, &query.get());
                    if visible.is_empty() {
                        return view! { <li class="hint">"No sessions"</li> }.into_any();
                    }
                    let now = Utc::now();
                    visible.into_iter().map(|session| {
                        let id = session.id.clone();
                        let id_for_class = session.id.clone();
                        let title = display_title(session);
                        let title_for_select = title.clone();
                        let updated = updated_label(session, now);
                        let status = session.status.clone().unwrap_or_default();
                        view! {
                            <li role="option">
                                <button
                                    class="session-item"
                                    class:active=move || active.id.get().as_deref() == Some(id_for_class.as_str())
                                    on:click=move |_| active.select(id.clone(), title_for_select.clone())
                                >
                                    <div class="session-item-top">
                                        <span class="session-title">{title}</span>
                                        <span class="session-time">{updated}</span>
                                    </div>
                                    <span class="session-status">{status}</span>
                                </button>
                            </li>
                        }
                    }).collect::<Vec<_>>().into_any()
                }}
            </ul>
        </aside>
    }
}
