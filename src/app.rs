use leptos::prelude::*;
use crate::components::NavSidebar;
use crate::core::config::AppConfig;
use crate::core::console;
use crate::core::services::ApiClient;
use crate::features::agents::{AgentMarketView, AgentSidebar};
use crate::features::chat::ChatArea;
use crate::features::providers::ApiKeysView;
use crate::features::registry::{SkillsView, ToolsView};
use crate::features::sessions::SessionList;
use crate::features::topology::TopologyModal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Chat,
    Market,
    Skills,
    Tools,
    ApiKeys,
}

impl AppView {
    pub fn all() -> Vec<AppView> {
        vec![
            AppView::Chat,
            AppView::Skills,
            AppView::Tools,
            AppView::ApiKeys,
            AppView::Market,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppView::Chat => "Chat",
            AppView::Market => "Agent Market",
            AppView::Skills => "Skills",
            AppView::Tools => "Tool Registry",
            AppView::ApiKeys => "API Keys",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            AppView::Chat => "💬",
            AppView::Market => "🏪",
            AppView::Skills => "⌘",
            AppView::Tools => "🔧",
            AppView::ApiKeys => "🔑",
        }
    }
}

/// The session that chat, roster and topology follow. The title is cached at
/// selection time so headers render before the detail fetch lands.
#[derive(Clone, Copy)]
pub struct ActiveSession {
    pub id: RwSignal<Option<String>>,
    pub title: RwSignal<String>,
}

impl ActiveSession {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            title: RwSignal::new(String::new()),
        }
    }

    pub fn select(&self, id: String, title: String) {
        self.title.set(title);
        self.id.set(Some(id));
    }

    pub fn clear(&self) {
        self.title.set(String::new());
        self.id.set(None);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    console::set_debug(config.debug);
    console::log(&format!("Agent Orchestra console using backend {}", config.api_base_url));

    provide_context(ApiClient::new(&config));

    let (current_view, set_current_view) = signal(AppView::Chat);
    provide_context(set_current_view);

    let active_session = ActiveSession::new();
    provide_context(active_session);

    let (topology_open, set_topology_open) = signal(false);

    view! {
        <main class="app">
            <NavSidebar current=current_view />
            {move || match current_view.get() {
                AppView::Chat => view! {
                    <SessionList />
                    <ChatArea on_view_topology=move || set_topology_open.set(true) />
                    <AgentSidebar />
                }.into_any(),
                AppView::Market => view! { <AgentMarketView /> }.into_any(),
                AppView::Skills => view! { <SkillsView /> }.into_any(),
                AppView::Tools => view! { <ToolsView /> }.into_any(),
                AppView::ApiKeys => view! { <ApiKeysView /> }.into_any(),
            }}
            <TopologyModal open=topology_open on_close=move || set_topology_open.set(false) />
        </main>
    }
}
