use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::console;
use crate::core::models::{ChatRequest, Message, SessionDetail};
use crate::core::services::{fetch_current, fetch_or_empty, Api, ApiClient, ApiError, GenerationTicket, Transport};
use super::state::agent_names;

pub const MESSAGES_CONTAINER_ID: &str = "chat-messages";

/// Signals backing the chat transcript.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub messages: RwSignal<Vec<Message>>,
    pub title: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub sending: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            title: RwSignal::new(None),
            loading: RwSignal::new(false),
            sending: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn apply(&self, detail: SessionDetail) {
        self.title.set(detail.session.title);
        self.messages.set(detail.messages);
    }
}

/// Posts the message, then re-fetches the whole session. The transcript is
/// only ever replaced by the re-fetched detail, never appended locally.
pub async fn send_and_refresh<T: Transport>(
    api: &ApiClient<T>,
    session_id: &str,
    text: &str,
) -> Result<SessionDetail, ApiError> {
    let request = ChatRequest {
        session_id: session_id.to_string(),
        message: text.to_string(),
    };
    api.send_message(&request).await?;
    api.get_session(session_id).await
}

/// Session detail for the current generation, or `None` once a newer load
/// has started.
pub async fn fetch_session_detail<T: Transport>(
    api: &ApiClient<T>,
    ticket: &GenerationTicket,
    session_id: &str,
) -> Option<Result<SessionDetail, ApiError>> {
    fetch_current(ticket, api.get_session(session_id)).await
}

// Load session detail for the chat area
pub fn load_session_detail(api: Api, ticket: GenerationTicket, session_id: Option<String>, state: ChatState) {
    let Some(session_id) = session_id else {
        state.messages.set(Vec::new());
        state.title.set(None);
        state.loading.set(false);
        return;
    };

    state.loading.set(true);
    state.error.set(None);
    spawn_local(async move {
        let Some(result) = fetch_session_detail(&api, &ticket, &session_id).await else {
            return;
        };
        match result {
            Ok(detail) => {
                state.apply(detail);
                scroll_to_bottom_soon();
            }
            Err(e) => {
                console::error(&format!("Failed to load session {}: {}", session_id, e));
                state.messages.set(Vec::new());
            }
        }
        state.loading.set(false);
    });
}

// Agent names for labelling replies; a failed fetch leaves replies unnamed
pub fn load_agent_names(api: Api, names: RwSignal<HashMap<String, String>>) {
    spawn_local(async move {
        let agents = fetch_or_empty("agents", api.list_agents()).await;
        names.set(agent_names(&agents));
    });
}

// Send a message and replace the transcript with the re-fetched detail
pub fn send_message(
    api: Api,
    ticket: GenerationTicket,
    session_id: String,
    text: String,
    state: ChatState,
    on_sent: impl Fn() + 'static,
) {
    state.sending.set(true);
    state.error.set(None);
    spawn_local(async move {
        match send_and_refresh(&api, &session_id, &text).await {
            Ok(detail) => {
                on_sent();
                if ticket.is_current() {
                    state.apply(detail);
                    scroll_to_bottom_soon();
                }
            }
            Err(e) => {
                console::error(&format!("Failed to send message to {}: {}", session_id, e));
                state.error.set(Some(e.to_string()));
            }
        }
        state.sending.set(false);
    });
}

// Helper: sticky scroll to bottom for a container id
pub fn scroll_to_bottom(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(el) = doc.get_element_by_id(id) {
                use wasm_bindgen::JsCast;
                if let Ok(div) = el.dyn_into::<web_sys::HtmlElement>() {
                    div.set_scroll_top(div.scroll_height());
                }
            }
        }
    }
}

// Rendering lands a frame or two after the signal update
fn scroll_to_bottom_soon() {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(32).await;
        scroll_to_bottom(MESSAGES_CONTAINER_ID);
        gloo_timers::future::TimeoutFuture::new(160).await;
        scroll_to_bottom(MESSAGES_CONTAINER_ID);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::testing::{client, RecordingTransport};
    use crate::core::services::{Method, RequestGeneration};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn send_posts_then_refetches_session() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Post, "/api/chat/send", 200, r#"{"status":"queued"}"#);
        transport.respond(
            Method::Get,
            "/api/sessions/S1",
            200,
            r#"{"id":"S1","title":"Debug","messages":[
                {"id":"m1","role":"user","content":"hello"},
                {"id":"m2","role":"assistant","content":"hi there"}
            ]}"#,
        );
        let api = client(&transport);

        let detail = block_on(send_and_refresh(&api, "S1", "hello")).unwrap();

        assert_eq!(
            transport.calls(),
            vec![
                (Method::Post, "/api/chat/send".to_string()),
                (Method::Get, "/api/sessions/S1".to_string()),
            ]
        );
        assert_eq!(transport.body_of(0), json!({ "session_id": "S1", "message": "hello" }));
        let contents: Vec<_> = detail.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["hello", "hi there"]);
    }

    #[test]
    fn failed_send_skips_refetch() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Post, "/api/chat/send", 500, "boom");
        let api = client(&transport);

        let err = block_on(send_and_refresh(&api, "S1", "hello")).unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn detail_for_a_previous_session_is_dropped() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/sessions/S1", 200, r#"{"id":"S1","messages":[]}"#);
        let api = client(&transport);
        let generation = RequestGeneration::new();
        let stale = generation.begin();
        let current = generation.begin();

        assert!(block_on(fetch_session_detail(&api, &stale, "S1")).is_none());
        let detail = block_on(fetch_session_detail(&api, &current, "S1")).unwrap().unwrap();
        assert_eq!(detail.session.id, "S1");
    }
}
