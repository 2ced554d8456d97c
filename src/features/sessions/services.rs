use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::app::ActiveSession;
use crate::core::console;
use crate::core::models::{Session, SessionCreate};
use crate::core::services::{fetch_current, Api, ApiClient, ApiError, GenerationTicket, Transport};
use super::state::{display_title, selection_change, SelectionChange};

/// The session list for the current generation, or `None` once a newer load
/// has started.
pub async fn fetch_sessions<T: Transport>(
    api: &ApiClient<T>,
    ticket: &GenerationTicket,
) -> Option<Result<Vec<Session>, ApiError>> {
    fetch_current(ticket, api.list_sessions()).await
}

// Fetch the session list and reconcile the active selection against it. A
// failed fetch empties the list but leaves the selection alone.
pub fn load_sessions(
    api: Api,
    ticket: GenerationTicket,
    sessions: RwSignal<Vec<Session>>,
    loading: RwSignal<bool>,
    active: ActiveSession,
) {
    loading.set(true);
    spawn_local(async move {
        let Some(result) = fetch_sessions(&api, &ticket).await else {
            return;
        };
        let loaded = match result {
            Ok(list) => Some(list),
            Err(e) => {
                console::error(&format!("Failed to load sessions: {}", e));
                None
            }
        };

        let current = active.id.get_untracked();
        match selection_change(loaded.as_deref(), current.as_deref()) {
            SelectionChange::Select { id, title } if current.as_deref() == Some(id.as_str()) => {
                if active.title.get_untracked() != title {
                    active.title.set(title);
                }
            }
            SelectionChange::Select { id, title } => active.select(id, title),
            SelectionChange::Clear => active.clear(),
            SelectionChange::Keep => {}
        }

        sessions.set(loaded.unwrap_or_default());
        loading.set(false);
    });
}

// Create a session, make it active, then hand the refreshed list back via `on_created`
pub fn create_session(
    api: Api,
    creating: RwSignal<bool>,
    active: ActiveSession,
    on_created: impl Fn() + 'static,
) {
    if creating.get_untracked() {
        return;
    }
    creating.set(true);
    spawn_local(async move {
        match api.create_session(&SessionCreate::default()).await {
            Ok(session) => {
                console::log(&format!("Created session {}", session.id));
                let title = display_title(&session);
                active.select(session.id, title);
                on_created();
            }
            Err(e) => console::error(&format!("Failed to create session: {}", e)),
        }
        creating.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::testing::{client, RecordingTransport};
    use crate::core::services::{Method, RequestGeneration};
    use futures::executor::block_on;

    #[test]
    fn failed_list_is_reported_not_swallowed() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/sessions", 503, "unavailable");
        let api = client(&transport);
        let ticket = RequestGeneration::new().begin();

        let result = block_on(fetch_sessions(&api, &ticket)).unwrap();

        assert_eq!(result.unwrap_err().status(), Some(503));
    }

    #[test]
    fn superseded_list_is_dropped() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/sessions", 200, r#"[{"id":"A"}]"#);
        let api = client(&transport);
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.begin();

        assert!(block_on(fetch_sessions(&api, &ticket)).is_none());
        assert_eq!(transport.calls().len(), 1);
    }
}
