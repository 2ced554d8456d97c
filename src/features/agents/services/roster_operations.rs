use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::console;
use crate::core::models::{SessionAgent, SessionAgentCreate};
use crate::core::services::{fetch_current, fetch_or_empty, Api, ApiClient, ApiError, GenerationTicket, Transport};

/// Links a global agent to the session, then re-fetches the session's links.
pub async fn attach_and_refresh<T: Transport>(
    api: &ApiClient<T>,
    session_id: &str,
    agent_id: &str,
) -> Result<Vec<SessionAgent>, ApiError> {
    let link = SessionAgentCreate {
        original_agent_id: agent_id.to_string(),
    };
    api.add_session_agent(session_id, &link).await?;
    api.list_session_agents(session_id).await
}

/// The session's agent links, empty on failure. `None` once a newer load has
/// started.
pub async fn fetch_session_agents<T: Transport>(
    api: &ApiClient<T>,
    ticket: &GenerationTicket,
    session_id: &str,
) -> Option<Vec<SessionAgent>> {
    fetch_current(ticket, fetch_or_empty("session agents", api.list_session_agents(session_id))).await
}

// Load the session's agent links; a missing session or failure leaves an empty roster
pub fn load_session_agents(
    api: Api,
    ticket: GenerationTicket,
    session_id: Option<String>,
    links: RwSignal<Vec<SessionAgent>>,
) {
    let Some(session_id) = session_id else {
        links.set(Vec::new());
        return;
    };
    spawn_local(async move {
        if let Some(loaded) = fetch_session_agents(&api, &ticket, &session_id).await {
            links.set(loaded);
        }
    });
}

pub fn attach_agent(
    api: Api,
    ticket: GenerationTicket,
    session_id: String,
    agent_id: String,
    links: RwSignal<Vec<SessionAgent>>,
    attaching: RwSignal<bool>,
) {
    if attaching.get_untracked() {
        return;
    }
    attaching.set(true);
    spawn_local(async move {
        match attach_and_refresh(&api, &session_id, &agent_id).await {
            Ok(loaded) => {
                console::log(&format!("Attached agent {} to session {}", agent_id, session_id));
                if ticket.is_current() {
                    links.set(loaded);
                }
            }
            Err(e) => console::error(&format!("Failed to attach agent {}: {}", agent_id, e)),
        }
        attaching.set(false);
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
    fn attach_posts_link_then_refetches_roster() {
        let transport = RecordingTransport::default();
        transport.respond(
            Method::Post,
            "/api/sessions/S1/agents",
            200,
            r#"{"id":"l2","session_id":"S1","original_agent_id":"a2"}"#,
        );
        transport.respond(
            Method::Get,
            "/api/sessions/S1/agents",
            200,
            r#"[{"id":"l1","session_id":"S1","original_agent_id":"a1"},
                {"id":"l2","session_id":"S1","original_agent_id":"a2"}]"#,
        );
        let api = client(&transport);

        let links = block_on(attach_and_refresh(&api, "S1", "a2")).unwrap();

        assert_eq!(
            transport.calls(),
            vec![
                (Method::Post, "/api/sessions/S1/agents".to_string()),
                (Method::Get, "/api/sessions/S1/agents".to_string()),
            ]
        );
        assert_eq!(transport.body_of(0), json!({ "original_agent_id": "a2" }));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn network_failure_surfaces_as_error() {
        let transport = RecordingTransport::default();
        transport.fail(Method::Post, "/api/sessions/S1/agents", "connection refused");
        let api = client(&transport);

        let err = block_on(attach_and_refresh(&api, "S1", "a2")).unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn failed_roster_load_reads_as_empty() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/sessions/S1/agents", 500, "boom");
        let api = client(&transport);
        let ticket = RequestGeneration::new().begin();

        assert_eq!(block_on(fetch_session_agents(&api, &ticket, "S1")), Some(Vec::new()));
    }

    #[test]
    fn roster_for_a_previous_session_is_dropped() {
        let transport = RecordingTransport::default();
        transport.respond(
            Method::Get,
            "/api/sessions/S1/agents",
            200,
            r#"[{"id":"l1","session_id":"S1","original_agent_id":"a1"}]"#,
        );
        let api = client(&transport);
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.begin();

        assert_eq!(block_on(fetch_session_agents(&api, &ticket, "S1")), None);
    }
}
