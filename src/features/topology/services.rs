use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::console;
use crate::core::models::GraphConfig;
use crate::core::services::{Api, ApiClient, GenerationTicket, Transport};
use super::state::{default_topology, graph_from_value, resolve_graph};

/// The session's graph, or the default topology when there is no session,
/// the fetch fails, or the stored graph is empty.
pub async fn fetch_graph<T: Transport>(api: &ApiClient<T>, session_id: Option<&str>) -> GraphConfig {
    let Some(session_id) = session_id else {
        return default_topology();
    };
    match api.get_session_graph(session_id).await {
        Ok(value) => resolve_graph(graph_from_value(value)),
        Err(e) => {
            console::warn(&format!("Graph unavailable for session {}: {}", session_id, e));
            default_topology()
        }
    }
}

pub fn load_graph(api: Api, ticket: GenerationTicket, session_id: Option<String>, graph: RwSignal<GraphConfig>) {
    spawn_local(async move {
        let loaded = fetch_graph(&api, session_id.as_deref()).await;
        if ticket.is_current() {
            graph.set(loaded);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::testing::{client, RecordingTransport};
    use crate::core::services::Method;
    use futures::executor::block_on;

    #[test]
    fn missing_session_uses_default_without_fetching() {
        let transport = RecordingTransport::default();
        let api = client(&transport);

        let graph = block_on(fetch_graph(&api, None));

        assert_eq!(graph, default_topology());
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn failed_fetch_uses_default() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/sessions/S1/graph", 500, "oops");
        let api = client(&transport);

        assert_eq!(block_on(fetch_graph(&api, Some("S1"))), default_topology());
    }

    #[test]
    fn null_graph_uses_default() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/sessions/S1/graph", 200, "null");
        let api = client(&transport);

        assert_eq!(block_on(fetch_graph(&api, Some("S1"))).nodes.len(), 5);
    }

    #[test]
    fn stored_graph_is_rendered() {
        let transport = RecordingTransport::default();
        transport.respond(
            Method::Get,
            "/api/sessions/S1/graph",
            200,
            r#"{"nodes":[{"id":"a","label":"Planner","x":300,"y":40,"type":"start"},
                         {"id":"b","label":"Writer","x":300,"y":160,"type":"end"}],
                "edges":[["a","b"]]}"#,
        );
        let api = client(&transport);

        let graph = block_on(fetch_graph(&api, Some("S1")));

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].label.as_deref(), Some("Planner"));
    }
}
