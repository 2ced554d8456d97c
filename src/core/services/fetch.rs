use std::future::Future;

use crate::core::console;
use super::error::ApiError;
use super::generation::GenerationTicket;

/// Awaits a list request. A failure is logged and reads as an empty list.
pub async fn fetch_or_empty<T>(what: &str, request: impl Future<Output = Result<Vec<T>, ApiError>>) -> Vec<T> {
    match request.await {
        Ok(items) => items,
        Err(e) => {
            console::error(&format!("Failed to load {}: {}", what, e));
            Vec::new()
        }
    }
}

/// Awaits `request` and yields its output only while `ticket` is still the
/// latest generation.
pub async fn fetch_current<R>(ticket: &GenerationTicket, request: impl Future<Output = R>) -> Option<R> {
    let output = request.await;
    if ticket.is_current() {
        Some(output)
    } else {
        console::debug(&format!("Dropping stale response for generation {}", ticket.id()));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::testing::{client, RecordingTransport};
    use crate::core::services::{Method, RequestGeneration};
    use futures::executor::block_on;

    #[test]
    fn failed_list_reads_as_empty() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/tools", 500, "boom");
        let api = client(&transport);

        assert!(block_on(fetch_or_empty("tools", api.list_tools())).is_empty());
    }

    #[test]
    fn healthy_list_passes_through() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Get, "/api/tools", 200, r#"[{"id":"t1","name":"Calculator"}]"#);
        let api = client(&transport);

        assert_eq!(block_on(fetch_or_empty("tools", api.list_tools())).len(), 1);
    }

    #[test]
    fn response_arriving_after_a_newer_load_is_dropped() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();

        let output = block_on(fetch_current(&ticket, async {
            generation.begin();
            "late"
        }));

        assert_eq!(output, None);
    }

    #[test]
    fn current_response_is_kept() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();

        assert_eq!(block_on(fetch_current(&ticket, async { 7 })), Some(7));
    }
}
