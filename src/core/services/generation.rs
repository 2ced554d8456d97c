use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tags fetches keyed on a changing dependency (e.g. the active session) so a
/// slow response for an old key cannot overwrite the newer one.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct GenerationTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation; every earlier ticket becomes stale.
    pub fn begin(&self) -> GenerationTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        GenerationTicket {
            id,
            latest: self.latest.clone(),
        }
    }
}

impl GenerationTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}
