use chrono::{DateTime, Utc};

use crate::core::models::Session;
use crate::core::time::relative_time;

pub const UNTITLED_SESSION: &str = "Untitled Session";

/// Keeps the current selection when it is still in the fetched list,
/// otherwise falls back to the first session in backend order.
pub fn reconcile_selection(sessions: &[Session], selected: Option<&str>) -> Option<String> {
    match selected {
        Some(id) if sessions.iter().any(|s| s.id == id) => Some(id.to_string()),
        _ => sessions.first().map(|s| s.id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Keep,
    Select { id: String, title: String },
    Clear,
}

/// What a list load does to the active session. `loaded` is `None` when the
/// fetch failed, which never touches the selection.
pub fn selection_change(loaded: Option<&[Session]>, selected: Option<&str>) -> SelectionChange {
    let Some(sessions) = loaded else {
        return SelectionChange::Keep;
    };
    match reconcile_selection(sessions, selected) {
        Some(id) => {
            let title = title_of(sessions, &id).unwrap_or_default();
            SelectionChange::Select { id, title }
        }
        None => SelectionChange::Clear,
    }
}

/// Case-insensitive substring match over titles only.
pub fn filter_by_title<'a>(sessions: &'a [Session], query: &str) -> Vec<&'a Session> {
    let needle = query.to_lowercase();
    sessions
        .iter()
        .filter(|s| needle.is_empty() || display_title(s).to_lowercase().contains(&needle))
        .collect()
}

pub fn display_title(session: &Session) -> String {
    match session.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => UNTITLED_SESSION.to_string(),
    }
}

pub fn title_of(sessions: &[Session], id: &str) -> Option<String> {
    sessions.iter().find(|s| s.id == id).map(display_title)
}

/// Short "updated" label for a list row.
pub fn updated_label(session: &Session, now: DateTime<Utc>) -> String {
    let stamp = if session.updated_at.is_empty() { &session.created_at } else { &session.updated_at };
    relative_time(stamp, now).unwrap_or_default()
}
