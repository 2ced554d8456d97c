use leptos::prelude::*;
use crate::features::chat::state::ChatEntry;

#[component]
pub fn MessageBubble(entry: ChatEntry) -> impl IntoView {
    match entry {
        ChatEntry::User { content, .. } => view! {
            <div class="message user">
                <div class="bubble">{content}</div>
            </div>
        }.into_any(),
        ChatEntry::System { content, .. } => view! {
            <div class="message system">
                <span class="system-event">{content}</span>
            </div>
        }.into_any(),
        ChatEntry::Assistant { agent, content, thought, time, .. } => view! {
            <div class="message assistant">
                <div class="message-meta">
                    <span class="sender">{agent.unwrap_or_else(|| "Assistant".to_string())}</span>
                    {time.map(|t| view! { <span class="time">{t}</span> })}
                </div>
                {thought.map(|text| view! { <ThoughtBlock text=text /> })}
                <div class="bubble">{content}</div>
            </div>
        }.into_any(),
    }
}

/// Collapsed reasoning trace shown above an assistant reply.
#[component]
fn ThoughtBlock(text: String) -> impl IntoView {
    view! {
        <details class="thought-block">
            <summary>"Thought Process"</summary>
            <pre class="thought-text">{text}</pre>
        </details>
    }
}
