use serde_json::Value;

use crate::core::models::{
    Agent, AgentPayload, ChatRequest, Llm, Provider, ProviderPayload, Session, SessionAgent,
    SessionAgentCreate, SessionCreate, SessionDetail, Skill, SkillPayload, Tool, ToolPayload,
};
use super::client::ApiClient;
use super::error::ApiError;
use super::http::Transport;

// Typed routes of the orchestration backend.
impl<T: Transport> ApiClient<T> {
    // Sessions

    pub async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.get("/api/sessions").await
    }

    pub async fn create_session(&self, session: &SessionCreate) -> Result<Session, ApiError> {
        self.post("/api/sessions", session).await
    }

    pub async fn get_session(&self, session_id: &str) -> Result<SessionDetail, ApiError> {
        self.get(&format!("/api/sessions/{}", session_id)).await
    }

    pub async fn list_session_agents(&self, session_id: &str) -> Result<Vec<SessionAgent>, ApiError> {
        self.get(&format!("/api/sessions/{}/agents", session_id)).await
    }

    pub async fn add_session_agent(
        &self,
        session_id: &str,
        link: &SessionAgentCreate,
    ) -> Result<SessionAgent, ApiError> {
        self.post(&format!("/api/sessions/{}/agents", session_id), link).await
    }

    /// Raw graph document; the backend may store it as an object, a JSON
    /// string, or nothing at all.
    pub async fn get_session_graph(&self, session_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("/api/sessions/{}/graph", session_id)).await
    }

    pub async fn send_message(&self, request: &ChatRequest) -> Result<Value, ApiError> {
        self.post("/api/chat/send", request).await
    }

    // Agents

    pub async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        self.get("/api/agents").await
    }

    pub async fn create_agent(&self, agent: &AgentPayload) -> Result<Agent, ApiError> {
        self.post("/api/agents", agent).await
    }

    pub async fn update_agent(&self, agent_id: &str, agent: &AgentPayload) -> Result<Agent, ApiError> {
        self.put(&format!("/api/agents/{}", agent_id), agent).await
    }

    pub async fn delete_agent(&self, agent_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/api/agents/{}", agent_id)).await
    }

    // Skills

    pub async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get("/api/skills").await
    }

    pub async fn create_skill(&self, skill: &SkillPayload) -> Result<Skill, ApiError> {
        self.post("/api/skills", skill).await
    }

    pub async fn update_skill(&self, skill_id: &str, skill: &SkillPayload) -> Result<Skill, ApiError> {
        self.put(&format!("/api/skills/{}", skill_id), skill).await
    }

    pub async fn delete_skill(&self, skill_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/api/skills/{}", skill_id)).await
    }

    // Tools

    pub async fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        self.get("/api/tools").await
    }

    pub async fn create_tool(&self, tool: &ToolPayload) -> Result<Tool, ApiError> {
        self.post("/api/tools", tool).await
    }

    pub async fn update_tool(&self, tool_id: &str, tool: &ToolPayload) -> Result<Tool, ApiError> {
        self.put(&format!("/api/tools/{}", tool_id), tool).await
    }

    pub async fn delete_tool(&self, tool_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/api/tools/{}", tool_id)).await
    }

    // Providers and models

    pub async fn list_providers(&self) -> Result<Vec<Provider>, ApiError> {
        self.get("/api/providers").await
    }

    pub async fn create_provider(&self, provider: &ProviderPayload) -> Result<Provider, ApiError> {
        self.post("/api/providers", provider).await
    }

    pub async fn update_provider(
        &self,
        provider_id: &str,
        provider: &ProviderPayload,
    ) -> Result<Provider, ApiError> {
        self.put(&format!("/api/providers/{}", provider_id), provider).await
    }

    pub async fn delete_provider(&self, provider_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("/api/providers/{}", provider_id)).await
    }

    pub async fn list_provider_models(&self, provider_id: &str) -> Result<Vec<Llm>, ApiError> {
        self.get(&format!("/api/providers/{}/models", provider_id)).await
    }

    pub async fn refresh_provider_models(&self, provider_id: &str) -> Result<Value, ApiError> {
        self.post(&format!("/api/providers/{}/models/refresh", provider_id), &serde_json::json!({}))
            .await
    }

    pub async fn list_llms(&self) -> Result<Vec<Llm>, ApiError> {
        self.get("/api/llms").await
    }
}

#[cfg(test)]
mod tests {
    use crate::core::models::SessionCreate;
    use crate::core::services::http::Method;
    use crate::core::services::testing::{client, RecordingTransport};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn create_session_sends_defaults() {
        let transport = RecordingTransport::default();
        transport.respond(
            Method::Post,
            "/api/sessions",
            200,
            r#"{"id":"S1","title":"New Session","created_at":"2024-05-01T10:00:00","updated_at":"2024-05-01T10:00:00"}"#,
        );
        let api = client(&transport);

        let session = block_on(api.create_session(&SessionCreate::default())).unwrap();

        assert_eq!(session.id, "S1");
        assert_eq!(
            transport.body_of(0),
            json!({ "title": "New Session", "user_id": "default_user", "status": "active" })
        );
    }

    #[test]
    fn session_detail_flattens_session_fields() {
        let transport = RecordingTransport::default();
        transport.respond(
            Method::Get,
            "/api/sessions/S1",
            200,
            r#"{
                "id": "S1", "title": "Debug", "status": "active",
                "created_at": "2024-05-01T10:00:00", "updated_at": "2024-05-01T10:00:00",
                "messages": [
                    {"id": "m1", "session_id": "S1", "role": "user", "content": "hi", "created_at": "2024-05-01T10:00:01"},
                    {"id": "m2", "session_id": "S1", "role": "assistant", "content": "hello",
                     "thought_process": [{"text": "greet"}], "created_at": "2024-05-01T10:00:02"}
                ],
                "session_agents": [{"id": "sa1", "session_id": "S1", "original_agent_id": "a1"}]
            }"#,
        );
        let api = client(&transport);

        let detail = block_on(api.get_session("S1")).unwrap();

        assert_eq!(detail.session.title.as_deref(), Some("Debug"));
        assert_eq!(detail.messages.len(), 2);
        assert!(detail.messages[1].thought_process.is_some());
        assert_eq!(detail.session_agents[0].original_agent_id, "a1");
    }

    #[test]
    fn refresh_posts_to_provider_route() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Post, "/api/providers/p1/models/refresh", 200, r#"{"count":3}"#);
        let api = client(&transport);

        block_on(api.refresh_provider_models("p1")).unwrap();

        assert_eq!(
            transport.calls(),
            vec![(Method::Post, "/api/providers/p1/models/refresh".to_string())]
        );
    }

    #[test]
    fn delete_agent_accepts_empty_reply() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Delete, "/api/agents/a1", 200, "");
        let api = client(&transport);

        assert_eq!(block_on(api.delete_agent("a1")).unwrap(), serde_json::Value::Null);
        assert_eq!(transport.calls(), vec![(Method::Delete, "/api/agents/a1".to_string())]);
    }
}
