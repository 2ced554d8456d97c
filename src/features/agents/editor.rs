use crate::core::models::agent::{DEFAULT_AGENT_ROLE, DEFAULT_TEMPERATURE};
use crate::core::models::{AgentPayload, Llm};
use super::state::AgentCard;

/// Form state behind the create and edit agent screens. Ids are kept as
/// strings where an empty string means "none selected", matching the
/// `<select>` values they bind to.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDraft {
    pub name: String,
    pub role: String,
    pub provider_id: String,
    pub model_id: String,
    pub temperature: f64,
    pub prompt: String,
    pub skill_ids: Vec<String>,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub model_provider: Option<String>,
    pub model_name: Option<String>,
}

impl Default for AgentDraft {
    fn default() -> Self {
        Self::new_agent()
    }
}

impl AgentDraft {
    pub fn new_agent() -> Self {
        Self {
            name: String::new(),
            role: DEFAULT_AGENT_ROLE.to_string(),
            provider_id: String::new(),
            model_id: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            prompt: String::new(),
            skill_ids: Vec::new(),
            avatar: None,
            description: None,
            model_provider: None,
            model_name: None,
        }
    }

    pub fn from_card(card: &AgentCard) -> Self {
        Self {
            name: card.name.clone(),
            role: card.role.clone(),
            provider_id: card.provider_id.clone().unwrap_or_default(),
            model_id: card.model_id.clone().unwrap_or_default(),
            temperature: card.temperature,
            prompt: card.prompt.clone(),
            skill_ids: card.skill_ids.clone(),
            avatar: card.avatar.clone(),
            description: card.description.clone(),
            model_provider: card.model_provider.clone(),
            model_name: card.model_name.clone(),
        }
    }

    /// Switching provider always clears the model, even when re-selecting
    /// the same provider.
    pub fn set_provider(&mut self, provider_id: &str) {
        self.provider_id = provider_id.to_string();
        self.model_id.clear();
    }

    pub fn set_model(&mut self, model_id: &str) {
        self.model_id = model_id.to_string();
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = if value.is_finite() { value.clamp(0.0, 1.0) } else { DEFAULT_TEMPERATURE };
    }

    pub fn toggle_skill(&mut self, skill_id: &str) {
        match self.skill_ids.iter().position(|id| id == skill_id) {
            Some(index) => {
                self.skill_ids.remove(index);
            }
            None => self.skill_ids.push(skill_id.to_string()),
        }
    }

    pub fn is_equipped(&self, skill_id: &str) -> bool {
        self.skill_ids.iter().any(|id| id == skill_id)
    }

    pub fn can_create(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn to_payload(&self) -> AgentPayload {
        let role = if self.role.trim().is_empty() { DEFAULT_AGENT_ROLE } else { self.role.as_str() };
        AgentPayload {
            name: self.name.clone(),
            role: role.to_string(),
            avatar: self.avatar.clone(),
            description: self.description.clone(),
            model_id: Some(self.model_id.clone()).filter(|id| !id.is_empty()),
            model_provider: self.model_provider.clone(),
            model_name: self.model_name.clone(),
            temperature: self.temperature,
            system_prompt: self.prompt.clone(),
            skill_ids: self.skill_ids.clone(),
        }
    }
}

/// Models the model dropdown offers for the selected provider.
pub fn models_for_provider<'a>(llms: &'a [Llm], provider_id: &str) -> Vec<&'a Llm> {
    if provider_id.is_empty() {
        return Vec::new();
    }
    llms.iter().filter(|l| l.provider_id == provider_id && l.is_llm).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Agent;

    fn llm(id: &str, provider: &str) -> Llm {
        Llm {
            id: id.into(),
            provider_id: provider.into(),
            remote_id: format!("remote-{}", id),
            is_llm: true,
        }
    }

    #[test]
    fn provider_change_resets_model() {
        let mut draft = AgentDraft::new_agent();
        draft.set_provider("openai");
        draft.set_model("gpt-4o");

        draft.set_provider("anthropic");
        assert_eq!(draft.model_id, "");

        draft.set_model("claude");
        draft.set_provider("anthropic");
        assert_eq!(draft.model_id, "");
    }

    #[test]
    fn models_are_scoped_to_provider() {
        let llms = vec![llm("m1", "p1"), llm("m2", "p2"), llm("m3", "p1")];
        let ids: Vec<_> = models_for_provider(&llms, "p1").iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["m1", "m3"]);
        assert!(models_for_provider(&llms, "").is_empty());
    }

    #[test]
    fn skills_toggle_as_a_set() {
        let mut draft = AgentDraft::new_agent();
        draft.toggle_skill("s1");
        draft.toggle_skill("s2");
        draft.toggle_skill("s1");
        assert!(!draft.is_equipped("s1"));
        assert!(draft.is_equipped("s2"));
        assert_eq!(draft.skill_ids.len(), 1);
    }

    #[test]
    fn create_requires_a_name() {
        let mut draft = AgentDraft::new_agent();
        assert!(!draft.can_create());
        draft.name = "   ".into();
        assert!(!draft.can_create());
        draft.name = "Router Agent".into();
        assert!(draft.can_create());
    }

    #[test]
    fn temperature_is_clamped() {
        let mut draft = AgentDraft::new_agent();
        draft.set_temperature(1.4);
        assert_eq!(draft.temperature, 1.0);
        draft.set_temperature(-0.2);
        assert_eq!(draft.temperature, 0.0);
        draft.set_temperature(f64::NAN);
        assert_eq!(draft.temperature, 0.7);
    }

    #[test]
    fn payload_maps_blank_model_to_none() {
        let mut draft = AgentDraft::new_agent();
        draft.name = "Coder".into();
        draft.role = String::new();
        let payload = draft.to_payload();
        assert_eq!(payload.model_id, None);
        assert_eq!(payload.role, "assistant");
        assert!(payload.skill_ids.is_empty());
    }

    #[test]
    fn edit_draft_starts_from_card() {
        let agent = Agent {
            id: "a1".into(),
            name: "Coder".into(),
            model_id: Some("m1".into()),
            model: Some(llm("m1", "p1")),
            temperature: Some(0.2),
            ..Default::default()
        };
        let draft = AgentDraft::from_card(&AgentCard::from_agent(&agent));
        assert_eq!(draft.provider_id, "p1");
        assert_eq!(draft.model_id, "m1");
        assert_eq!(draft.temperature, 0.2);
    }

    #[test]
    fn save_keeps_fields_the_editor_does_not_show() {
        let agent = Agent {
            id: "a1".into(),
            name: "Legacy".into(),
            description: Some("Writes release notes".into()),
            avatar: Some("scribe.png".into()),
            model_provider: Some("openai".into()),
            model_name: Some("gpt-4".into()),
            temperature: Some(0.3),
            ..Default::default()
        };
        let mut draft = AgentDraft::from_card(&AgentCard::from_agent(&agent));
        draft.name = "Legacy v2".into();

        let body = serde_json::to_value(draft.to_payload()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "name": "Legacy v2",
                "role": "assistant",
                "avatar": "scribe.png",
                "description": "Writes release notes",
                "model_id": null,
                "model_provider": "openai",
                "model_name": "gpt-4",
                "temperature": 0.3,
                "system_prompt": "",
                "skill_ids": []
            })
        );
    }
}
