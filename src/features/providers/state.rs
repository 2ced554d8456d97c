use crate::core::models::{find_by_id, Provider, ProviderPayload};

/// Local result of the last save. Nothing is checked against the provider
/// itself; a non-empty saved key counts as verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verification {
    #[default]
    Unknown,
    Verified,
    Invalid,
}

impl Verification {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Verification::Unknown => None,
            Verification::Verified => Some("Verified"),
            Verification::Invalid => Some("Invalid"),
        }
    }
}

pub fn verified_after_save(saved_key: &str) -> Verification {
    if saved_key.is_empty() {
        Verification::Invalid
    } else {
        Verification::Verified
    }
}

/// First three letters of the name, uppercased.
/// Base URL shown in a card header, read from the live provider list.
pub fn base_url_of(providers: &[Provider], provider_id: &str) -> String {
    find_by_id(providers, provider_id)
        .and_then(|p| p.base_url.clone())
        .unwrap_or_default()
}

pub fn short_badge(name: &str) -> String {
    name.trim().chars().take(3).collect::<String>().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderDraft {
    pub api_key: String,
    pub base_url: String,
}

impl ProviderDraft {
    pub fn from_provider(provider: &Provider) -> Self {
        Self {
            api_key: provider.api_key.clone().unwrap_or_default(),
            base_url: provider.base_url.clone().unwrap_or_default(),
        }
    }

    pub fn merge_into(&self, base: &Provider) -> ProviderPayload {
        ProviderPayload {
            name: base.name.clone(),
            base_url: self.base_url.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
            is_active: base.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::upsert;

    #[test]
    fn header_url_tracks_saved_provider() {
        let mut providers = vec![Provider {
            id: "p1".into(),
            name: "OpenAI".into(),
            base_url: Some("https://api.openai.com/v1".into()),
            ..Default::default()
        }];
        upsert(
            &mut providers,
            Provider {
                id: "p1".into(),
                name: "OpenAI".into(),
                base_url: Some("https://proxy.internal/v1".into()),
                ..Default::default()
            },
        );
        assert_eq!(base_url_of(&providers, "p1"), "https://proxy.internal/v1");
        assert_eq!(base_url_of(&providers, "missing"), "");
    }

    #[test]
    fn verification_follows_saved_key() {
        assert_eq!(verified_after_save("sk-live-123"), Verification::Verified);
        assert_eq!(verified_after_save(""), Verification::Invalid);
        assert_eq!(Verification::default().label(), None);
    }

    #[test]
    fn badges() {
        assert_eq!(short_badge("OpenAI"), "OPE");
        assert_eq!(short_badge("Groq"), "GRO");
        assert_eq!(short_badge("xa"), "XA");
    }

    #[test]
    fn draft_keeps_name_and_active_flag() {
        let provider = Provider {
            id: "p1".into(),
            name: "Groq".into(),
            base_url: Some("https://api.groq.com/openai/v1".into()),
            api_key: None,
            is_active: false,
        };
        let mut draft = ProviderDraft::from_provider(&provider);
        assert_eq!(draft.api_key, "");
        draft.api_key = "  gsk-abc ".into();

        let payload = draft.merge_into(&provider);

        assert_eq!(payload.name, "Groq");
        assert_eq!(payload.api_key, "gsk-abc");
        assert_eq!(payload.base_url, "https://api.groq.com/openai/v1");
        assert!(!payload.is_active);
    }
}
