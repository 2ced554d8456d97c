use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::console;
use crate::core::models::{remove_by_id, upsert, Llm, Provider, ProviderPayload};
use crate::core::services::{fetch_or_empty, Api, ApiClient, ApiError, Transport};
use super::state::{verified_after_save, ProviderDraft, Verification};

/// Asks the backend to re-discover a provider's models, then lists them.
/// Any failure along the way yields an empty list.
pub async fn refresh_models<T: Transport>(api: &ApiClient<T>, provider_id: &str) -> Vec<Llm> {
    let result = async {
        api.refresh_provider_models(provider_id).await?;
        api.list_provider_models(provider_id).await
    }
    .await;
    match result {
        Ok(models) => models,
        Err(e) => {
            console::warn(&format!("Model refresh failed for provider {}: {}", provider_id, e));
            Vec::new()
        }
    }
}

pub async fn save_provider<T: Transport>(
    api: &ApiClient<T>,
    base: &Provider,
    draft: &ProviderDraft,
) -> Result<Provider, ApiError> {
    api.update_provider(&base.id, &draft.merge_into(base)).await
}

pub fn load_providers(api: Api, providers: RwSignal<Vec<Provider>>, loading: RwSignal<bool>) {
    loading.set(true);
    spawn_local(async move {
        let loaded = fetch_or_empty("providers", api.list_providers()).await;
        providers.set(loaded);
        loading.set(false);
    });
}

pub fn create_provider(
    api: Api,
    name: String,
    providers: RwSignal<Vec<Provider>>,
    error: RwSignal<Option<String>>,
    on_created: impl Fn() + 'static,
) {
    if name.trim().is_empty() {
        return;
    }
    error.set(None);
    spawn_local(async move {
        match api.create_provider(&ProviderPayload::named(&name)).await {
            Ok(provider) => {
                console::log(&format!("Created provider {}", provider.id));
                providers.update(|list| list.push(provider));
                on_created();
            }
            Err(e) => {
                console::error(&format!("Failed to create provider: {}", e));
                error.set(Some(e.to_string()));
            }
        }
    });
}

pub fn delete_provider(api: Api, provider_id: String, providers: RwSignal<Vec<Provider>>) {
    spawn_local(async move {
        match api.delete_provider(&provider_id).await {
            Ok(_) => providers.update(|list| remove_by_id(list, &provider_id)),
            Err(e) => console::error(&format!("Failed to delete provider {}: {}", provider_id, e)),
        }
    });
}

// Save the card's key and base url, deriving the local verified flag
pub fn update_provider(
    api: Api,
    base: Provider,
    draft: ProviderDraft,
    providers: RwSignal<Vec<Provider>>,
    verification: RwSignal<Verification>,
    saving: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    saving.set(true);
    error.set(None);
    spawn_local(async move {
        match save_provider(&api, &base, &draft).await {
            Ok(saved) => {
                verification.set(verified_after_save(draft.api_key.trim()));
                providers.update(|list| upsert(list, saved));
            }
            Err(e) => {
                console::error(&format!("Failed to save provider {}: {}", base.id, e));
                error.set(Some(e.to_string()));
            }
        }
        saving.set(false);
    });
}

pub fn load_models(api: Api, provider_id: String, models: RwSignal<Vec<Llm>>) {
    spawn_local(async move {
        match api.list_provider_models(&provider_id).await {
            Ok(loaded) => models.set(loaded),
            Err(e) => {
                console::debug(&format!("No models for provider {}: {}", provider_id, e));
                models.set(Vec::new());
            }
        }
    });
}

pub fn refresh_provider_models(api: Api, provider_id: String, models: RwSignal<Vec<Llm>>, refreshing: RwSignal<bool>) {
    refreshing.set(true);
    spawn_local(async move {
        let refreshed = refresh_models(&api, &provider_id).await;
        console::log(&format!("Provider {} has {} models", provider_id, refreshed.len()));
        models.set(refreshed);
        refreshing.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::testing::{client, RecordingTransport};
    use crate::core::services::Method;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn unreachable_backend_reads_as_no_providers() {
        let transport = RecordingTransport::default();
        transport.fail(Method::Get, "/api/providers", "connection refused");
        let api = client(&transport);

        assert!(block_on(fetch_or_empty("providers", api.list_providers())).is_empty());
    }

    #[test]
    fn refresh_posts_then_lists_models() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Post, "/api/providers/p1/models/refresh", 200, r#"{"added":2}"#);
        transport.respond(
            Method::Get,
            "/api/providers/p1/models",
            200,
            r#"[{"id":"m1","provider_id":"p1","remote_id":"gpt-4o"},
                {"id":"m2","provider_id":"p1","remote_id":"gpt-4o-mini"}]"#,
        );
        let api = client(&transport);

        let models = block_on(refresh_models(&api, "p1"));

        assert_eq!(models.len(), 2);
        assert_eq!(transport.body_of(0), json!({}));
        assert_eq!(transport.calls()[1], (Method::Get, "/api/providers/p1/models".to_string()));
    }

    #[test]
    fn failed_refresh_yields_no_models() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Post, "/api/providers/p1/models/refresh", 401, r#"{"detail":"bad key"}"#);
        let api = client(&transport);

        assert!(block_on(refresh_models(&api, "p1")).is_empty());
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn failed_listing_after_refresh_yields_no_models() {
        let transport = RecordingTransport::default();
        transport.respond(Method::Post, "/api/providers/p1/models/refresh", 200, "");
        transport.fail(Method::Get, "/api/providers/p1/models", "offline");
        let api = client(&transport);

        assert!(block_on(refresh_models(&api, "p1")).is_empty());
    }

    #[test]
    fn save_puts_key_and_base_url() {
        let transport = RecordingTransport::default();
        transport.respond(
            Method::Put,
            "/api/providers/p1",
            200,
            r#"{"id":"p1","name":"OpenAI","base_url":"https://api.openai.com/v1","api_key":"sk-1","is_active":true}"#,
        );
        let api = client(&transport);
        let base = Provider {
            id: "p1".into(),
            name: "OpenAI".into(),
            is_active: true,
            ..Default::default()
        };
        let draft = ProviderDraft {
            api_key: "sk-1".into(),
            base_url: "https://api.openai.com/v1".into(),
        };

        let saved = block_on(save_provider(&api, &base, &draft)).unwrap();

        assert_eq!(
            transport.body_of(0),
            json!({ "name": "OpenAI", "base_url": "https://api.openai.com/v1", "api_key": "sk-1", "is_active": true })
        );
        assert_eq!(verified_after_save(saved.api_key.as_deref().unwrap_or_default()), Verification::Verified);
    }
}
