use leptos::prelude::*;
use crate::core::models::{find_by_id, Llm, Provider};
use crate::core::services::Api;
use crate::features::providers::services::{delete_provider, load_models, refresh_provider_models, update_provider};
use crate::features::providers::state::{base_url_of, short_badge, ProviderDraft, Verification};

#[component]
pub fn ProviderCard(api: Api, provider: Provider, providers: RwSignal<Vec<Provider>>) -> impl IntoView {
    let draft = RwSignal::new(ProviderDraft::from_provider(&provider));
    let verification = RwSignal::new(Verification::Unknown);
    let models = RwSignal::new(Vec::<Llm>::new());
    let saving = RwSignal::new(false);
    let refreshing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let (show_key, set_show_key) = signal(false);

    load_models(api.clone(), provider.id.clone(), models);

    let key_id = format!("key-{}", provider.id);
    let url_id = format!("url-{}", provider.id);
    let badge = short_badge(&provider.name);
    let name = provider.name.clone();
    let base_url = {
        let provider_id = provider.id.clone();
        move || providers.with(|list| base_url_of(list, &provider_id))
    };

    let save = {
        let api = api.clone();
        let provider = provider.clone();
        move |_| {
            // Merge over the latest server copy, not the one this card mounted with
            let base = providers
                .with_untracked(|list| find_by_id(list, &provider.id).cloned())
                .unwrap_or_else(|| provider.clone());
            update_provider(
                api.clone(),
                base,
                draft.get_untracked(),
                providers,
                verification,
                saving,
                error,
            )
        }
    };
    let refresh = {
        let api = api.clone();
        let provider_id = provider.id.clone();
        move |_| refresh_provider_models(api.clone(), provider_id.clone(), models, refreshing)
    };
    let remove = {
        let provider_id = provider.id.clone();
        move |_| delete_provider(api.clone(), provider_id.clone(), providers)
    };

    view! {
        <div class="provider-card">
            <div class="provider-card-header">
                <div class="provider-badge">{badge}</div>
                <div class="provider-title">
                    <span class="card-title">{name.clone()}</span>
                    <span class="muted">{base_url}</span>
                </div>
                {move || verification.get().label().map(|label| {
                    let verified = verification.get() == Verification::Verified;
                    view! {
                        <span class="verify-tag" class:ok=verified class:bad=!verified>{label}</span>
                    }
                })}
                <button class="icon-btn" aria-label=format!("Remove {}", name) on:click=remove>"🗑"</button>
            </div>

            <label for=key_id.clone()>"API Key"</label>
            <div class="key-input">
                <input
                    id=key_id
                    type=move || if show_key.get() { "text" } else { "password" }
                    placeholder="Enter your API key..."
                    autocomplete="off"
                    prop:value=move || draft.with(|d| d.api_key.clone())
                    on:input=move |ev| draft.update(|d| d.api_key = event_target_value(&ev))
                />
                <button
                    class="icon-btn"
                    aria-label=move || if show_key.get() { "Hide API key" } else { "Show API key" }
                    on:click=move |_| set_show_key.update(|v| *v = !*v)
                >{move || if show_key.get() { "🙈" } else { "👁" }}</button>
            </div>

            <label for=url_id.clone()>"Base URL"</label>
            <input
                id=url_id
                type="url"
                prop:value=move || draft.with(|d| d.base_url.clone())
                on:input=move |ev| draft.update(|d| d.base_url = event_target_value(&ev))
            />

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="form-actions">
                <button class="btn-primary" prop:disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save & Verify" }}
                </button>
                <button class="btn-secondary" prop:disabled=move || refreshing.get() on:click=refresh>
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh Models" }}
                </button>
            </div>

            <div class="provider-models">
                {move || {
                    let list = models.get();
                    if list.is_empty() {
                        return view! { <span class="hint">"No models discovered"</span> }.into_any();
                    }
                    view! {
                        <span class="hint">{format!("{} models", list.len())}</span>
                        <ul class="model-tags">
                            {list.into_iter().map(|m| view! { <li class="model-tag">{m.remote_id}</li> }).collect::<Vec<_>>()}
                        </ul>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
