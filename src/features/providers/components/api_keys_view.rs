use leptos::prelude::*;
use crate::core::models::Provider;
use crate::core::services::Api;
use crate::features::providers::components::ProviderCard;
use crate::features::providers::services::{create_provider, load_providers};

#[component]
pub fn ApiKeysView() -> impl IntoView {
    let api = use_context::<Api>().expect("api client context");
    let providers = RwSignal::new(Vec::<Provider>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let (show_add_form, set_show_add_form) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    load_providers(api.clone(), providers, loading);

    let add = {
        let api = api.clone();
        move |_| {
            create_provider(api.clone(), new_name.get_untracked(), providers, error, move || {
                set_new_name.set(String::new());
                set_show_add_form.set(false);
            })
        }
    };

    view! {
        <section class="api-keys-view">
            <header class="view-header">
                <div>
                    <h1>"API Keys"</h1>
                    <p class="muted">"Credentials for the model providers your agents call."</p>
                </div>
                <button class="btn-primary" on:click=move |_| set_show_add_form.update(|v| *v = !*v)>"+ Add Provider"</button>
            </header>

            {move || show_add_form.get().then(|| view! {
                <div class="add-provider-form">
                    <label for="new-provider-name">"Provider Name"</label>
                    <input
                        id="new-provider-name"
                        type="text"
                        placeholder="e.g. Mistral AI"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <div class="form-actions">
                        <button
                            class="btn-primary"
                            prop:disabled=move || new_name.get().trim().is_empty()
                            on:click=add.clone()
                        >"Add"</button>
                        <button
                            class="btn-secondary"
                            on:click=move |_| {
                                set_show_add_form.set(false);
                                set_new_name.set(String::new());
                            }
                        >"Cancel"</button>
                    </div>
                </div>
            })}

            <div class="provider-list">
                <For
                    each=move || providers.get()
                    key=|p: &Provider| p.id.clone()
                    children=move |provider| view! {
                        <ProviderCard api=api.clone() provider=provider providers=providers />
                    }
                />
                {move || {
                    if loading.get() {
                        Some(view! { <p class="hint">"Loading providers..."</p> }.into_any())
                    } else if providers.with(|p| p.is_empty()) {
                        Some(view! { <p class="hint">"No providers configured"</p> }.into_any())
                    } else {
                        None
                    }
                }}
            </div>
        </section>
    }
}
