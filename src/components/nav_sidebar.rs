use leptos::prelude::*;
use crate::app::AppView;

#[component]
pub fn NavSidebar(#[prop(into)] current: ReadSignal<AppView>) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    view! {
        <aside class="nav-sidebar" role="navigation" aria-label="Main navigation">
            <div class="nav-logo" aria-hidden="true">"⚙"</div>
            <nav class="nav-items">
                {AppView::all().into_iter().map(|item| {
                    view! {
                        <button
                            class="nav-item"
                            class:active=move || current.get() == item
                            title=item.label()
                            aria-label=item.label()
                            on:click=move |_| navigate.set(item)
                        >
                            {item.glyph()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </nav>
            <div class="nav-avatar">"A"</div>
        </aside>
    }
}
