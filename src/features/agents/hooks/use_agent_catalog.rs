use leptos::prelude::*;
use crate::core::services::Api;
use crate::features::agents::services::load_catalog;
use crate::features::agents::state::Catalog;

#[derive(Clone, Copy)]
pub struct CatalogHook {
    pub catalog: RwSignal<Catalog>,
    pub loading: ReadSignal<bool>,
    pub reload: Callback<()>,
}

pub fn use_agent_catalog(api: Api) -> CatalogHook {
    let catalog = RwSignal::new(Catalog::default());
    let loading = RwSignal::new(true);

    let reload = Callback::new(move |_: ()| {
        load_catalog(api.clone(), catalog, loading);
    });

    // Load on mount
    reload.run(());

    CatalogHook {
        catalog,
        loading: loading.read_only(),
        reload,
    }
}
