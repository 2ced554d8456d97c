use leptos::prelude::*;
use crate::app::ActiveSession;
use crate::core::models::Session;
use crate::core::services::{Api, RequestGeneration};
use crate::features::sessions::services::{create_session, load_sessions};

#[derive(Clone, Copy)]
pub struct SessionsHook {
    pub sessions: ReadSignal<Vec<Session>>,
    pub loading: ReadSignal<bool>,
    pub creating: ReadSignal<bool>,
    pub reload: Callback<()>,
    pub create_session: Callback<()>,
}

pub fn use_sessions(api: Api, active: ActiveSession) -> SessionsHook {
    let sessions = RwSignal::new(Vec::<Session>::new());
    let loading = RwSignal::new(true);
    let creating = RwSignal::new(false);
    let generation = RequestGeneration::new();

    let reload = {
        let api = api.clone();
        let generation = generation.clone();
        Callback::new(move |_: ()| {
            load_sessions(api.clone(), generation.begin(), sessions, loading, active);
        })
    };

    // Load sessions on mount
    reload.run(());

    let create = Callback::new(move |_: ()| {
        create_session(api.clone(), creating, active, move || reload.run(()));
    });

    SessionsHook {
        sessions: sessions.read_only(),
        loading: loading.read_only(),
        creating: creating.read_only(),
        reload,
        create_session: create,
    }
}
