//! Main App component with routing

use crate::components::{Header, ToastHost};
use crate::pages::{Barcode, Cart, Catalog, Login, TrackOrder};
use crate::storage::{watch_other_tabs, LocalStorageTokenStore};
use grocer_client::{refresh_badges, Api, AuthStore, Badges, ClientConfig, ClientError, HttpClient, Session, SessionState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use std::sync::Arc;

const TOAST_MS: u32 = 3000;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub api: Api,
    pub auth: AuthStore,
    pub session: RwSignal<SessionState>,
    pub badges: RwSignal<Badges>,
    /// Current notification and its sequence number
    pub toast: RwSignal<Option<(u64, String)>>,
}

impl AppState {
    pub fn new() -> Result<Self, ClientError> {
        let session = Session::new(Arc::new(LocalStorageTokenStore));
        let config = ClientConfig::new(env!("GROCER_API_BASE"));
        let api = Api::new(HttpClient::new(config, session.clone())?);
        Ok(Self {
            auth: AuthStore::new(api.clone()),
            api,
            session: RwSignal::new(session.state()),
            badges: RwSignal::new(Badges::default()),
            toast: RwSignal::new(None),
        })
    }

    /// Shows `message` for a few seconds. A newer toast replaces it.
    pub fn notify(&self, message: impl Into<String>) {
        let seq = self.toast.get_untracked().map_or(1, |(seq, _)| seq + 1);
        self.toast.set(Some((seq, message.into())));
        let toast = self.toast;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if toast.get_untracked().is_some_and(|(current, _)| current == seq) {
                toast.set(None);
            }
        });
    }

    /// Reloads the header counts. Failures only reset the counts.
    pub fn refresh_badges(&self) {
        let api = self.api.clone();
        let badges = self.badges;
        spawn_local(async move {
            badges.set(refresh_badges(&api).await);
        });
    }
}

/// Mirrors session transitions (own or other tabs) into the reactive state.
fn follow_session(state: &AppState) {
    let mut changes = state.api.session().subscribe();
    let signal = state.session;
    spawn_local(async move {
        while changes.changed().await.is_ok() {
            let next = changes.borrow_and_update().clone();
            signal.set(next);
        }
    });
    watch_other_tabs(state.api.session().clone());
}

fn page_title(page: String) -> String {
    if page.is_empty() {
        "Grocer".to_string()
    } else {
        format!("{page} | Grocer")
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to initialize API client: {}", e);
            return view! { <p class="fatal">"The storefront could not start. Please reload."</p> }.into_any();
        },
    };
    provide_meta_context();
    provide_context(state.clone());
    follow_session(&state);

    // Badge counts follow the session
    let badge_state = state.clone();
    Effect::new(move |_| {
        badge_state.session.track();
        badge_state.refresh_badges();
    });

    view! {
        <Title formatter=page_title />
        <Router>
            <div class="app-container">
                <Header />
                <main class="main-content">
                    <Routes fallback=|| "Page not found">
                        <Route path=path!("/") view=Catalog />
                        <Route path=path!("/products") view=Catalog />
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/barcode") view=Barcode />
                        <Route path=path!("/track") view=TrackOrder />
                        <Route path=path!("/cart") view=Cart />
                    </Routes>
                </main>
                <ToastHost />
            </div>
        </Router>
    }
    .into_any()
}
