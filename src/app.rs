//! Root application module.
//!
//! Contains the App component and the [`AppContext`] shared by every
//! component. The [`Desk`] does the work; its events are folded into the
//! signals held here.

use std::future::Future;
use std::rc::Rc;

use alfdocs_core::models::{Identity, Notice};
use alfdocs_core::{BrowserView, Desk, DeskEvent, SessionStore};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::AppConfig;
use crate::models::{AppRoute, Toast};
use crate::utils::{FetchTransport, LocalStorageStore};

pub type AppDesk = Desk<FetchTransport, LocalStorageStore>;

// ============================================================================
// UiState
// ============================================================================

/// Reactive state rendered by the components.
///
/// `Copy`: every field is a signal or stored value.
#[derive(Clone, Copy)]
pub struct UiState {
    pub route: RwSignal<AppRoute>,
    pub view: RwSignal<BrowserView>,
    /// A request is in flight.
    pub busy: RwSignal<bool>,
    pub identity: RwSignal<Identity>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast: StoredValue<u64>,
    notice_timeout_ms: u32,
}

impl UiState {
    fn new(config: &AppConfig, identity: Identity) -> Self {
        Self {
            route: RwSignal::new(AppRoute::current()),
            view: RwSignal::new(BrowserView::new(&config.backend)),
            busy: RwSignal::new(false),
            identity: RwSignal::new(identity),
            toasts: RwSignal::new(Vec::new()),
            next_toast: StoredValue::new(0),
            notice_timeout_ms: config.ui.notice_timeout_ms,
        }
    }

    fn apply(&self, event: DeskEvent) {
        match event {
            DeskEvent::Changed(view) => self.view.set(view),
            DeskEvent::Busy(busy) => self.busy.set(busy),
            DeskEvent::Notice(notice) => self.notify(notice),
            DeskEvent::SignedIn(identity) => {
                self.identity.set(identity);
                self.navigate(AppRoute::Documents);
            }
            DeskEvent::SignedOut => {
                self.identity.set(Identity::default());
                self.navigate(AppRoute::Login);
            }
        }
    }

    pub fn navigate(&self, route: AppRoute) {
        if self.route.get_untracked() != route {
            route.push();
            self.route.set(route);
        }
    }

    /// Show a toast and schedule its removal.
    pub fn notify(&self, notice: Notice) {
        let id = self.next_toast.get_value();
        self.next_toast.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let this = *self;
        Timeout::new(self.notice_timeout_ms, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context, provided at the root of the component tree.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub ui: UiState,
    desk: StoredValue<AppDesk, LocalStorage>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let store = LocalStorageStore::new(config.session.clone());
        let identity = Identity::from_session(&store.get());
        let ui = UiState::new(config, identity);

        let desk = Desk::new(
            Rc::new(FetchTransport),
            Rc::new(store),
            config.backend.clone(),
            move |event| ui.apply(event),
        );

        Self {
            ui,
            desk: StoredValue::new_local(desk),
        }
    }

    pub fn desk(&self) -> AppDesk {
        self.desk.get_value()
    }

    /// Run a desk action in the background.
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppDesk) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.desk()));
    }
}

/// Root application component with error boundary.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f6f8;
                    color: #1f2933;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #c0392b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #52606d; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #7b8794;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #c0392b;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2f6fde;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
