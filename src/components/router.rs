//! Application router.
//!
//! Hash routing on native `hashchange` events: the URL hash is the source
//! of truth and the browser's back/forward buttons work without extra code.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::documents::DocumentsPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::toasts::Toasts;
use crate::models::AppRoute;

/// Main application router.
///
/// - `#/login` (and anything unknown) → login form
/// - `#/documents` → document browser, only with a session
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.ui.route;

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Documents without a session: back to login, replacing the entry
    Effect::new(move |_| {
        let current = route.get();
        if current.requires_session() && !ctx.ui.identity.get().is_signed_in() {
            AppRoute::Login.replace();
            route.set(AppRoute::Login);
        }
    });

    // Memo so the documents page is not re-mounted by unrelated updates
    let show_documents = Memo::new(move |_| {
        route.get() == AppRoute::Documents && ctx.ui.identity.get().is_signed_in()
    });
    let page = move || {
        if show_documents.get() {
            view! { <DocumentsPage /> }.into_any()
        } else {
            view! { <LoginPage /> }.into_any()
        }
    };

    view! {
        <Show when=move || route.get() != AppRoute::Login>
            <Navbar />
        </Show>
        <main>{page}</main>
        <Toasts />
    }
}
