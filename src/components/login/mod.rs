//! Login form.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/login/login.module.css");

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let busy = ctx.ui.busy;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let incomplete =
        Signal::derive(move || username.get().trim().is_empty() || password.get().is_empty());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || incomplete.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        ctx.run(move |desk| async move {
            if !desk.login(&user, &pass).await {
                password.set(String::new());
            }
        });
    };

    view! {
        <section class=css::page>
            <form class=css::card on:submit=on_submit>
                <div class=css::badge>
                    <Icon icon=ic::USER />
                </div>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::subtitle>{APP_TAGLINE}</p>

                <label class=css::field>
                    <span class=css::label>"Username"</span>
                    <input
                        class=css::input
                        type="text"
                        autocomplete="username"
                        required
                        bind:value=username
                    />
                </label>
                <label class=css::field>
                    <span class=css::label>"Password"</span>
                    <input
                        class=css::input
                        type="password"
                        autocomplete="current-password"
                        required
                        bind:value=password
                    />
                </label>

                <button
                    class=css::submit
                    type="submit"
                    disabled=move || busy.get() || incomplete.get()
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </section>
    }
}
