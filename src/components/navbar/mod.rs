//! Top bar with the session indicator.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Brand on the left, signed-in user and their menu on the right.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let identity = ctx.ui.identity;
    let (menu_open, set_menu_open) = signal(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        set_menu_open.set(false);
        ctx.run(|desk| async move { desk.logout().await });
    };

    view! {
        <header class=css::navbar>
            <span class=css::brand>
                <Icon icon=ic::FOLDER />
                <span>{APP_NAME}</span>
            </span>

            <div class=css::user>
                <button
                    class=css::toggle
                    aria-haspopup="menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class=css::avatar>{move || identity.get().initial().to_string()}</span>
                    <span class=css::userText>
                        <span class=css::userName>
                            {move || identity.get().display_name().to_string()}
                        </span>
                        <span class=css::userRole>{move || identity.get().role()}</span>
                    </span>
                </button>

                <Show when=move || menu_open.get()>
                    <div class=css::backdrop on:click=move |_| set_menu_open.set(false)></div>
                    <div class=css::menu role="menu">
                        <button class=css::menuItem role="menuitem" on:click=on_logout>
                            <Icon icon=ic::LOGOUT />
                            <span>"Log out"</span>
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
