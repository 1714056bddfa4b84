//! Breadcrumb bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/documents/documents.module.css");

/// Path from the root folder to the current one. Any entry, including the
/// current folder, can be clicked to (re)load it.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let crumbs = Memo::new(move |_| ctx.ui.view.with(|v| v.trail.crumbs().to_vec()));

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(index, crumb)| {
                        let class = if index == last { css::crumbCurrent } else { css::crumb };
                        let on_click = move |_: leptos::ev::MouseEvent| {
                            ctx.run(move |desk| async move {
                                desk.go_to_breadcrumb(index).await;
                            });
                        };
                        view! {
                            {(index > 0).then(|| view! {
                                <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span>
                            })}
                            <button class=class type="button" on:click=on_click>
                                {(index == 0).then(|| view! { <Icon icon=ic::HOME /> })}
                                <span>{crumb.name}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
