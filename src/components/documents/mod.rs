//! Document browser screen.
//!
//! - [`breadcrumbs`] - path bar
//! - [`node_list`] - folder listing with per-row actions
//! - [`dialogs`] - create, rename and edit modals

mod breadcrumbs;
mod dialogs;
mod node_list;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Dialog;

use breadcrumbs::Breadcrumbs;
use dialogs::{DialogHost, DialogState};
use node_list::NodeList;

stylance::import_crate_style!(css, "src/components/documents/documents.module.css");

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let dialogs = DialogState::new();
    provide_context(dialogs);

    let busy = ctx.ui.busy;
    let at_root = Memo::new(move |_| ctx.ui.view.with(|v| v.trail.is_at_root()));

    let progress_class = move || {
        if busy.get() {
            format!("{} {}", css::progress, css::progressActive)
        } else {
            css::progress.to_string()
        }
    };

    // Always start from the root folder
    ctx.run(|desk| async move {
        desk.enter().await;
    });

    let on_up = move |_: leptos::ev::MouseEvent| {
        ctx.run(|desk| async move {
            desk.go_up().await;
        });
    };
    let on_refresh = move |_: leptos::ev::MouseEvent| {
        ctx.run(|desk| async move {
            desk.refresh().await;
        });
    };

    view! {
        <section class=css::page>
            <div class=progress_class></div>

            <div class=css::toolbar>
                <div class=css::toolbarGroup>
                    <button
                        class=css::iconButton
                        type="button"
                        title="Up"
                        disabled=move || at_root.get()
                        on:click=on_up
                    >
                        <Icon icon=ic::UP />
                    </button>
                    <Breadcrumbs />
                </div>
                <div class=css::toolbarGroup>
                    <button class=css::iconButton type="button" title="Refresh" on:click=on_refresh>
                        <Icon icon=ic::REFRESH />
                    </button>
                    <button
                        class=css::button
                        type="button"
                        on:click=move |_| dialogs.show(Dialog::CreateFolder)
                    >
                        <Icon icon=ic::FOLDER_PLUS />
                        <span>"New folder"</span>
                    </button>
                    <button
                        class=css::primaryButton
                        type="button"
                        on:click=move |_| dialogs.show(Dialog::CreateDocument)
                    >
                        <Icon icon=ic::FILE_PLUS />
                        <span>"New document"</span>
                    </button>
                </div>
            </div>

            <NodeList />
            <DialogHost />
        </section>
    }
}
