//! Folder listing.

use alfdocs_core::models::{Node, NodeKind};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::documents::dialogs::DialogState;
use crate::components::icons as ic;
use crate::models::Dialog;
use crate::utils::format::{format_page_note, format_timestamp};

stylance::import_crate_style!(css, "src/components/documents/documents.module.css");

fn icon_for(node: &Node) -> IconData {
    match node.kind() {
        NodeKind::Folder => ic::FOLDER,
        NodeKind::File => ic::FILE_TEXT,
        NodeKind::Other => ic::FILE,
    }
}

#[component]
pub fn NodeList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let view_state = ctx.ui.view;
    let busy = ctx.ui.busy;

    let listing = Memo::new(move |_| view_state.with(|v| v.listing.clone()));
    let is_empty = Signal::derive(move || listing.with(Vec::is_empty));

    let page_note = Signal::derive(move || {
        view_state.with(|v| {
            v.pagination
                .as_ref()
                .filter(|p| p.is_truncated())
                .map(|p| format_page_note(v.listing.len(), p.total_items))
        })
    });

    view! {
        <div class=css::table role="grid" aria-label="Folder contents">
            <div class=css::headerRow role="row">
                <span></span>
                <span>"Name"</span>
                <span>"Modified"</span>
                <span class=css::actionsHeader>"Actions"</span>
            </div>
            // keyed by name too, so renamed rows are redrawn
            <For
                each=move || listing.get()
                key=|node| (node.id().to_string(), node.name().to_string())
                children=move |node| view! { <NodeRow node=node /> }
            />
            <Show when=move || is_empty.get() && !busy.get()>
                <p class=css::empty>"This folder is empty."</p>
            </Show>
        </div>
        {move || page_note.get().map(|note| view! { <p class=css::note>{note}</p> })}
    }
}

#[component]
fn NodeRow(node: Node) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let dialogs = use_context::<DialogState>().expect("DialogState must be provided");

    let icon = icon_for(&node);
    let modified = format_timestamp(node.modified_at());
    let can_rename = node.is_renamable();
    let can_edit = node.is_file();
    let is_folder = node.is_folder();

    let name = if is_folder {
        let target = node.clone();
        let on_open = move |_: leptos::ev::MouseEvent| {
            let target = target.clone();
            ctx.run(move |desk| async move {
                desk.open(&target).await;
            });
        };
        view! {
            <button class=css::folderName type="button" on:click=on_open>
                {node.name().to_string()}
            </button>
        }
        .into_any()
    } else {
        view! { <span class=css::fileName>{node.name().to_string()}</span> }.into_any()
    };

    let rename_target = node.clone();
    let edit_target = node.clone();

    view! {
        <div class=css::row role="row">
            <span class=css::icon><Icon icon=icon /></span>
            {name}
            <span class=css::date>{modified}</span>
            <span class=css::actions>
                {can_rename.then(|| view! {
                    <button
                        class=css::iconButton
                        type="button"
                        title="Rename"
                        on:click=move |_| dialogs.show(Dialog::Rename(rename_target.clone()))
                    >
                        <Icon icon=ic::EDIT />
                    </button>
                })}
                {can_edit.then(|| view! {
                    <button
                        class=css::iconButton
                        type="button"
                        title="Edit content"
                        on:click=move |_| dialogs.edit_content(ctx, edit_target.clone())
                    >
                        <Icon icon=ic::FILE_TEXT />
                    </button>
                })}
            </span>
        </div>
    }
}
