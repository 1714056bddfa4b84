//! Toast notifications.

use alfdocs_core::models::NoticeLevel;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::Toast;

stylance::import_crate_style!(css, "src/components/toasts/toasts.module.css");

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => css::success,
        NoticeLevel::Info => css::info,
        NoticeLevel::Warning => css::warning,
        NoticeLevel::Error => css::error,
    }
}

/// Stack of current notices. Each one goes away on its own or on click.
#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::stack aria-live="polite">
            <For
                each=move || ctx.ui.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("{} {}", css::toast, level_class(toast.notice.level));
                    let role = if toast.notice.level == NoticeLevel::Error { "alert" } else { "status" };
                    view! {
                        <div class=class role=role on:click=move |_| ctx.ui.dismiss(id)>
                            {toast.notice.title.map(|title| view! {
                                <strong class=css::title>{title}</strong>
                            })}
                            <span class=css::message>{toast.notice.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
