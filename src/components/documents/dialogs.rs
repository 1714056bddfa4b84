//! Modal dialogs: create folder, create document, rename, edit content.

use alfdocs_core::models::Node;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Dialog;

stylance::import_crate_style!(css, "src/components/documents/dialogs.module.css");

/// Which dialog is open and the text being edited in it.
#[derive(Clone, Copy)]
pub struct DialogState {
    pub open: RwSignal<Option<Dialog>>,
    pub text: RwSignal<String>,
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(None),
            text: RwSignal::new(String::new()),
        }
    }

    pub fn show(&self, dialog: Dialog) {
        self.text.set(dialog.initial_text());
        self.open.set(Some(dialog));
    }

    pub fn close(&self) {
        self.open.set(None);
    }

    /// Close `dialog` unless another one has been opened meanwhile.
    fn close_if(&self, dialog: &Dialog) {
        if self.is_showing(|open| same_dialog(open, dialog)) {
            self.close();
        }
    }

    fn is_showing(&self, pred: impl Fn(&Dialog) -> bool) -> bool {
        self.open
            .try_with_untracked(|open| open.as_ref().is_some_and(&pred))
            .unwrap_or(false)
    }

    /// Open the editor for `node` and fill it with the current content.
    pub fn edit_content(&self, ctx: AppContext, node: Node) {
        self.show(Dialog::EditContent {
            node: node.clone(),
            loading: true,
        });

        let this = *self;
        ctx.run(move |desk| async move {
            let loaded = desk.load_content(&node).await;
            let editing = |open: &Dialog| {
                matches!(open, Dialog::EditContent { node: n, .. } if n.id() == node.id())
            };
            if !this.is_showing(editing) {
                return;
            }
            match loaded {
                Some(text) => {
                    this.text.set(text);
                    this.open.set(Some(Dialog::EditContent {
                        node,
                        loading: false,
                    }));
                }
                None => this.close(),
            }
        });
    }
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

fn same_dialog(a: &Dialog, b: &Dialog) -> bool {
    match (a, b) {
        (Dialog::Rename(x), Dialog::Rename(y)) => x.id() == y.id(),
        (Dialog::EditContent { node: x, .. }, Dialog::EditContent { node: y, .. }) => {
            x.id() == y.id()
        }
        _ => a == b,
    }
}

/// Renders whichever dialog is open.
#[component]
pub fn DialogHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = use_context::<DialogState>().expect("DialogState must be provided");
    let busy = ctx.ui.busy;
    let text = state.text;

    let submit = move || {
        let Some(dialog) = state.open.get_untracked() else {
            return;
        };
        let value = text.get_untracked();
        ctx.run(move |desk| async move {
            let done = match &dialog {
                Dialog::CreateFolder => desk.create_folder(&value).await,
                Dialog::CreateDocument => desk.create_document(&value).await,
                Dialog::Rename(node) => desk.rename(node, &value).await,
                Dialog::EditContent { node, .. } => desk.save_content(node, &value).await,
            };
            if done {
                state.close_if(&dialog);
            }
        });
    };

    move || {
        state.open.get().map(|dialog| {
            let title = dialog.title();
            let is_editor = matches!(dialog, Dialog::EditContent { .. });
            let loading = matches!(dialog, Dialog::EditContent { loading: true, .. });
            let hint = matches!(dialog, Dialog::CreateDocument)
                .then_some("\".txt\" is added if the name does not end with it.");
            let submit_label = if is_editor { "Save" } else { "Accept" };

            let blocked = Signal::derive(move || {
                busy.get() || loading || (!is_editor && text.with(|t| t.trim().is_empty()))
            });

            let on_submit = move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                if !blocked.get_untracked() {
                    submit();
                }
            };

            let field = if is_editor {
                view! {
                    <textarea
                        class=css::textarea
                        rows="14"
                        disabled=loading
                        placeholder=if loading { "Loading..." } else { "" }
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        class=css::input
                        type="text"
                        autofocus
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    />
                }
                .into_any()
            };

            view! {
                <div class=css::backdrop on:click=move |_| state.close()></div>
                <form
                    class=if is_editor { css::dialogWide } else { css::dialog }
                    role="dialog"
                    aria-modal="true"
                    on:submit=on_submit
                >
                    <header class=css::header>
                        <h2 class=css::title>{title}</h2>
                        <button
                            class=css::close
                            type="button"
                            aria-label="Close"
                            on:click=move |_| state.close()
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </header>
                    <div class=css::body>
                        {field}
                        {hint.map(|hint| view! { <p class=css::hint>{hint}</p> })}
                    </div>
                    <footer class=css::footer>
                        <button class=css::cancel type="button" on:click=move |_| state.close()>
                            "Cancel"
                        </button>
                        <button class=css::confirm type="submit" disabled=move || blocked.get()>
                            {submit_label}
                        </button>
                    </footer>
                </form>
            }
        })
    }
}
