//! Screen-level policy over the clients.
//!
//! The [`Desk`] runs every user action, turns outcomes into [`Notice`]s and
//! reports everything the UI has to redraw through a [`DeskEvent`] sink.
//! Errors stop here.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::auth::{AuthClient, SignOut};
use crate::config::ClientConfig;
use crate::content::ContentClient;
use crate::error::ClientError;
use crate::models::{Identity, Node, Notice, normalize_name};
use crate::navigation::{BrowserView, Navigator};
use crate::session::SessionStore;
use crate::transport::Transport;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeskEvent {
    /// Folder, listing or trail changed.
    Changed(BrowserView),
    /// A request started (`true`) or the last pending one finished.
    Busy(bool),
    Notice(Notice),
    SignedIn(Identity),
    /// The session is gone; the UI should show the login screen.
    SignedOut,
}

struct Inner<T, S> {
    auth: AuthClient<T, S>,
    navigator: Navigator<T, S>,
    sink: Box<dyn Fn(DeskEvent)>,
    pending: Cell<usize>,
}

impl<T, S> Inner<T, S> {
    fn emit(&self, event: DeskEvent) {
        (self.sink)(event);
    }

    fn notify(&self, notice: Notice) {
        self.emit(DeskEvent::Notice(notice));
    }
}

/// Keeps the busy flag raised while at least one request is in flight.
struct BusyGuard<'a, T, S> {
    inner: &'a Inner<T, S>,
}

impl<'a, T, S> BusyGuard<'a, T, S> {
    fn new(inner: &'a Inner<T, S>) -> Self {
        let pending = inner.pending.get();
        inner.pending.set(pending + 1);
        if pending == 0 {
            inner.emit(DeskEvent::Busy(true));
        }
        Self { inner }
    }
}

impl<T, S> Drop for BusyGuard<'_, T, S> {
    fn drop(&mut self) {
        let pending = self.inner.pending.get().saturating_sub(1);
        self.inner.pending.set(pending);
        if pending == 0 {
            self.inner.emit(DeskEvent::Busy(false));
        }
    }
}

/// Cheap to clone; clones share the same clients and state.
pub struct Desk<T, S> {
    inner: Rc<Inner<T, S>>,
}

impl<T, S> Clone for Desk<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport, S: SessionStore> Desk<T, S> {
    pub fn new(
        transport: Rc<T>,
        store: Rc<S>,
        config: ClientConfig,
        sink: impl Fn(DeskEvent) + 'static,
    ) -> Self {
        let auth = AuthClient::new(Rc::clone(&transport), store, &config);
        let content = ContentClient::new(transport, auth.reader(), &config);
        let navigator = Navigator::new(content, config);
        Self {
            inner: Rc::new(Inner {
                auth,
                navigator,
                sink: Box::new(sink),
                pending: Cell::new(0),
            }),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::from_session(&self.inner.auth.session())
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.auth.session().is_signed_in()
    }

    pub fn view(&self) -> BrowserView {
        self.inner.navigator.view()
    }

    /// Returns `true` once signed in.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return false;
        }

        let result = {
            let _busy = BusyGuard::new(&self.inner);
            self.inner.auth.authenticate(username, password).await
        };
        match result {
            Ok(session) => {
                self.inner.notify(Notice::success("Signed in"));
                self.inner
                    .emit(DeskEvent::SignedIn(Identity::from_session(&session)));
                true
            }
            Err(ClientError::Storage(err)) => {
                self.inner
                    .notify(Notice::error(format!("Could not keep the session: {err}")));
                false
            }
            Err(_) => {
                self.inner.notify(
                    Notice::error("Invalid username or password").with_title("Error"),
                );
                false
            }
        }
    }

    pub async fn logout(&self) {
        let outcome = {
            let _busy = BusyGuard::new(&self.inner);
            self.inner.auth.sign_out().await
        };
        match outcome {
            SignOut::Confirmed | SignOut::NoTicket => {
                self.inner.notify(Notice::info("Signed out"));
            }
            SignOut::LocalOnly(_) => {
                self.inner.notify(
                    Notice::warning(
                        "Could not notify the server about the logout, but the local session was closed.",
                    )
                    .with_title("Notice"),
                );
            }
        }
        self.inner.navigator.reset();
        self.inner.emit(DeskEvent::SignedOut);
    }

    /// Show the root folder, as when the documents screen is entered.
    pub async fn enter(&self) -> bool {
        self.inner.navigator.reset();
        self.publish_view();
        self.navigate(self.inner.navigator.load()).await
    }

    pub async fn refresh(&self) -> bool {
        self.navigate(self.inner.navigator.load()).await
    }

    pub async fn open(&self, node: &Node) -> bool {
        if !self.inner.navigator.can_open(node) {
            return false;
        }
        self.navigate(async { self.inner.navigator.open(node).await.map(|_| ()) })
            .await
    }

    pub async fn go_up(&self) -> bool {
        if !self.inner.navigator.can_go_up() {
            return false;
        }
        self.navigate(async { self.inner.navigator.go_up().await.map(|_| ()) })
            .await
    }

    pub async fn go_to_breadcrumb(&self, index: usize) -> bool {
        if !self.inner.navigator.can_go_to(index) {
            return false;
        }
        self.navigate(async {
            self.inner
                .navigator
                .go_to_breadcrumb(index)
                .await
                .map(|_| ())
        })
        .await
    }

    /// Returns whether the create-folder dialog may close.
    pub async fn create_folder(&self, name: &str) -> bool {
        if normalize_name(name).is_none() {
            return false;
        }
        let result = {
            let _busy = BusyGuard::new(&self.inner);
            self.inner.navigator.create_folder(name).await
        };
        self.finish_edit(result, "Folder created", "Could not create the folder")
    }

    pub async fn create_document(&self, name: &str) -> bool {
        if normalize_name(name).is_none() {
            return false;
        }
        let result = {
            let _busy = BusyGuard::new(&self.inner);
            self.inner.navigator.create_document(name).await
        };
        self.finish_edit(result, "Document created", "Could not create the document")
    }

    pub async fn rename(&self, node: &Node, new_name: &str) -> bool {
        if normalize_name(new_name).is_none() || !node.is_renamable() {
            return false;
        }
        let result = {
            let _busy = BusyGuard::new(&self.inner);
            self.inner.navigator.rename(node, new_name).await
        };
        self.finish_edit(result, "Name updated", "Could not update the name")
    }

    /// Text to pre-fill the editor with, or `None` if it must not open.
    ///
    /// Unreadable content opens the editor empty with a warning.
    pub async fn load_content(&self, node: &Node) -> Option<String> {
        if !node.is_file() {
            return None;
        }
        let result = {
            let _busy = BusyGuard::new(&self.inner);
            self.inner.navigator.load_document_content(node).await
        };
        match result {
            Ok(text) => text,
            Err(ClientError::ContentUnavailable(err)) => {
                log::warn!("content of {} unavailable: {err}", node.id());
                self.inner.notify(
                    Notice::warning(
                        "Could not load the current content. You can write new content.",
                    )
                    .with_title("Notice"),
                );
                Some(String::new())
            }
            Err(err) => {
                self.fail(err, "Could not load the content");
                None
            }
        }
    }

    /// Returns whether the editor may close.
    pub async fn save_content(&self, node: &Node, text: &str) -> bool {
        if !node.is_file() {
            return false;
        }
        let result = {
            let _busy = BusyGuard::new(&self.inner);
            self.inner.navigator.save_document_content(node, text).await
        };
        match result {
            Ok(_) => {
                self.inner.notify(Notice::success("Content updated"));
                true
            }
            Err(err) => {
                self.fail(err, "Could not update the content");
                false
            }
        }
    }

    async fn navigate(&self, load: impl Future<Output = Result<(), ClientError>>) -> bool {
        let result = {
            let _busy = BusyGuard::new(&self.inner);
            load.await
        };
        // trail edits made before a failed load are still shown
        self.publish_view();
        match result {
            Ok(()) => true,
            Err(err) => {
                self.fail(err, "Could not load the content");
                false
            }
        }
    }

    fn finish_edit(
        &self,
        result: Result<Option<Node>, ClientError>,
        success: &str,
        failure: &str,
    ) -> bool {
        match result {
            Ok(Some(_)) => {
                self.publish_view();
                self.inner.notify(Notice::success(success));
                true
            }
            Ok(None) => false,
            Err(err) => {
                self.fail(err, failure);
                false
            }
        }
    }

    fn fail(&self, err: ClientError, message: &str) {
        if err.is_session_failure() {
            log::warn!("session lost: {err}");
            self.inner.auth.discard();
            self.inner.notify(
                Notice::error("Session expired. Please sign in again.")
                    .with_title("Authentication"),
            );
            self.inner.emit(DeskEvent::SignedOut);
        } else {
            log::error!("{message}: {err}");
            self.inner.notify(Notice::error(message).with_title("Error"));
        }
    }

    fn publish_view(&self) {
        self.inner
            .emit(DeskEvent::Changed(self.inner.navigator.view()));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::TransportError;
    use crate::models::{NoticeLevel, Session};
    use crate::session::MemoryStore;
    use crate::transport::{HttpRequest, HttpResponse, Method, MockTransport, fixtures};

    type Events = Rc<RefCell<Vec<DeskEvent>>>;

    struct Harness {
        desk: Desk<MockTransport, MemoryStore>,
        transport: Rc<MockTransport>,
        store: Rc<MemoryStore>,
        events: Events,
    }

    impl Harness {
        fn new(
            session: Session,
            handler: impl Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + 'static,
        ) -> Self {
            let transport = Rc::new(MockTransport::new(handler));
            let store = Rc::new(MemoryStore::with_session(session));
            let events: Events = Rc::default();
            let sink = Rc::clone(&events);
            let desk = Desk::new(
                Rc::clone(&transport),
                Rc::clone(&store),
                ClientConfig::default(),
                move |event| sink.borrow_mut().push(event),
            );
            Self {
                desk,
                transport,
                store,
                events,
            }
        }

        fn signed_in(
            handler: impl Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + 'static,
        ) -> Self {
            Self::new(Session::new("T", "admin"), handler)
        }

        fn take(&self) -> Vec<DeskEvent> {
            self.events.borrow_mut().drain(..).collect()
        }

        fn notices(&self) -> Vec<Notice> {
            self.take()
                .into_iter()
                .filter_map(|e| match e {
                    DeskEvent::Notice(n) => Some(n),
                    _ => None,
                })
                .collect()
        }
    }

    fn root_listing(_: &HttpRequest) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse::json(
            200,
            &fixtures::children(vec![
                fixtures::node("f1", "Reports", "cm:folder"),
                fixtures::node("d1", "notes.txt", "cm:content"),
            ]),
        ))
    }

    #[tokio::test]
    async fn test_login_success() {
        let h = Harness::new(Session::default(), |_| {
            Ok(HttpResponse::json(201, &fixtures::ticket("TICKET_x")))
        });

        assert!(h.desk.login(" ana ", "secret").await);
        assert_eq!(h.store.get(), Session::new("TICKET_x", "ana"));
        let events = h.take();
        assert_eq!(events.first(), Some(&DeskEvent::Busy(true)));
        assert!(events.contains(&DeskEvent::Busy(false)));
        assert!(events.iter().any(|e| matches!(
            e,
            DeskEvent::SignedIn(identity) if identity.display_name() == "ana"
        )));
        assert_eq!(h.desk.identity().initial(), 'A');
    }

    #[tokio::test]
    async fn test_login_failure_message() {
        let h = Harness::new(Session::default(), |_| Ok(HttpResponse::new(403, "")));

        assert!(!h.desk.login("admin", "wrong").await);
        let notices = h.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Invalid username or password");
        assert!(!h.desk.is_signed_in());
    }

    #[tokio::test]
    async fn test_login_blank_fields_send_nothing() {
        let h = Harness::new(Session::default(), |req| {
            panic!("unexpected request: {}", req.url)
        });
        assert!(!h.desk.login("", "pw").await);
        assert!(!h.desk.login("  ", "pw").await);
        assert!(!h.desk.login("admin", "").await);
        assert!(h.take().is_empty());
        assert_eq!(h.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_warns_when_only_local() {
        let h = Harness::signed_in(|_| Err(TransportError::new("offline")));

        h.desk.logout().await;
        let events = h.take();
        assert_eq!(events.last(), Some(&DeskEvent::SignedOut));
        assert!(events.iter().any(|e| matches!(
            e,
            DeskEvent::Notice(n) if n.level == NoticeLevel::Warning
        )));
        assert!(!h.desk.is_signed_in());
    }

    #[tokio::test]
    async fn test_logout_confirmed_is_info() {
        let h = Harness::signed_in(|_| Ok(HttpResponse::new(204, "")));
        h.desk.logout().await;
        let notices = h.notices();
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(h.store.get(), Session::default());
    }

    #[tokio::test]
    async fn test_enter_publishes_root_listing() {
        let h = Harness::signed_in(root_listing);

        assert!(h.desk.enter().await);
        let Some(DeskEvent::Changed(view)) = h
            .take()
            .into_iter()
            .filter(|e| matches!(e, DeskEvent::Changed(_)))
            .last()
        else {
            panic!("no view published");
        };
        assert_eq!(view.folder_id, "-my-");
        assert_eq!(view.listing.len(), 2);
    }

    #[tokio::test]
    async fn test_expired_session_forces_logout() {
        let h = Harness::signed_in(|_| Ok(HttpResponse::new(401, "")));

        assert!(!h.desk.open(&Node::folder("f1", "Reports")).await);
        let events = h.take();
        assert!(events.contains(&DeskEvent::SignedOut));
        assert!(events.iter().any(|e| matches!(
            e,
            DeskEvent::Notice(n) if n.message.starts_with("Session expired")
        )));
        assert_eq!(h.store.get(), Session::default());
        // listing untouched
        assert_eq!(h.desk.view().trail.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_ticket_forces_logout() {
        let h = Harness::new(Session::default(), |req| {
            panic!("unexpected request: {}", req.url)
        });
        assert!(!h.desk.refresh().await);
        assert!(h.take().contains(&DeskEvent::SignedOut));
    }

    #[tokio::test]
    async fn test_operation_failure_keeps_session() {
        let h = Harness::signed_in(|req| match req.method {
            Method::Get => root_listing(req),
            _ => Ok(HttpResponse::new(500, "")),
        });
        h.desk.enter().await;
        h.take();

        assert!(!h.desk.create_folder("Projects").await);
        let events = h.take();
        assert!(!events.contains(&DeskEvent::SignedOut));
        assert!(events.iter().any(|e| matches!(
            e,
            DeskEvent::Notice(n) if n.message == "Could not create the folder"
        )));
        assert!(h.desk.is_signed_in());
        assert_eq!(h.desk.view().listing.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_dialog_input_is_ignored() {
        let h = Harness::signed_in(|req| panic!("unexpected request: {}", req.url));
        let doc = Node::file("d1", "notes.txt");

        assert!(!h.desk.create_folder(" ").await);
        assert!(!h.desk.create_document("").await);
        assert!(!h.desk.rename(&doc, "   ").await);
        assert!(!h.desk.go_up().await);
        assert!(!h.desk.go_to_breadcrumb(3).await);
        assert!(!h.desk.open(&doc).await);
        assert!(h.take().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_content_opens_empty_editor() {
        let h = Harness::signed_in(|_| Ok(HttpResponse::new(500, "")));
        let doc = Node::file("d1", "notes.txt");

        assert_eq!(h.desk.load_content(&doc).await, Some(String::new()));
        let notices = h.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert!(h.desk.is_signed_in());

        assert_eq!(h.desk.load_content(&Node::folder("f1", "Reports")).await, None);
    }

    #[tokio::test]
    async fn test_save_content() {
        let h = Harness::signed_in(|_| {
            Ok(HttpResponse::json(
                200,
                &fixtures::entry(fixtures::node("d1", "notes.txt", "cm:content")),
            ))
        });
        let doc = Node::file("d1", "notes.txt");
        assert!(h.desk.save_content(&doc, "hello").await);
        assert_eq!(h.notices()[0].message, "Content updated");
    }

    #[tokio::test]
    async fn test_busy_spans_overlapping_requests() {
        let h = Harness::signed_in(root_listing);
        let (a, b) = tokio::join!(h.desk.refresh(), h.desk.refresh());
        assert!(a && b);
        let busy: Vec<_> = h
            .take()
            .into_iter()
            .filter(|e| matches!(e, DeskEvent::Busy(_)))
            .collect();
        assert_eq!(busy.first(), Some(&DeskEvent::Busy(true)));
        assert_eq!(busy.last(), Some(&DeskEvent::Busy(false)));
    }
}
