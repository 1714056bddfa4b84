//! Login, browse, edit and logout against a scripted backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use alfdocs_core::models::{Node, NoticeLevel};
use alfdocs_core::transport::{MockTransport, fixtures};
use alfdocs_core::{
    Body, ClientConfig, Desk, DeskEvent, HttpRequest, HttpResponse, MemoryStore, Method,
    SessionStore, TransportError,
};
use serde_json::{Value, json};

/// In-memory repository: folder id -> children, plus document texts.
#[derive(Default)]
struct Repo {
    children: HashMap<String, Vec<Value>>,
    texts: HashMap<String, String>,
    next_id: usize,
}

impl Repo {
    fn seeded() -> Self {
        let mut repo = Self::default();
        repo.children.insert(
            "-my-".into(),
            vec![
                fixtures::node("f1", "Reports", "cm:folder"),
                fixtures::node("d1", "todo.txt", "cm:content"),
            ],
        );
        repo.children.insert("f1".into(), vec![]);
        repo.texts.insert("d1".into(), "buy milk".into());
        repo
    }

    fn handle(&mut self, req: &HttpRequest) -> HttpResponse {
        if req.path().ends_with("/tickets") {
            return HttpResponse::json(201, &fixtures::ticket("TICKET_e2e"));
        }
        if req.path().ends_with("/tickets/-me-") {
            return HttpResponse::new(204, "");
        }
        if req.query_param("alf_ticket") != Some("TICKET_e2e") {
            return HttpResponse::new(401, "");
        }

        let Some((_, rest)) = req.path().split_once("/nodes/") else {
            return HttpResponse::new(404, "");
        };
        let mut parts = rest.splitn(2, '/');
        let id = parts.next().unwrap_or_default().to_string();
        match (req.method, parts.next()) {
            (Method::Get, Some("children")) => match self.children.get(&id) {
                Some(nodes) => HttpResponse::json(200, &fixtures::children(nodes.clone())),
                None => HttpResponse::new(404, ""),
            },
            (Method::Post, Some("children")) => {
                let Some(Body::Json(body)) = &req.body else {
                    return HttpResponse::new(400, "");
                };
                self.next_id += 1;
                let new_id = format!("n{}", self.next_id);
                let name = body["name"].as_str().unwrap_or_default();
                let node_type = body["nodeType"].as_str().unwrap_or_default();
                let node = fixtures::node(&new_id, name, node_type);
                if node_type == "cm:folder" {
                    self.children.insert(new_id.clone(), vec![]);
                }
                self.children.entry(id).or_default().insert(0, node.clone());
                HttpResponse::json(201, &fixtures::entry(node))
            }
            (Method::Get, Some("content")) => match self.texts.get(&id) {
                Some(text) => HttpResponse::new(200, text.clone()),
                None => HttpResponse::new(404, ""),
            },
            (Method::Put, Some("content")) => {
                let Some(Body::Text(text)) = &req.body else {
                    return HttpResponse::new(400, "");
                };
                self.texts.insert(id.clone(), text.clone());
                let node = fixtures::node(&id, "doc", "cm:content");
                HttpResponse::json(200, &fixtures::entry(node))
            }
            (Method::Put, None) => {
                let Some(Body::Json(body)) = &req.body else {
                    return HttpResponse::new(400, "");
                };
                for nodes in self.children.values_mut() {
                    for node in nodes.iter_mut().filter(|n| n["id"] == json!(id)) {
                        node["name"] = body["name"].clone();
                    }
                }
                HttpResponse::json(200, &fixtures::entry(json!({"id": id, "name": body["name"]})))
            }
            _ => HttpResponse::new(405, ""),
        }
    }
}

type Events = Rc<RefCell<Vec<DeskEvent>>>;

fn setup() -> (Desk<MockTransport, MemoryStore>, Rc<MemoryStore>, Events) {
    let repo = RefCell::new(Repo::seeded());
    let transport = Rc::new(MockTransport::new(move |req: &HttpRequest| {
        Ok::<_, TransportError>(repo.borrow_mut().handle(req))
    }));
    let store = Rc::new(MemoryStore::new());
    let events: Events = Rc::default();
    let sink = Rc::clone(&events);
    let desk = Desk::new(transport, Rc::clone(&store), ClientConfig::default(), move |e| {
        sink.borrow_mut().push(e)
    });
    (desk, store, events)
}

fn names(desk: &Desk<MockTransport, MemoryStore>) -> Vec<String> {
    desk.view().listing.iter().map(|n| n.name().to_string()).collect()
}

#[tokio::test]
async fn test_full_session() {
    let (desk, store, events) = setup();

    assert!(desk.login("admin", "admin").await);
    assert_eq!(store.get().ticket(), Some("TICKET_e2e"));

    assert!(desk.enter().await);
    assert_eq!(names(&desk), vec!["Reports", "todo.txt"]);

    // into Reports, add a document, edit it
    let reports = desk.view().listing[0].clone();
    assert!(desk.open(&reports).await);
    assert_eq!(desk.view().trail.current().name, "Reports");
    assert!(desk.create_document("minutes").await);
    assert_eq!(names(&desk), vec!["minutes.txt"]);

    let doc = desk.view().listing[0].clone();
    // fresh document has no text yet
    assert_eq!(desk.load_content(&doc).await, Some(String::new()));
    assert!(desk.save_content(&doc, "agenda").await);
    assert_eq!(desk.load_content(&doc).await.as_deref(), Some("agenda"));

    // back to root, rename in place
    assert!(desk.go_to_breadcrumb(0).await);
    let todo = desk.view().listing[1].clone();
    assert!(desk.rename(&todo, "done.txt").await);
    assert_eq!(names(&desk), vec!["Reports", "done.txt"]);
    assert!(desk.refresh().await);
    assert_eq!(names(&desk), vec!["Reports", "done.txt"]);

    desk.logout().await;
    assert!(!store.get().is_signed_in());
    assert_eq!(events.borrow().last(), Some(&DeskEvent::SignedOut));
}

#[tokio::test]
async fn test_stale_ticket_sends_user_back_to_login() {
    let (desk, store, events) = setup();
    store.set("TICKET_old", "admin").unwrap();

    assert!(!desk.enter().await);
    assert!(!store.get().is_signed_in());
    let events = events.borrow();
    assert!(events.contains(&DeskEvent::SignedOut));
    assert!(events.iter().any(|e| matches!(
        e,
        DeskEvent::Notice(n) if n.level == NoticeLevel::Error
    )));
}

#[tokio::test]
async fn test_files_cannot_be_opened() {
    let (desk, _, _) = setup();
    desk.login("admin", "admin").await;
    desk.enter().await;
    assert!(!desk.open(&Node::file("d1", "todo.txt")).await);
    assert_eq!(desk.view().trail.len(), 1);
}

#[tokio::test]
async fn test_rejected_ticket_keeps_loaded_listing() {
    let (desk, store, events) = setup();
    desk.login("admin", "admin").await;
    assert!(desk.enter().await);
    let loaded = desk.view();
    assert_eq!(loaded.listing.len(), 2);

    store.set("TICKET_old", "admin").unwrap();
    events.borrow_mut().clear();
    assert!(!desk.refresh().await);
    assert_eq!(desk.view().listing, loaded.listing);
    assert!(!store.get().is_signed_in());
    assert!(events.borrow().contains(&DeskEvent::SignedOut));

    store.set("TICKET_old", "admin").unwrap();
    events.borrow_mut().clear();
    assert!(!desk.create_folder("Archive").await);
    assert_eq!(desk.view().listing, loaded.listing);
    assert!(!store.get().is_signed_in());
    assert!(events.borrow().contains(&DeskEvent::SignedOut));
}
