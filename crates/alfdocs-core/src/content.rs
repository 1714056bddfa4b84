//! Node-tree operations against the repository.
//!
//! Every call needs a ticket; without one it fails with
//! [`ClientError::NoSession`] before anything is sent.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::endpoints::Endpoints;
use crate::error::ClientError;
use crate::models::{CONTENT_NODE_TYPE, FOLDER_NODE_TYPE, Node, NodeListing};
use crate::session::{SessionReader, SessionStore};
use crate::transport::{Body, HttpRequest, HttpResponse, Method, Transport};
use crate::wire::{ChildrenResponse, Entry, NameUpdate, NewNode, RawNode};

pub struct ContentClient<T, S> {
    transport: Rc<T>,
    session: SessionReader<S>,
    endpoints: Endpoints,
}

impl<T: Transport, S: SessionStore> ContentClient<T, S> {
    pub fn new(transport: Rc<T>, session: SessionReader<S>, config: &ClientConfig) -> Self {
        Self {
            transport,
            session,
            endpoints: Endpoints::new(&config.api_base),
        }
    }

    /// First page of children of `folder_id`.
    pub async fn list_children(&self, folder_id: &str) -> Result<NodeListing, ClientError> {
        let ticket = self.ticket()?;
        let request = HttpRequest::new(Method::Get, self.endpoints.children(folder_id, &ticket));
        let page: ChildrenResponse = decode(&self.execute(request).await?)?;

        Ok(NodeListing {
            parent_id: folder_id.to_string(),
            nodes: page.list.entries.into_iter().map(|e| Node::from(e.entry)).collect(),
            pagination: page.list.pagination,
        })
    }

    pub async fn get_node(&self, node_id: &str) -> Result<Node, ClientError> {
        let ticket = self.ticket()?;
        let request = HttpRequest::new(Method::Get, self.endpoints.node(node_id, &ticket));
        self.node_request(request).await
    }

    /// Update only the name of a node.
    pub async fn rename(&self, node_id: &str, new_name: &str) -> Result<Node, ClientError> {
        let ticket = self.ticket()?;
        let request = HttpRequest::new(Method::Put, self.endpoints.node(node_id, &ticket))
            .with_body(json_body(&NameUpdate { name: new_name })?);
        self.node_request(request).await
    }

    pub async fn create_folder(&self, parent_id: &str, name: &str) -> Result<Node, ClientError> {
        self.create_child(parent_id, name, FOLDER_NODE_TYPE).await
    }

    /// Create an empty content node. `file_name` is used as given.
    pub async fn create_text_document(
        &self,
        parent_id: &str,
        file_name: &str,
    ) -> Result<Node, ClientError> {
        self.create_child(parent_id, file_name, CONTENT_NODE_TYPE).await
    }

    /// Raw text of a document; a node without content yields `""`.
    pub async fn get_text_content(&self, node_id: &str) -> Result<String, ClientError> {
        let ticket = self.ticket()?;
        let request = HttpRequest::new(Method::Get, self.endpoints.content(node_id, &ticket));
        Ok(self.execute(request).await?.body)
    }

    /// Overwrite the content of a document as plain text.
    pub async fn set_text_content(&self, node_id: &str, text: &str) -> Result<Node, ClientError> {
        let ticket = self.ticket()?;
        let request = HttpRequest::new(Method::Put, self.endpoints.content(node_id, &ticket))
            .with_body(Body::Text(text.to_string()));
        self.node_request(request).await
    }

    async fn create_child(
        &self,
        parent_id: &str,
        name: &str,
        node_type: &str,
    ) -> Result<Node, ClientError> {
        let ticket = self.ticket()?;
        let request = HttpRequest::new(Method::Post, self.endpoints.children(parent_id, &ticket))
            .with_body(json_body(&NewNode { name, node_type })?);
        self.node_request(request).await
    }

    async fn node_request(&self, request: HttpRequest) -> Result<Node, ClientError> {
        let entry: Entry<RawNode> = decode(&self.execute(request).await?)?;
        Ok(Node::from(entry.entry))
    }

    fn ticket(&self) -> Result<String, ClientError> {
        self.session.ticket().ok_or(ClientError::NoSession)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = request.method;
        let path = request.path().to_string();
        log::debug!("{} {}", method.as_str(), path);

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            log::warn!("{} {} -> HTTP {}", method.as_str(), path, response.status);
            Err(ClientError::from_status(response.status))
        }
    }
}

fn json_body<B: serde::Serialize>(body: &B) -> Result<Body, ClientError> {
    serde_json::to_value(body)
        .map(Body::Json)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ClientError> {
    serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::models::{NodeKind, Session};
    use crate::session::MemoryStore;
    use crate::transport::{MockTransport, fixtures};
    use serde_json::json;

    fn client(
        transport: &Rc<MockTransport>,
        session: Session,
    ) -> ContentClient<MockTransport, MemoryStore> {
        let store = Rc::new(MemoryStore::with_session(session));
        ContentClient::new(
            Rc::clone(transport),
            SessionReader::new(store),
            &ClientConfig::default(),
        )
    }

    fn signed_in() -> Session {
        Session::new("TICKET_1", "admin")
    }

    #[tokio::test]
    async fn test_no_ticket_sends_nothing() {
        let transport = Rc::new(MockTransport::unreachable());
        let content = client(&transport, Session::default());

        assert_eq!(content.list_children("-my-").await, Err(ClientError::NoSession));
        assert_eq!(content.get_node("n1").await, Err(ClientError::NoSession));
        assert_eq!(content.rename("n1", "x").await, Err(ClientError::NoSession));
        assert_eq!(content.create_folder("-my-", "x").await, Err(ClientError::NoSession));
        assert_eq!(
            content.create_text_document("-my-", "x.txt").await,
            Err(ClientError::NoSession)
        );
        assert_eq!(content.get_text_content("n1").await, Err(ClientError::NoSession));
        assert_eq!(content.set_text_content("n1", "x").await, Err(ClientError::NoSession));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_list_children() {
        let transport = Rc::new(MockTransport::new(|_| {
            let mut page = fixtures::children(vec![
                fixtures::node("f1", "Reports", "cm:folder"),
                fixtures::node("d1", "notes.txt", "cm:content"),
                json!({"id": "s1", "name": "site", "nodeType": "st:site"}),
            ]);
            page["list"]["pagination"]["hasMoreItems"] = json!(true);
            Ok(HttpResponse::json(200, &page))
        }));
        let content = client(&transport, signed_in());

        let listing = content.list_children("-my-").await.unwrap();
        assert_eq!(listing.parent_id, "-my-");
        let kinds: Vec<_> = listing.nodes.iter().map(Node::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Folder, NodeKind::File, NodeKind::Other]);
        assert!(listing.pagination.is_truncated());

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::Get);
        assert!(req.path().ends_with("/alfresco/versions/1/nodes/-my-/children"));
        assert_eq!(req.query_param("alf_ticket"), Some("TICKET_1"));
    }

    #[tokio::test]
    async fn test_auth_failures_are_classified() {
        for status in [401, 403] {
            let transport =
                Rc::new(MockTransport::new(move |_| Ok(HttpResponse::new(status, ""))));
            let content = client(&transport, signed_in());
            assert_eq!(
                content.list_children("-my-").await,
                Err(ClientError::AuthExpired(status))
            );
        }

        let transport = Rc::new(MockTransport::new(|_| Ok(HttpResponse::new(500, "boom"))));
        let content = client(&transport, signed_in());
        assert_eq!(content.get_node("n1").await, Err(ClientError::Operation(500)));
    }

    #[tokio::test]
    async fn test_network_and_decode_failures() {
        let transport = Rc::new(MockTransport::new(|_| Err(TransportError::new("CORS"))));
        let content = client(&transport, signed_in());
        assert_eq!(
            content.get_node("n1").await,
            Err(ClientError::Network("CORS".to_string()))
        );

        let transport = Rc::new(MockTransport::new(|_| Ok(HttpResponse::new(200, "<html>"))));
        let content = client(&transport, signed_in());
        assert!(matches!(content.get_node("n1").await, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_create_and_rename_bodies() {
        let transport = Rc::new(MockTransport::new(|req| {
            let name = match &req.body {
                Some(Body::Json(body)) => body["name"].as_str().unwrap_or_default().to_string(),
                _ => String::new(),
            };
            let node = fixtures::node("n9", &name, "cm:folder");
            Ok(HttpResponse::json(201, &fixtures::entry(node)))
        }));
        let content = client(&transport, signed_in());

        let folder = content.create_folder("p1", "Projects").await.unwrap();
        assert_eq!(folder.name(), "Projects");
        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::Post);
        assert!(req.path().ends_with("/nodes/p1/children"));
        assert_eq!(
            req.body,
            Some(Body::Json(json!({"name": "Projects", "nodeType": "cm:folder"})))
        );

        content.create_text_document("p1", "notes").await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().body,
            Some(Body::Json(json!({"name": "notes", "nodeType": "cm:content"})))
        );

        content.rename("n9", "Archive").await.unwrap();
        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::Put);
        assert!(req.path().ends_with("/nodes/n9"));
        assert_eq!(req.body, Some(Body::Json(json!({"name": "Archive"}))));
    }

    #[tokio::test]
    async fn test_text_content() {
        let transport = Rc::new(MockTransport::new(|req| match req.method {
            Method::Get => Ok(HttpResponse::new(200, "hello\nworld")),
            _ => Ok(HttpResponse::json(
                200,
                &fixtures::entry(fixtures::node("d1", "notes.txt", "cm:content")),
            )),
        }));
        let content = client(&transport, signed_in());

        assert_eq!(content.get_text_content("d1").await.unwrap(), "hello\nworld");
        assert!(transport.last_request().unwrap().path().ends_with("/nodes/d1/content"));

        let node = content.set_text_content("d1", "new text").await.unwrap();
        assert!(node.is_file());
        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::Put);
        assert!(req.path().ends_with("/nodes/d1/content"));
        assert_eq!(req.body, Some(Body::Text("new text".to_string())));
    }

    #[tokio::test]
    async fn test_empty_content_is_empty_string() {
        let transport = Rc::new(MockTransport::new(|_| Ok(HttpResponse::new(200, ""))));
        let content = client(&transport, signed_in());
        assert_eq!(content.get_text_content("d1").await.unwrap(), "");
    }
}
