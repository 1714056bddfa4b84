//! HTTP exchange abstraction.
//!
//! The clients build [`HttpRequest`]s and classify [`HttpResponse`]s; how
//! the bytes travel is up to the [`Transport`] implementation (browser
//! fetch in the web app, [`MockTransport`] in tests).

use std::future::Future;

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Request payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// Sent as `application/json`.
    Json(serde_json::Value),
    /// Sent as `text/plain`.
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// URL without the query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    /// Value of a query parameter, undecoded.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        let (_, query) = self.url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever status came back.
///
/// Implementations only fail for exchanges that produced no response.
/// Futures are not `Send`: everything runs on the browser's single thread.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::cell::RefCell;

    use super::{HttpRequest, HttpResponse, Transport};
    use crate::error::TransportError;

    type Handler = Box<dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError>>;

    /// Transport answering from a closure and recording every request.
    pub struct MockTransport {
        handler: Handler,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn new(
            handler: impl Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + 'static,
        ) -> Self {
            Self {
                handler: Box::new(handler),
                requests: RefCell::new(Vec::new()),
            }
        }

        /// Transport that fails the test if anything is sent.
        pub fn unreachable() -> Self {
            Self::new(|req| panic!("unexpected request: {} {}", req.method.as_str(), req.url))
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn last_request(&self) -> Option<HttpRequest> {
            self.requests.borrow().last().cloned()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let reply = (self.handler)(&request);
            self.requests.borrow_mut().push(request);
            reply
        }
    }
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

/// JSON builders for backend responses.
#[cfg(any(test, feature = "mock"))]
pub mod fixtures {
    use serde_json::{Value, json};

    pub fn node(id: &str, name: &str, node_type: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "nodeType": node_type,
            "isFolder": node_type == "cm:folder",
            "isFile": node_type == "cm:content",
            "createdAt": "2024-05-01T10:22:33.000+0000",
            "modifiedAt": "2024-05-02T08:00:00.000+0000",
        })
    }

    pub fn entry(node: Value) -> Value {
        json!({ "entry": node })
    }

    pub fn children(nodes: Vec<Value>) -> Value {
        let count = nodes.len();
        json!({
            "list": {
                "pagination": {
                    "count": count,
                    "hasMoreItems": false,
                    "totalItems": count,
                    "skipCount": 0,
                    "maxItems": 100,
                },
                "entries": nodes.into_iter().map(entry).collect::<Vec<_>>(),
            }
        })
    }

    pub fn ticket(id: &str) -> Value {
        json!({ "entry": { "id": id, "userId": "admin" } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_and_query() {
        let req = HttpRequest::new(
            Method::Get,
            "http://alf.test/nodes/-my-/children?alf_ticket=T1&skipCount=0",
        );
        assert_eq!(req.path(), "http://alf.test/nodes/-my-/children");
        assert_eq!(req.query_param("alf_ticket"), Some("T1"));
        assert_eq!(req.query_param("skipCount"), Some("0"));
        assert_eq!(req.query_param("maxItems"), None);

        let bare = HttpRequest::new(Method::Post, "http://alf.test/tickets");
        assert_eq!(bare.path(), "http://alf.test/tickets");
        assert_eq!(bare.query_param("alf_ticket"), None);
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(201, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(304, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
    }
}
