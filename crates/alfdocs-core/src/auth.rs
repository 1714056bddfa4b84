//! Ticket-based authentication.

use std::rc::Rc;

use crate::config::ClientConfig;
use crate::endpoints::Endpoints;
use crate::error::ClientError;
use crate::models::Session;
use crate::session::{SessionReader, SessionStore};
use crate::transport::{Body, HttpRequest, Method, Transport};
use crate::wire::{Credentials, Entry, Ticket};

/// How a user-initiated logout ended. Local state is cleared in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOut {
    /// The backend invalidated the ticket.
    Confirmed,
    /// The backend call failed; only the local session was cleared.
    LocalOnly(ClientError),
    /// There was no ticket to invalidate.
    NoTicket,
}

/// Exchanges credentials for tickets; sole writer of the session store.
pub struct AuthClient<T, S> {
    transport: Rc<T>,
    store: Rc<S>,
    endpoints: Endpoints,
}

impl<T: Transport, S: SessionStore> AuthClient<T, S> {
    pub fn new(transport: Rc<T>, store: Rc<S>, config: &ClientConfig) -> Self {
        Self {
            transport,
            store,
            endpoints: Endpoints::new(&config.api_base),
        }
    }

    /// Read-only handle for the other components.
    pub fn reader(&self) -> SessionReader<S> {
        SessionReader::new(Rc::clone(&self.store))
    }

    pub fn session(&self) -> Session {
        self.store.get()
    }

    /// Log in and persist the resulting ticket.
    ///
    /// Every refusal is reported as [`ClientError::AuthRejected`]; callers
    /// do not distinguish bad passwords from unknown users.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Session, ClientError> {
        let body = serde_json::to_value(Credentials {
            user_id: username,
            password,
        })
        .map_err(|e| ClientError::Decode(e.to_string()))?;
        let request =
            HttpRequest::new(Method::Post, self.endpoints.tickets()).with_body(Body::Json(body));

        log::debug!("POST ticket for {username}");
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!("login for {username} refused with HTTP {}", response.status);
            return Err(ClientError::AuthRejected);
        }

        let ticket: Entry<Ticket> =
            serde_json::from_str(&response.body).map_err(|_| ClientError::AuthRejected)?;
        self.store.set(&ticket.entry.id, username)?;
        log::info!("signed in as {username}");
        Ok(self.store.get())
    }

    /// Invalidate `ticket` on the backend. Does not touch local state.
    pub async fn logout(&self, ticket: &str) -> Result<(), ClientError> {
        let request = HttpRequest::new(Method::Delete, self.endpoints.current_ticket(ticket));
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ClientError::from_status(response.status))
        }
    }

    /// User-initiated logout: best-effort remote invalidation, then an
    /// unconditional local clear.
    pub async fn sign_out(&self) -> SignOut {
        let Some(ticket) = self.store.get().ticket().map(str::to_string) else {
            self.store.clear();
            return SignOut::NoTicket;
        };

        let outcome = match self.logout(&ticket).await {
            Ok(()) => SignOut::Confirmed,
            Err(err) => {
                log::warn!("ticket invalidation failed: {err}");
                SignOut::LocalOnly(err)
            }
        };
        self.store.clear();
        log::info!("signed out");
        outcome
    }

    /// Forget the local session without calling the backend.
    pub fn discard(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::session::MemoryStore;
    use crate::transport::{HttpResponse, MockTransport, fixtures};

    type Fixture = (
        AuthClient<MockTransport, MemoryStore>,
        Rc<MockTransport>,
        Rc<MemoryStore>,
    );

    fn client(transport: MockTransport, store: MemoryStore) -> Fixture {
        let transport = Rc::new(transport);
        let store = Rc::new(store);
        let auth = AuthClient::new(
            Rc::clone(&transport),
            Rc::clone(&store),
            &ClientConfig::default(),
        );
        (auth, transport, store)
    }

    #[tokio::test]
    async fn test_authenticate_stores_ticket() {
        let (auth, transport, store) = client(
            MockTransport::new(|_| Ok(HttpResponse::json(201, &fixtures::ticket("TICKET_abc")))),
            MemoryStore::new(),
        );

        let session = auth.authenticate("admin", "admin").await.unwrap();
        assert_eq!(session, Session::new("TICKET_abc", "admin"));
        assert_eq!(store.get(), session);

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::Post);
        assert!(req.url.ends_with("/authentication/versions/1/tickets"));
        assert_eq!(
            req.body,
            Some(Body::Json(serde_json::json!({"userId": "admin", "password": "admin"})))
        );
    }

    #[tokio::test]
    async fn test_authenticate_rejected() {
        let (auth, _, store) = client(
            MockTransport::new(|_| Ok(HttpResponse::new(403, "{}"))),
            MemoryStore::new(),
        );
        assert_eq!(
            auth.authenticate("admin", "nope").await,
            Err(ClientError::AuthRejected)
        );
        assert!(!store.get().is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_confirmed() {
        let (auth, transport, store) = client(
            MockTransport::new(|_| Ok(HttpResponse::new(204, ""))),
            MemoryStore::with_session(Session::new("TICKET_abc", "admin")),
        );

        assert_eq!(auth.sign_out().await, SignOut::Confirmed);
        assert_eq!(store.get(), Session::default());

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::Delete);
        assert!(req.path().ends_with("/tickets/-me-"));
        assert_eq!(req.query_param("alf_ticket"), Some("TICKET_abc"));
    }

    #[tokio::test]
    async fn test_sign_out_clears_locally_when_backend_fails() {
        let (auth, _, store) = client(
            MockTransport::new(|_| Err(TransportError::new("offline"))),
            MemoryStore::with_session(Session::new("TICKET_abc", "admin")),
        );

        assert_eq!(
            auth.sign_out().await,
            SignOut::LocalOnly(ClientError::Network("offline".to_string()))
        );
        assert_eq!(store.get(), Session::default());
    }

    #[tokio::test]
    async fn test_sign_out_without_ticket() {
        let (auth, transport, store) = client(
            MockTransport::unreachable(),
            MemoryStore::with_session(Session {
                ticket: None,
                username: Some("admin".to_string()),
            }),
        );

        assert_eq!(auth.sign_out().await, SignOut::NoTicket);
        assert_eq!(transport.request_count(), 0);
        assert_eq!(store.get(), Session::default());
    }
}
