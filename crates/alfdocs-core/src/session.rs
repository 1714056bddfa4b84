//! Session persistence.
//!
//! The session (ticket + username) is process-wide state with a single
//! writer: only [`AuthClient`](crate::auth::AuthClient) holds the store
//! itself. Everything else gets a [`SessionReader`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageError;
use crate::models::Session;

/// Durable key-value storage for the session.
pub trait SessionStore {
    fn get(&self) -> Session;
    fn set(&self, ticket: &str, username: &str) -> Result<(), StorageError>;
    fn clear(&self);
}

/// Read-only view of a session store.
pub struct SessionReader<S> {
    store: Rc<S>,
}

impl<S: SessionStore> SessionReader<S> {
    pub fn new(store: Rc<S>) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Session {
        self.store.get()
    }

    /// Current ticket, if present and non-empty.
    pub fn ticket(&self) -> Option<String> {
        self.store.get().ticket().map(str::to_string)
    }
}

impl<S> Clone for SessionReader<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
        }
    }
}

/// Session store kept in memory; lost on reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: RefCell<Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RefCell::new(session),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Session {
        self.session.borrow().clone()
    }

    fn set(&self, ticket: &str, username: &str) -> Result<(), StorageError> {
        *self.session.borrow_mut() = Session::new(ticket, username);
        Ok(())
    }

    fn clear(&self) {
        *self.session.borrow_mut() = Session::default();
    }
}
