//! Error types for the repository client.
//!
//! - [`ClientError`] - every failure a client or the navigator can report
//! - [`StorageError`] - session persistence failures
//! - [`TransportError`] - the HTTP exchange itself failed (no status)

use thiserror::Error;

/// Failure of a single backend operation.
///
/// The variants follow how the UI reacts to them: session failures force a
/// new login, everything else becomes a transient notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No ticket in the session store; nothing was sent.
    #[error("no active session")]
    NoSession,
    /// The backend rejected the ticket (401/403).
    #[error("session expired (HTTP {0})")]
    AuthExpired(u16),
    /// Login was refused.
    #[error("invalid credentials")]
    AuthRejected,
    /// Any other non-2xx response.
    #[error("request failed with HTTP {0}")]
    Operation(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Document content could not be read; editing may continue from scratch.
    #[error("content unavailable: {0}")]
    ContentUnavailable(Box<ClientError>),
    /// The session could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Whether this failure means the user must sign in again.
    pub fn is_session_failure(&self) -> bool {
        matches!(self, Self::NoSession | Self::AuthExpired(_))
    }

    /// Classify a non-2xx status from an authenticated call.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::AuthExpired(status),
            _ => Self::Operation(status),
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.0)
    }
}

/// Session persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Persistent storage is not available (private mode, no window).
    #[error("session storage not available")]
    Unavailable,
    /// Writing a value failed (quota, permissions).
    #[error("failed to write session storage")]
    WriteFailed,
}

/// The HTTP exchange failed before a status was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
