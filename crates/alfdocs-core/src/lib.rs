//! Client library for an Alfresco content repository.
//!
//! Layers, bottom-up:
//! - [`transport`] - request/response values and the [`Transport`] seam
//! - [`session`] - ticket persistence behind [`SessionStore`]
//! - [`auth`], [`content`] - REST clients
//! - [`navigation`] - folder browsing state ([`Navigator`])
//! - [`desk`] - per-action policy, notices and UI events ([`Desk`])

pub mod auth;
pub mod config;
pub mod content;
pub mod desk;
mod endpoints;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;
pub mod transport;
mod wire;

pub use auth::{AuthClient, SignOut};
pub use config::ClientConfig;
pub use content::ContentClient;
pub use desk::{Desk, DeskEvent};
pub use error::{ClientError, StorageError, TransportError};
pub use navigation::{BrowserView, Navigator};
pub use session::{MemoryStore, SessionReader, SessionStore};
pub use transport::{Body, HttpRequest, HttpResponse, Method, Transport};
