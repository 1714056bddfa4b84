//! Data models for the repository client.
//!
//! - [`Node`], [`NodeKind`], [`NodeListing`], [`Pagination`] - content tree
//! - [`Crumb`], [`BreadcrumbTrail`] - navigation path
//! - [`Session`], [`Identity`] - credentials and who is signed in
//! - [`Notice`] - user-facing outcome messages

mod node;
mod notice;
mod session;
mod trail;

pub use node::{
    CONTENT_NODE_TYPE, FOLDER_NODE_TYPE, Node, NodeKind, NodeListing, Pagination,
    normalize_name, with_text_extension,
};
pub use notice::{Notice, NoticeLevel};
pub use session::{Identity, Session, USER_ROLE_LABEL};
pub use trail::{BreadcrumbTrail, Crumb};
