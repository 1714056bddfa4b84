//! UI-side models.
//!
//! - [`AppRoute`] - hash routes
//! - [`Dialog`] - which modal is open on the documents screen
//! - [`Toast`] - a notice on screen
//!
//! Domain types (nodes, sessions, notices) come from `alfdocs_core::models`.

mod dialog;
mod route;
mod toast;

pub use dialog::Dialog;
pub use route::AppRoute;
pub use toast::Toast;
