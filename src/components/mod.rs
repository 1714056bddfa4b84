//! UI components built with Leptos.
//!
//! - [`router`] - hash routing (main entry point)
//! - [`login`] - sign-in form
//! - [`navbar`] - session indicator and user menu
//! - [`documents`] - folder browser with its dialogs
//! - [`toasts`] - notices
//! - [`icons`] - icon definitions (change theme here)

pub mod documents;
pub mod icons;
pub mod login;
pub mod navbar;
pub mod router;
pub mod toasts;

pub use router::AppRouter;
