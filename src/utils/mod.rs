//! Browser plumbing.
//!
//! - [`FetchTransport`] - HTTP over the Fetch API
//! - [`LocalStorageStore`] - session persistence
//! - [`logger`] - console backend for `log`
//! - [`format`] - display formatting

pub mod dom;
mod fetch;
pub mod format;
pub mod logger;
mod storage;

pub use fetch::FetchTransport;
pub use storage::LocalStorageStore;
