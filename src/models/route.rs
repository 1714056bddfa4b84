//! Hash-based routing.

use crate::utils::dom;

/// Application screens. URL format: `#/login`, `#/documents`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    /// `#/login`; also any empty or unknown hash.
    #[default]
    Login,
    /// `#/documents`; needs a signed-in session.
    Documents,
}

impl AppRoute {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        match path {
            "documents" => Self::Documents,
            _ => Self::Login,
        }
    }

    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Login => "#/login",
            Self::Documents => "#/documents",
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Self::Documents)
    }

    /// Route of the current browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route, adding a history entry.
    pub fn push(self) {
        dom::set_hash(self.to_hash());
    }

    /// Navigate to this route in place of the current history entry.
    ///
    /// Does not fire `hashchange`; the caller updates the route signal.
    pub fn replace(self) {
        dom::replace_hash(self.to_hash());
    }
}
