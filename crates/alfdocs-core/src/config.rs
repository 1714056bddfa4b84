//! Backend and browsing configuration.

use serde::Deserialize;

use crate::models::Crumb;

/// Default public REST root of a local repository.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/alfresco/api/-default-/public";

/// Alias of the signed-in user's home folder.
pub const DEFAULT_ROOT_ID: &str = "-my-";

/// Label of the root breadcrumb.
pub const DEFAULT_ROOT_LABEL: &str = "Mis documentos";

/// Extension appended to new text documents.
pub const DEFAULT_TEXT_EXTENSION: &str = ".txt";

/// Settings shared by the clients and the navigator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Public REST root, without a trailing slash.
    pub api_base: String,
    pub root_id: String,
    pub root_label: String,
    pub text_extension: String,
}

impl ClientConfig {
    pub fn root_crumb(&self) -> Crumb {
        Crumb::new(&self.root_id, &self.root_label)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            root_id: DEFAULT_ROOT_ID.to_string(),
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            text_extension: DEFAULT_TEXT_EXTENSION.to_string(),
        }
    }
}
