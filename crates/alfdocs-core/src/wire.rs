//! JSON shapes of the repository REST API.

use serde::{Deserialize, Serialize};

use crate::models::Pagination;

/// `{ "entry": ... }` envelope used by every single-item response.
#[derive(Debug, Deserialize)]
pub(crate) struct Entry<T> {
    pub entry: T,
}

/// Node as sent by the backend, before classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub node_type: String,
    pub is_folder: Option<bool>,
    pub is_file: Option<bool>,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChildrenResponse {
    pub list: ChildrenList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChildrenList {
    pub entries: Vec<Entry<RawNode>>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Ticket {
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Credentials<'a> {
    pub user_id: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NameUpdate<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewNode<'a> {
    pub name: &'a str,
    pub node_type: &'a str,
}
