use serde::{Deserialize, Serialize};

use crate::wire::RawNode;

/// Backend node type of folders.
pub const FOLDER_NODE_TYPE: &str = "cm:folder";

/// Backend node type of content (file) nodes.
pub const CONTENT_NODE_TYPE: &str = "cm:content";

/// Type tag of a node, fixed when the node is ingested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Folder,
    File,
    #[default]
    Other,
}

impl NodeKind {
    /// Classify a node.
    ///
    /// Explicit flags sent by the backend win; otherwise the raw node type
    /// decides.
    pub fn classify(node_type: &str, is_folder: Option<bool>, is_file: Option<bool>) -> Self {
        let folder = is_folder.unwrap_or(node_type == FOLDER_NODE_TYPE);
        let file = is_file.unwrap_or(node_type == CONTENT_NODE_TYPE);
        match (folder, file) {
            (true, _) => Self::Folder,
            (false, true) => Self::File,
            (false, false) => Self::Other,
        }
    }
}

/// An entry of the remote content tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    id: String,
    name: String,
    node_type: String,
    kind: NodeKind,
    created_at: Option<String>,
    modified_at: Option<String>,
}

impl Node {
    /// A folder node with no timestamps.
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::bare(id.into(), name.into(), FOLDER_NODE_TYPE, NodeKind::Folder)
    }

    /// A content node with no timestamps.
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::bare(id.into(), name.into(), CONTENT_NODE_TYPE, NodeKind::File)
    }

    fn bare(id: String, name: String, node_type: &str, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            node_type: node_type.to_string(),
            kind,
            created_at: None,
            modified_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw backend type, e.g. `cm:folder`.
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Only files and folders can be renamed.
    pub fn is_renamable(&self) -> bool {
        matches!(self.kind, NodeKind::Folder | NodeKind::File)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    pub fn modified_at(&self) -> Option<&str> {
        self.modified_at.as_deref()
    }

    /// Copy of this node under a new name; id and type tag are kept.
    pub fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let kind = NodeKind::classify(&raw.node_type, raw.is_folder, raw.is_file);
        Self {
            id: raw.id,
            name: raw.name,
            node_type: raw.node_type,
            kind,
            created_at: raw.created_at,
            modified_at: raw.modified_at,
        }
    }
}

/// Paging information of a children listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub count: u64,
    pub has_more_items: bool,
    pub total_items: Option<u64>,
    pub skip_count: u64,
    pub max_items: u64,
}

impl Pagination {
    /// Whether the backend holds more children than the first page shows.
    pub fn is_truncated(&self) -> bool {
        self.has_more_items
    }
}

/// First page of children of a folder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeListing {
    pub parent_id: String,
    pub nodes: Vec<Node>,
    pub pagination: Pagination,
}

/// Trim a user-supplied name; `None` when nothing is left.
pub fn normalize_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Append `extension` unless `name` already ends with it (ignoring case).
pub fn with_text_extension(name: &str, extension: &str) -> String {
    let has_extension = name.len() >= extension.len()
        && name
            .get(name.len() - extension.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(extension));
    if has_extension {
        name.to_string()
    } else {
        format!("{name}{extension}")
    }
}
