//! Modal dialogs of the documents screen.

use alfdocs_core::models::Node;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    CreateFolder,
    CreateDocument,
    Rename(Node),
    /// Text editor for a document. `loading` is set until the current
    /// content has arrived.
    EditContent { node: Node, loading: bool },
}

impl Dialog {
    pub fn title(&self) -> String {
        match self {
            Self::CreateFolder => "New folder".to_string(),
            Self::CreateDocument => "New document".to_string(),
            Self::Rename(node) => format!("Rename \"{}\"", node.name()),
            Self::EditContent { node, .. } => format!("Edit {}", node.name()),
        }
    }

    /// Initial value of the dialog's text field.
    pub fn initial_text(&self) -> String {
        match self {
            Self::Rename(node) => node.name().to_string(),
            _ => String::new(),
        }
    }
}
