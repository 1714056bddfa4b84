//! Folder navigation and in-place listing updates.
//!
//! The [`Navigator`] keeps the current folder, its listing and the
//! breadcrumb trail, and drives the [`ContentClient`] when the user moves
//! around or edits nodes.
//!
//! Requests are not serialised: a load applies its result whenever its
//! response arrives, so of two overlapping navigations the last response
//! wins. State is never borrowed across an `.await`.

use std::cell::RefCell;

use crate::config::ClientConfig;
use crate::content::ContentClient;
use crate::error::ClientError;
use crate::models::{BreadcrumbTrail, Crumb, Node, NodeListing, Pagination};
use crate::models::{normalize_name, with_text_extension};
use crate::session::SessionStore;
use crate::transport::Transport;

/// Snapshot of what the documents screen shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserView {
    pub folder_id: String,
    pub listing: Vec<Node>,
    /// Paging info of the last successful load.
    pub pagination: Option<Pagination>,
    pub trail: BreadcrumbTrail,
}

impl BrowserView {
    /// Root folder, nothing loaded yet.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            folder_id: config.root_id.clone(),
            listing: Vec::new(),
            pagination: None,
            trail: BreadcrumbTrail::new(config.root_crumb()),
        }
    }

    fn apply(&mut self, listing: NodeListing) {
        self.folder_id = listing.parent_id;
        self.listing = listing.nodes;
        self.pagination = Some(listing.pagination);
    }
}

pub struct Navigator<T, S> {
    content: ContentClient<T, S>,
    config: ClientConfig,
    state: RefCell<BrowserView>,
}

impl<T: Transport, S: SessionStore> Navigator<T, S> {
    pub fn new(content: ContentClient<T, S>, config: ClientConfig) -> Self {
        let state = RefCell::new(BrowserView::new(&config));
        Self {
            content,
            config,
            state,
        }
    }

    pub fn view(&self) -> BrowserView {
        self.state.borrow().clone()
    }

    /// Back to the root folder with an empty listing.
    pub fn reset(&self) {
        *self.state.borrow_mut() = BrowserView::new(&self.config);
    }

    pub fn can_open(&self, node: &Node) -> bool {
        node.is_folder()
    }

    pub fn can_go_up(&self) -> bool {
        !self.state.borrow().trail.is_at_root()
    }

    pub fn can_go_to(&self, index: usize) -> bool {
        index < self.state.borrow().trail.len()
    }

    /// Reload the current folder.
    pub async fn load(&self) -> Result<(), ClientError> {
        let folder_id = self.state.borrow().folder_id.clone();
        self.load_folder(&folder_id, None).await
    }

    /// Enter a folder. Returns `false` without a request for non-folders.
    pub async fn open(&self, node: &Node) -> Result<bool, ClientError> {
        if !self.can_open(node) {
            return Ok(false);
        }
        self.load_folder(node.id(), Some(Crumb::from(node))).await?;
        Ok(true)
    }

    /// Jump to the ancestor at `index` of the trail.
    ///
    /// The trail is cut before the request is sent, so it stays cut if the
    /// load fails.
    pub async fn go_to_breadcrumb(&self, index: usize) -> Result<bool, ClientError> {
        let target = {
            let mut state = self.state.borrow_mut();
            match state.trail.truncate_to(index) {
                Some(crumb) => crumb.id.clone(),
                None => return Ok(false),
            }
        };
        self.load_folder(&target, None).await?;
        Ok(true)
    }

    /// Move to the parent folder. Returns `false` at the root.
    pub async fn go_up(&self) -> Result<bool, ClientError> {
        let target = {
            let mut state = self.state.borrow_mut();
            match state.trail.pop() {
                Some(crumb) => crumb.id.clone(),
                None => return Ok(false),
            }
        };
        self.load_folder(&target, None).await?;
        Ok(true)
    }

    /// Create a folder in the current folder and put it first in the listing.
    pub async fn create_folder(&self, name: &str) -> Result<Option<Node>, ClientError> {
        let Some(name) = normalize_name(name) else {
            return Ok(None);
        };
        let parent_id = self.state.borrow().folder_id.clone();
        let node = self.content.create_folder(&parent_id, name).await?;
        self.prepend(&node);
        Ok(Some(node))
    }

    /// Create an empty text document, adding the text extension if missing.
    pub async fn create_document(&self, name: &str) -> Result<Option<Node>, ClientError> {
        let Some(name) = normalize_name(name) else {
            return Ok(None);
        };
        let file_name = with_text_extension(name, &self.config.text_extension);
        let parent_id = self.state.borrow().folder_id.clone();
        let node = self
            .content
            .create_text_document(&parent_id, &file_name)
            .await?;
        self.prepend(&node);
        Ok(Some(node))
    }

    /// Rename a file or folder and update its listing entry in place.
    pub async fn rename(&self, node: &Node, new_name: &str) -> Result<Option<Node>, ClientError> {
        let Some(new_name) = normalize_name(new_name) else {
            return Ok(None);
        };
        if !node.is_renamable() {
            return Ok(None);
        }
        self.content.rename(node.id(), new_name).await?;

        let renamed = node.renamed(new_name);
        let mut state = self.state.borrow_mut();
        if let Some(slot) = state.listing.iter_mut().find(|n| n.id() == node.id()) {
            *slot = slot.renamed(new_name);
        }
        Ok(Some(renamed))
    }

    /// Current text of a document.
    ///
    /// Failures other than session failures come back as
    /// [`ClientError::ContentUnavailable`]: the caller may still let the
    /// user write new content.
    pub async fn load_document_content(&self, node: &Node) -> Result<Option<String>, ClientError> {
        if !node.is_file() {
            return Ok(None);
        }
        match self.content.get_text_content(node.id()).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.is_session_failure() => Err(err),
            Err(err) => Err(ClientError::ContentUnavailable(Box::new(err))),
        }
    }

    /// Overwrite a document's text. No version check: last writer wins.
    pub async fn save_document_content(
        &self,
        node: &Node,
        text: &str,
    ) -> Result<Option<Node>, ClientError> {
        if !node.is_file() {
            return Ok(None);
        }
        self.content.set_text_content(node.id(), text).await.map(Some)
    }

    async fn load_folder(&self, folder_id: &str, crumb: Option<Crumb>) -> Result<(), ClientError> {
        let listing = self.content.list_children(folder_id).await?;
        let mut state = self.state.borrow_mut();
        state.apply(listing);
        if let Some(crumb) = crumb {
            state.trail.push(crumb);
        }
        Ok(())
    }

    fn prepend(&self, node: &Node) {
        self.state.borrow_mut().listing.insert(0, node.clone());
    }
}
