use super::Node;

/// One step of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub id: String,
    pub name: String,
}

impl Crumb {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&Node> for Crumb {
    fn from(node: &Node) -> Self {
        Self::new(node.id(), node.name())
    }
}

/// Path from the root folder to the current folder.
///
/// Never empty: the root crumb cannot be removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbTrail {
    crumbs: Vec<Crumb>,
}

impl BreadcrumbTrail {
    pub fn new(root: Crumb) -> Self {
        Self { crumbs: vec![root] }
    }

    pub fn root(&self) -> &Crumb {
        &self.crumbs[0]
    }

    /// Last crumb (the folder being shown).
    pub fn current(&self) -> &Crumb {
        // Non-empty by construction
        &self.crumbs[self.crumbs.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// The trail always holds the root, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn is_at_root(&self) -> bool {
        self.crumbs.len() == 1
    }

    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    pub fn push(&mut self, crumb: Crumb) {
        self.crumbs.push(crumb);
    }

    /// Keep crumbs `0..=index` and return the new current crumb.
    ///
    /// Returns `None` and leaves the trail alone when `index` is out of range.
    pub fn truncate_to(&mut self, index: usize) -> Option<&Crumb> {
        if index >= self.crumbs.len() {
            return None;
        }
        self.crumbs.truncate(index + 1);
        Some(self.current())
    }

    /// Drop the current crumb and return its parent.
    ///
    /// Returns `None` at the root.
    pub fn pop(&mut self) -> Option<&Crumb> {
        if self.is_at_root() {
            return None;
        }
        self.crumbs.pop();
        Some(self.current())
    }
}
