//! Tree node types.
//!
//! A built tree is a recursive [`TreeNode`] union: a [`Leaf`](TreeNode::Leaf)
//! wraps exactly one catalog document, a [`Folder`](TreeNode::Folder) groups
//! children under a shared path prefix. Each folder exclusively owns its
//! children; there are no shared references into the tree.
//!
//! Children are kept in insertion order, which after a build equals relative
//! catalog order. Display order is decided elsewhere (see
//! [`ordered_entries`](crate::ordered_entries)); nothing here sorts.

use nav_catalog::Document;

/// A node in the built navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    /// Wraps exactly one document.
    Leaf(Document),
    /// Groups child nodes under a shared path prefix.
    Folder(Folder),
}

impl TreeNode {
    /// True for leaf nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Document reference if this is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&Document> {
        match self {
            Self::Leaf(doc) => Some(doc),
            Self::Folder(_) => None,
        }
    }

    /// Folder reference if this is a folder.
    #[must_use]
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::Leaf(_) => None,
        }
    }
}

/// Insertion-ordered mapping from segment name to child node.
///
/// Invariant: a given name maps to exactly one child. The builder enforces
/// this; [`Folder::insert`] replaces any existing node under the same name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Folder {
    children: Vec<(String, TreeNode)>,
}

impl Folder {
    /// Create an empty folder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the folder has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up a direct child by segment name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Mutable lookup of a direct child by segment name.
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        self.children
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Insert a child, replacing any existing node under the same name.
    pub(crate) fn insert(&mut self, name: &str, node: TreeNode) {
        if let Some(existing) = self.get_mut(name) {
            *existing = node;
        } else {
            self.children.push((name.to_owned(), node));
        }
    }

    /// Get the child folder at `name`, creating it if absent.
    ///
    /// A leaf occupying the name is replaced (folder wins); the returned
    /// flag is true when that happened, so the builder can report the
    /// dropped document.
    pub(crate) fn child_folder_mut(&mut self, name: &str) -> (&mut Folder, bool) {
        let idx = match self.children.iter().position(|(n, _)| n == name) {
            Some(i) => i,
            None => {
                self.children
                    .push((name.to_owned(), TreeNode::Folder(Self::new())));
                self.children.len() - 1
            }
        };

        let slot = &mut self.children[idx].1;
        let dropped_leaf = slot.is_leaf();
        if dropped_leaf {
            *slot = TreeNode::Folder(Self::new());
        }
        match slot {
            TreeNode::Folder(folder) => (folder, dropped_leaf),
            TreeNode::Leaf(_) => unreachable!("slot was just converted to a folder"),
        }
    }

    /// Iterate over children in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(n, node)| (n.as_str(), node))
    }

    /// Collect the slugs of every leaf in this subtree, depth-first in
    /// insertion order.
    #[must_use]
    pub fn leaf_slugs(&self) -> Vec<&str> {
        let mut slugs = Vec::new();
        self.collect_leaf_slugs(&mut slugs);
        slugs
    }

    fn collect_leaf_slugs<'a>(&'a self, out: &mut Vec<&'a str>) {
        for (_, node) in &self.children {
            match node {
                TreeNode::Leaf(doc) => out.push(doc.slug.as_str()),
                TreeNode::Folder(folder) => folder.collect_leaf_slugs(out),
            }
        }
    }
}
