//! Sidebar rendering.
//!
//! Walks the built tree in display order and produces a renderable
//! [`SidebarNode`] list for the presentation layer. Rendering is pure: the
//! tree, configuration and expansion state are read, never written. Closed
//! folders contribute their header row only; recursion stops there.

use nav_config::FolderTable;
use nav_tree::{Folder, TreeNode, ordered_entries};
use serde::Serialize;

use crate::state::ExpansionState;

/// One renderable sidebar row, nested for expanded folders.
///
/// Serializes to the shape the presentation layer consumes:
/// `{type: "leaf"|"folder", title|displayName, slug|path, isActive|isOpen, children}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarNode {
    /// A document row.
    Leaf {
        /// Document title.
        title: String,
        /// Document slug (link target).
        slug: String,
        /// True when this is the currently displayed document.
        #[serde(rename = "isActive")]
        is_active: bool,
    },
    /// A folder header row, with children when expanded.
    Folder {
        /// Configured or humanized display name.
        #[serde(rename = "displayName")]
        display_name: String,
        /// `/`-joined path from the root; the toggle-event payload.
        path: String,
        /// True when the folder is expanded.
        #[serde(rename = "isOpen")]
        is_open: bool,
        /// Rendered children; empty for closed folders.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<SidebarNode>,
    },
}

/// Render the sidebar for a built tree.
///
/// Each level is emitted in [`ordered_entries`] order. A folder's children
/// are only rendered when its path is expanded in `state`; `active` marks
/// the matching leaf (slug equality, same separator convention).
#[must_use]
pub fn render(
    root: &Folder,
    table: &FolderTable,
    state: &ExpansionState,
    active: Option<&str>,
) -> Vec<SidebarNode> {
    render_level(root, "", table, state, active)
}

fn render_level(
    folder: &Folder,
    prefix: &str,
    table: &FolderTable,
    state: &ExpansionState,
    active: Option<&str>,
) -> Vec<SidebarNode> {
    ordered_entries(folder, table)
        .into_iter()
        .map(|(name, node)| match node {
            TreeNode::Leaf(doc) => SidebarNode::Leaf {
                title: doc.title.clone(),
                slug: doc.slug.clone(),
                is_active: active == Some(doc.slug.as_str()),
            },
            TreeNode::Folder(sub) => {
                let path = if prefix.is_empty() {
                    name.to_owned()
                } else {
                    format!("{prefix}/{name}")
                };
                let is_open = state.is_open(&path);
                let children = if is_open {
                    render_level(sub, &path, table, state, active)
                } else {
                    Vec::new()
                };
                SidebarNode::Folder {
                    display_name: table.meta_for(name).display_name,
                    path,
                    is_open,
                    children,
                }
            }
        })
        .collect()
}
