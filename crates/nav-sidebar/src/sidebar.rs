//! Owning sidebar controller.
//!
//! [`Sidebar`] ties the built tree, the folder table and the expansion state
//! together behind an explicit `(state, event) -> state` surface: the
//! presentation layer feeds [`SidebarEvent`]s in and reads the rendered rows
//! back out. All transitions are synchronous and the state is exclusively
//! owned by one sidebar view, so there is no locking anywhere.

use nav_catalog::Document;
use nav_config::FolderTable;
use nav_tree::{BuildIssue, Folder, build_tree};

use crate::render::{SidebarNode, render};
use crate::state::ExpansionState;

/// Events the presentation layer emits back to the sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarEvent {
    /// User clicked a folder header; payload is the folder path.
    Toggle(String),
    /// Client-side navigation changed the displayed document.
    RouteChanged(Option<String>),
}

/// Interactive sidebar for one view.
///
/// Lives for the lifetime of the sidebar view and is discarded with it;
/// expansion state is never persisted.
#[derive(Debug)]
pub struct Sidebar {
    root: Folder,
    table: FolderTable,
    state: ExpansionState,
    active: Option<String>,
}

impl Sidebar {
    /// Create a sidebar over a built tree.
    ///
    /// The expansion state is initialized from the active route's ancestor
    /// chain, so the active document is visible from the first render.
    #[must_use]
    pub fn new(root: Folder, table: FolderTable, active: Option<&str>) -> Self {
        Self {
            root,
            table,
            state: ExpansionState::for_route(active),
            active: active.map(ToOwned::to_owned),
        }
    }

    /// Build the tree from a catalog snapshot and wrap it in a sidebar.
    ///
    /// Build issues are handed back alongside so the caller can surface them;
    /// they never prevent the sidebar from working.
    #[must_use]
    pub fn from_catalog(
        catalog: &[Document],
        table: FolderTable,
        active: Option<&str>,
    ) -> (Self, Vec<BuildIssue>) {
        let build = build_tree(catalog);
        (Self::new(build.root, table, active), build.issues)
    }

    /// Apply one UI event.
    pub fn handle(&mut self, event: SidebarEvent) {
        match event {
            SidebarEvent::Toggle(path) => {
                tracing::debug!(path = %path, "sidebar toggle");
                self.state.toggle(&path);
            }
            SidebarEvent::RouteChanged(active) => {
                tracing::debug!(active = active.as_deref().unwrap_or(""), "route changed");
                self.state.set_active_route(active.as_deref());
                self.active = active;
            }
        }
    }

    /// Render the current sidebar rows.
    #[must_use]
    pub fn items(&self) -> Vec<SidebarNode> {
        render(&self.root, &self.table, &self.state, self.active.as_deref())
    }

    /// Current expansion state (read-only).
    #[must_use]
    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// Slug of the currently displayed document, if any.
    #[must_use]
    pub fn active_slug(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
