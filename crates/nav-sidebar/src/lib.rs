//! Expansion state machine and sidebar rendering for the navtree engine.
//!
//! This crate provides:
//! - [`ExpansionState`]: which folder paths are expanded, with the
//!   sibling-exclusivity toggle rule and route-change initialization
//! - [`render`] / [`SidebarNode`]: the renderable row structure for the
//!   presentation layer
//! - [`Sidebar`]: an owning controller consuming [`SidebarEvent`]s
//!
//! # Quick Start
//!
//! ```
//! use nav_catalog::Document;
//! use nav_config::FolderTable;
//! use nav_sidebar::{Sidebar, SidebarEvent};
//!
//! let catalog = vec![
//!     Document::new("intro", "Intro", 0),
//!     Document::new("guide/setup", "Setup", 0),
//! ];
//! let (mut sidebar, issues) =
//!     Sidebar::from_catalog(&catalog, FolderTable::new(), Some("guide/setup"));
//! assert!(issues.is_empty());
//!
//! // "guide" was expanded from the active route; close it.
//! sidebar.handle(SidebarEvent::Toggle("guide".to_owned()));
//! let rows = sidebar.items();
//! assert_eq!(rows.len(), 2);
//! ```

mod render;
mod sidebar;
mod state;

pub use render::{SidebarNode, render};
pub use sidebar::{Sidebar, SidebarEvent};
pub use state::{ExpansionState, ancestor_paths};
