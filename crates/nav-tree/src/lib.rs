//! Catalog-to-tree construction and display ordering for the navtree engine.
//!
//! This crate provides:
//! - [`build_tree`]: pure fold from a flat document catalog into a nested
//!   [`Folder`] hierarchy, with partial-success issue reporting
//! - [`ordered_entries`]: the display order of one folder level (leaves
//!   first by authored index, then folders by configured rank)
//!
//! # Quick Start
//!
//! ```
//! use nav_catalog::Document;
//! use nav_config::FolderTable;
//! use nav_tree::{build_tree, ordered_entries};
//!
//! let catalog = vec![
//!     Document::new("intro", "Intro", 0),
//!     Document::new("guide/setup", "Setup", 0),
//! ];
//! let build = build_tree(&catalog);
//! assert!(build.issues.is_empty());
//!
//! let table = FolderTable::new().with_folder("guide", "User Guide", 1);
//! for (name, _node) in ordered_entries(&build.root, &table) {
//!     // "intro" (leaf) first, then "guide" (folder)
//!     let _ = name;
//! }
//! ```

mod builder;
mod node;
mod order;

pub use builder::{BuildIssue, TreeBuild, build_tree, scan_and_build};
pub use node::{Folder, TreeNode};
pub use order::ordered_entries;
