//! Tree construction from a flat catalog.
//!
//! [`build_tree`] folds an ordered document snapshot into a nested
//! [`Folder`] hierarchy keyed by slug segments. The fold is pure and total:
//! malformed entries and leaf/folder collisions never abort the build, they
//! are excluded and come back as a side list of [`BuildIssue`]s so one bad
//! document cannot break navigation for the rest.
//!
//! Two permutations of the same catalog yield isomorphic trees; only the
//! insertion order of folder children varies, and that order is never used
//! for display (see [`ordered_entries`](crate::ordered_entries)).

use nav_catalog::{CatalogError, CatalogSource, Document};

use crate::node::{Folder, TreeNode};

/// Problem found while folding a catalog entry into the tree.
///
/// Issues are reported alongside the built tree (partial-success model),
/// never raised as hard errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildIssue {
    /// Slug was empty or contained an empty segment; entry excluded.
    #[error("malformed slug {slug:?}: empty or has empty segment")]
    MalformedSlug {
        /// The rejected slug, verbatim.
        slug: String,
    },
    /// A segment had to be both a leaf and a folder. The folder wins and
    /// the leaf document at `path` is dropped, keeping deeper navigation
    /// reachable.
    #[error("document at {path:?} conflicts with a folder of the same name; folder kept")]
    NodeKindConflict {
        /// Folder path whose leaf document was dropped.
        path: String,
    },
}

/// Result of folding a catalog into a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeBuild {
    /// Root folder of the hierarchy.
    pub root: Folder,
    /// Entries that could not be placed, in catalog order.
    pub issues: Vec<BuildIssue>,
}

/// Fold an ordered catalog snapshot into a folder hierarchy.
///
/// For each document the slug is split on `/`; folders are walked or created
/// for every segment but the last, and a leaf is inserted at the last. A
/// later document with the same slug replaces the earlier one.
#[must_use]
pub fn build_tree(catalog: &[Document]) -> TreeBuild {
    let mut build = TreeBuild::default();

    for doc in catalog {
        let segments: Vec<&str> = doc.slug.split('/').collect();
        if doc.slug.is_empty() || segments.iter().any(|s| s.is_empty()) {
            tracing::warn!(slug = %doc.slug, "rejecting catalog entry with malformed slug");
            build.issues.push(BuildIssue::MalformedSlug {
                slug: doc.slug.clone(),
            });
            continue;
        }

        insert_document(&mut build.root, "", &segments, doc, &mut build.issues);
    }

    tracing::debug!(
        documents = catalog.len(),
        issues = build.issues.len(),
        "catalog folded into tree"
    );

    build
}

/// Scan a catalog source and fold the snapshot into a tree.
///
/// # Errors
///
/// Returns [`CatalogError`] if the scan itself fails. Per-entry problems are
/// reported in [`TreeBuild::issues`], not as errors.
pub fn scan_and_build(source: &dyn CatalogSource) -> Result<TreeBuild, CatalogError> {
    Ok(build_tree(&source.scan()?))
}

/// Place one document at `segments` below `folder`.
///
/// `prefix` is the `/`-joined path of `folder` ("" at the root); it only
/// feeds conflict reports.
fn insert_document(
    folder: &mut Folder,
    prefix: &str,
    segments: &[&str],
    doc: &Document,
    issues: &mut Vec<BuildIssue>,
) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    let path = if prefix.is_empty() {
        (*head).to_owned()
    } else {
        format!("{prefix}/{head}")
    };

    if rest.is_empty() {
        match folder.get_mut(head) {
            Some(TreeNode::Folder(_)) => {
                // Folder wins: the document is dropped, deeper slugs stay reachable.
                tracing::warn!(path = %path, "dropping document shadowed by folder");
                issues.push(BuildIssue::NodeKindConflict { path });
            }
            Some(existing @ TreeNode::Leaf(_)) => {
                tracing::warn!(slug = %doc.slug, "duplicate slug, later entry replaces earlier");
                *existing = TreeNode::Leaf(doc.clone());
            }
            None => folder.insert(head, TreeNode::Leaf(doc.clone())),
        }
    } else {
        let (child, dropped_leaf) = folder.child_folder_mut(head);
        if dropped_leaf {
            tracing::warn!(path = %path, "dropping document shadowed by folder");
            issues.push(BuildIssue::NodeKindConflict { path: path.clone() });
        }
        insert_document(child, &path, rest, doc, issues);
    }
}
