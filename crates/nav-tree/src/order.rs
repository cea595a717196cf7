//! Display ordering for one folder level.
//!
//! [`ordered_entries`] is the only place rendering order comes from; the
//! tree's structural insertion order never leaks into the sidebar. The rules:
//!
//! - Leaves render before folders (documents are the content of a section,
//!   folders are its sub-navigation).
//! - Leaves sort ascending by authored `index`; the sort is stable, so ties
//!   keep catalog order rather than falling back to title text.
//! - Folders sort ascending by configured order, ties broken by name.

use nav_config::FolderTable;

use crate::node::{Folder, TreeNode};

/// Compute the rendering order of one folder's children.
///
/// Pure: partitions entries into leaves and sub-folders and sorts each
/// partition; the tree itself is never mutated.
#[must_use]
pub fn ordered_entries<'a>(
    folder: &'a Folder,
    table: &FolderTable,
) -> Vec<(&'a str, &'a TreeNode)> {
    let mut leaves = Vec::new();
    let mut folders = Vec::new();

    for (name, node) in folder.entries() {
        match node {
            TreeNode::Leaf(doc) => leaves.push((doc.index, name, node)),
            TreeNode::Folder(_) => folders.push((table.meta_for(name).order, name, node)),
        }
    }

    // Stable on index: insertion order is catalog order, so ties stay in
    // authored order.
    leaves.sort_by_key(|&(index, _, _)| index);
    folders.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    let mut entries: Vec<(&str, &TreeNode)> = leaves
        .into_iter()
        .map(|(_, name, node)| (name, node))
        .collect();
    entries.extend(folders.into_iter().map(|(_, name, node)| (name, node)));
    entries
}

#[cfg(test)]
mod tests {
    use nav_catalog::Document;
    use pretty_assertions::assert_eq;

    use super::*;

    fn folder_with(entries: &[(&str, TreeNode)]) -> Folder {
        let mut folder = Folder::new();
        for (name, node) in entries {
            folder.insert(name, node.clone());
        }
        folder
    }

    fn leaf(slug: &str, index: i64) -> TreeNode {
        TreeNode::Leaf(Document::new(slug, slug, index))
    }

    fn subfolder() -> TreeNode {
        TreeNode::Folder(Folder::new())
    }

    #[test]
    fn test_leaves_render_before_folders() {
        let folder = folder_with(&[
            ("zeta", subfolder()),
            ("intro", leaf("intro", 5)),
            ("alpha", subfolder()),
        ]);

        let names: Vec<_> = ordered_entries(&folder, &FolderTable::new())
            .into_iter()
            .map(|(n, _)| n)
            .collect();

        assert_eq!(names, vec!["intro", "alpha", "zeta"]);
    }

    #[test]
    fn test_leaves_sorted_by_index() {
        let folder = folder_with(&[
            ("c", leaf("c", 2)),
            ("a", leaf("a", 0)),
            ("b", leaf("b", 1)),
        ]);

        let names: Vec<_> = ordered_entries(&folder, &FolderTable::new())
            .into_iter()
            .map(|(n, _)| n)
            .collect();

        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_leaf_index_ties_keep_catalog_order_not_title() {
        // "zebra" was inserted (authored) before "apple"; equal indices must
        // not reorder them alphabetically.
        let folder = folder_with(&[("zebra", leaf("zebra", 1)), ("apple", leaf("apple", 1))]);

        let names: Vec<_> = ordered_entries(&folder, &FolderTable::new())
            .into_iter()
            .map(|(n, _)| n)
            .collect();

        assert_eq!(names, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_folders_sorted_by_configured_order() {
        let table = FolderTable::new()
            .with_folder("reference", "Reference", 2)
            .with_folder("guide", "Guide", 1);
        let folder = folder_with(&[("reference", subfolder()), ("guide", subfolder())]);

        let names: Vec<_> = ordered_entries(&folder, &table)
            .into_iter()
            .map(|(n, _)| n)
            .collect();

        assert_eq!(names, vec!["guide", "reference"]);
    }

    #[test]
    fn test_folder_order_ties_break_by_name() {
        let table = FolderTable::new()
            .with_folder("beta", "Beta", 7)
            .with_folder("alpha", "Alpha", 7);
        let folder = folder_with(&[("beta", subfolder()), ("alpha", subfolder())]);

        let names: Vec<_> = ordered_entries(&folder, &table)
            .into_iter()
            .map(|(n, _)| n)
            .collect();

        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_unconfigured_folders_rank_after_configured() {
        let table = FolderTable::new().with_folder("guide", "Guide", 1);
        let folder = folder_with(&[("appendix", subfolder()), ("guide", subfolder())]);

        let names: Vec<_> = ordered_entries(&folder, &table)
            .into_iter()
            .map(|(n, _)| n)
            .collect();

        assert_eq!(names, vec!["guide", "appendix"]);
    }

    #[test]
    fn test_mixed_level_sorts_both_partitions_then_concatenates() {
        let table = FolderTable::new()
            .with_folder("reference", "Reference", 2)
            .with_folder("guide", "Guide", 1);
        let folder = folder_with(&[
            ("reference", subfolder()),
            ("faq", leaf("faq", 1)),
            ("guide", subfolder()),
            ("intro", leaf("intro", 0)),
        ]);

        let names: Vec<_> = ordered_entries(&folder, &table)
            .into_iter()
            .map(|(n, _)| n)
            .collect();

        assert_eq!(names, vec!["intro", "faq", "guide", "reference"]);
    }

    #[test]
    fn test_ordering_does_not_mutate_folder() {
        let folder = folder_with(&[("b", leaf("b", 1)), ("a", leaf("a", 0))]);
        let before = folder.clone();

        let _ = ordered_entries(&folder, &FolderTable::new());

        assert_eq!(folder, before);
    }
}
