//! Expansion state machine.
//!
//! Tracks which folder paths are currently expanded in the sidebar. The
//! state is a plain set of path strings, exclusively owned by one sidebar
//! view for its lifetime; nothing is persisted across sessions.
//!
//! Two transitions exist:
//! - route change: the whole set is replaced by the ancestor chain of the
//!   new active document
//! - toggle: open/close one path under the sibling-exclusivity rule (at most
//!   one folder open per depth level)
//!
//! Toggling is a total function over path strings. Paths are display-state
//! keys, never validated against the tree, so an unknown path is a silent
//! no-op from the tree's point of view.

use std::collections::HashSet;

/// Every proper, non-empty prefix of the slug's segment chain, excluding the
/// final leaf segment, in root-first order.
///
/// `"a/b/c"` -> `["a", "a/b"]`; `"a"` and `""` -> `[]`.
///
/// Pure and framework-free: the route collaborator hands in a slug string,
/// nothing else.
#[must_use]
pub fn ancestor_paths(slug: &str) -> Vec<String> {
    let segments: Vec<&str> = slug.split('/').collect();
    (1..segments.len()).map(|i| segments[..i].join("/")).collect()
}

/// Depth of a folder path: number of `/` separators plus one.
fn depth(path: &str) -> usize {
    path.matches('/').count() + 1
}

/// Set of currently-expanded folder paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<String>,
}

impl ExpansionState {
    /// Create a state with nothing expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the initial state for an active route: every ancestor folder
    /// of the active document is expanded.
    #[must_use]
    pub fn for_route(active: Option<&str>) -> Self {
        let mut state = Self::new();
        state.set_active_route(active);
        state
    }

    /// React to a route change: replace the entire expansion set with the
    /// new route's ancestor chain. Prior toggles are discarded, never merged.
    pub fn set_active_route(&mut self, active: Option<&str>) {
        self.open = active
            .map(|slug| ancestor_paths(slug).into_iter().collect())
            .unwrap_or_default();
        tracing::debug!(open = self.open.len(), "expansion state reset from route");
    }

    /// Toggle a folder path.
    ///
    /// Closes every other open path at the same depth (sibling exclusivity),
    /// then opens `path` iff it was previously closed. Paths at other depths
    /// are untouched, so ancestors stay open and unrelated subtrees keep
    /// their expansion.
    pub fn toggle(&mut self, path: &str) {
        let level = depth(path);
        let was_open = self.open.remove(path);
        self.open.retain(|q| depth(q) != level);
        if !was_open {
            self.open.insert(path.to_owned());
        }
    }

    /// True if `path` is currently expanded.
    #[must_use]
    pub fn is_open(&self, path: &str) -> bool {
        self.open.contains(path)
    }

    /// Number of open paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// True when nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Iterate over the open paths (unordered).
    pub fn open_paths(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ancestor_paths_nested_slug() {
        assert_eq!(ancestor_paths("a/b/c"), vec!["a".to_owned(), "a/b".to_owned()]);
    }

    #[test]
    fn test_ancestor_paths_top_level_slug_has_none() {
        assert!(ancestor_paths("intro").is_empty());
    }

    #[test]
    fn test_ancestor_paths_empty_slug_has_none() {
        assert!(ancestor_paths("").is_empty());
    }

    #[test]
    fn test_for_route_expands_ancestor_chain() {
        let state = ExpansionState::for_route(Some("a/b/c"));

        let mut open: Vec<_> = state.open_paths().collect();
        open.sort_unstable();
        assert_eq!(open, vec!["a", "a/b"]);
    }

    #[test]
    fn test_for_route_none_expands_nothing() {
        assert!(ExpansionState::for_route(None).is_empty());
    }

    #[test]
    fn test_set_active_route_replaces_previous_set() {
        let mut state = ExpansionState::for_route(Some("a/b/c"));
        state.toggle("reference");

        state.set_active_route(Some("x/y"));

        let mut open: Vec<_> = state.open_paths().collect();
        open.sort_unstable();
        assert_eq!(open, vec!["x"]);
    }

    #[test]
    fn test_set_active_route_none_clears() {
        let mut state = ExpansionState::for_route(Some("a/b/c"));

        state.set_active_route(None);

        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_opens_closed_path() {
        let mut state = ExpansionState::new();

        state.toggle("guide");

        assert!(state.is_open("guide"));
    }

    #[test]
    fn test_toggle_closes_open_path() {
        let mut state = ExpansionState::new();
        state.toggle("guide");

        state.toggle("guide");

        assert!(!state.is_open("guide"));
    }

    #[test]
    fn test_sibling_exclusivity_at_depth_one() {
        let mut state = ExpansionState::new();

        state.toggle("guide");
        state.toggle("reference");

        assert!(!state.is_open("guide"));
        assert!(state.is_open("reference"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_toggle_preserves_other_depths() {
        let mut state = ExpansionState::new();
        state.toggle("guide");
        state.toggle("guide/advanced");

        // Toggling at depth 1 must not disturb depth 2.
        state.toggle("reference");

        assert!(state.is_open("guide/advanced"));
        assert!(state.is_open("reference"));
        assert!(!state.is_open("guide"));
    }

    #[test]
    fn test_at_most_one_open_per_depth_for_any_sequence() {
        let mut state = ExpansionState::new();
        let toggles = [
            "a", "a/b", "c", "c/d", "a/b", "e", "e/f/g", "a/b/c", "e", "x/y",
        ];

        for path in toggles {
            state.toggle(path);

            let mut seen = HashSet::new();
            for open in state.open_paths() {
                assert!(
                    seen.insert(depth(open)),
                    "two open paths at depth {}",
                    depth(open)
                );
            }
        }
    }

    #[test]
    fn test_toggle_unknown_path_is_total() {
        let mut state = ExpansionState::new();

        // Not validated against any tree; plain state keys.
        state.toggle("no/such/folder");
        assert!(state.is_open("no/such/folder"));

        state.toggle("no/such/folder");
        assert!(!state.is_open("no/such/folder"));
    }

    #[test]
    fn test_depth_counts_separators() {
        assert_eq!(depth("a"), 1);
        assert_eq!(depth("a/b"), 2);
        assert_eq!(depth("a/b/c"), 3);
    }
}
