//! Catalog document record.
//!
//! Provides the [`Document`] struct consumed read-only by the tree builder,
//! plus [`slug_from_relative_path`] for collaborators that derive slugs
//! from relative storage paths.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Title used when a document's source carries none.
pub const UNTITLED: &str = "Untitled";

/// An already-parsed catalog entry.
///
/// Produced by a file-enumeration collaborator (front-matter extraction and
/// markdown parsing happen there, not here). The `slug` is the sole
/// identifier used for lookup and active-route matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// `/`-joined sequence of non-empty path segments, unique per catalog.
    pub slug: String,
    /// Display title. Defaults to `"Untitled"` when absent from the source.
    #[serde(default = "default_title")]
    pub title: String,
    /// Relative-order hint among sibling documents. Absent means 0.
    #[serde(default)]
    pub index: i64,
}

impl Document {
    /// Create a document with an explicit ordering index.
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>, index: i64) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            index,
        }
    }
}

fn default_title() -> String {
    UNTITLED.to_owned()
}

/// Derive a slug from a relative storage path.
///
/// The extension is stripped and OS path separators are normalized to `/`.
///
/// Examples:
/// - `"intro.md"` -> `"intro"`
/// - `"guide/setup.md"` -> `"guide/setup"`
/// - `"guide\\setup.md"` (Windows) -> `"guide/setup"`
#[must_use]
pub fn slug_from_relative_path(path: &Path) -> String {
    let without_ext = path.with_extension("");
    let segments: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    segments.join("/")
}
