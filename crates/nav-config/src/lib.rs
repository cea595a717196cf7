//! Folder display configuration for the navtree engine.
//!
//! Parses `nav.toml` configuration files with serde and resolves per-segment
//! folder metadata (display name and sort rank) with a defined fallback for
//! unmapped segments.
//!
//! ## File Format
//!
//! ```toml
//! [folders.guide]
//! display-name = "User Guide"
//! order = 1
//!
//! [folders.reference]
//! order = 2
//! ```
//!
//! Both keys are optional per entry. A segment absent from the table (or an
//! entry with missing keys) resolves to order 999 and a humanized display
//! name (separators replaced by spaces).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "nav.toml";

/// Sort rank applied to folders absent from the configuration table.
pub const DEFAULT_FOLDER_ORDER: u32 = 999;

/// Resolved display metadata for one folder segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderMeta {
    /// Name shown in the sidebar for this folder.
    pub display_name: String,
    /// Ascending sort rank among sibling folders.
    pub order: u32,
}

/// One `[folders.<segment>]` entry as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct FolderEntry {
    display_name: Option<String>,
    order: Option<u32>,
}

/// Raw configuration file shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    folders: HashMap<String, FolderEntry>,
}

/// Static mapping from folder segment names to display metadata.
///
/// Supplied at startup, either loaded from [`CONFIG_FILENAME`] or built in
/// code with [`FolderTable::with_folder`]. Lookups never fail: unmapped
/// segments get the humanized-name / order-999 fallback.
#[derive(Debug, Default)]
pub struct FolderTable {
    folders: HashMap<String, FolderEntry>,
}

impl FolderTable {
    /// Create an empty table (every segment resolves to the fallback).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an explicit entry for a segment.
    #[must_use]
    pub fn with_folder(mut self, segment: &str, display_name: &str, order: u32) -> Self {
        self.folders.insert(
            segment.to_owned(),
            FolderEntry {
                display_name: Some(display_name.to_owned()),
                order: Some(order),
            },
        );
        self
    }

    /// Parse a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(Self {
            folders: file.folders,
        })
    }

    /// Load a table from a config file path (`~` is expanded).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file doesn't exist,
    /// [`ConfigError::Io`] if it can't be read, or [`ConfigError::Parse`]
    /// on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let expanded = PathBuf::from(expanded);
        if !expanded.exists() {
            return Err(ConfigError::NotFound(expanded));
        }
        let text = std::fs::read_to_string(&expanded)?;
        Self::from_toml_str(&text)
    }

    /// Resolve display metadata for a folder segment.
    ///
    /// Falls back to the humanized segment name and [`DEFAULT_FOLDER_ORDER`]
    /// for anything the table doesn't cover.
    #[must_use]
    pub fn meta_for(&self, segment: &str) -> FolderMeta {
        let entry = self.folders.get(segment);
        FolderMeta {
            display_name: entry
                .and_then(|e| e.display_name.clone())
                .unwrap_or_else(|| humanize(segment)),
            order: entry
                .and_then(|e| e.order)
                .unwrap_or(DEFAULT_FOLDER_ORDER),
        }
    }
}

/// Humanize a path segment: separators become spaces.
///
/// `"getting-started"` -> `"getting started"`, `"api_reference"` ->
/// `"api reference"`. Casing is left alone; authored display names belong
/// in the table.
#[must_use]
pub fn humanize(segment: &str) -> String {
    segment.replace(['-', '_'], " ")
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
