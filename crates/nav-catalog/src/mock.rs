//! Mock catalog source for testing.
//!
//! Only available with the `mock` feature flag. Lets tree and sidebar tests
//! run against fixed catalogs without a real storage collaborator.

use crate::document::Document;
use crate::source::{CatalogError, CatalogErrorKind, CatalogSource};

/// In-memory [`CatalogSource`] backed by a fixed document list.
#[derive(Debug, Default)]
pub struct MockCatalog {
    documents: Vec<Document>,
    fail_scan: bool,
}

impl MockCatalog {
    /// Create an empty mock catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document to the snapshot, preserving insertion order.
    #[must_use]
    pub fn with_document(mut self, slug: &str, title: &str, index: i64) -> Self {
        self.documents.push(Document::new(slug, title, index));
        self
    }

    /// Make `scan()` fail with an `Unavailable` error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_scan = true;
        self
    }
}

impl CatalogSource for MockCatalog {
    fn scan(&self) -> Result<Vec<Document>, CatalogError> {
        if self.fail_scan {
            return Err(CatalogError::new(CatalogErrorKind::Unavailable).with_backend("Mock"));
        }
        Ok(self.documents.clone())
    }
}
