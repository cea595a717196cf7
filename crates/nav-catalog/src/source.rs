//! Catalog source trait and error types.
//!
//! Provides the [`CatalogSource`] trait for abstracting document enumeration,
//! along with [`CatalogError`] for unified error handling across backends.
//!
//! The consumer (the tree builder) receives a materialized snapshot and never
//! re-enters the source; scanning may block or run async inside a backend,
//! but `scan()` itself is a plain synchronous call returning resolved data.

use std::path::PathBuf;

use crate::document::Document;

/// Semantic error categories for catalog backends.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    /// Source location does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path or identifier.
    InvalidPath,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Catalog error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct CatalogError {
    /// Semantic error category.
    pub kind: CatalogErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CatalogError {
    /// Create a new catalog error.
    #[must_use]
    pub fn new(kind: CatalogErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(CatalogErrorKind::NotFound).with_path(path)
    }

    /// Create a catalog error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => CatalogErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => CatalogErrorKind::PermissionDenied,
            _ => CatalogErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            CatalogErrorKind::NotFound => "Not found",
            CatalogErrorKind::PermissionDenied => "Permission denied",
            CatalogErrorKind::InvalidPath => "Invalid path",
            CatalogErrorKind::Unavailable => "Unavailable",
            CatalogErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Abstraction over the document-enumeration collaborator.
///
/// Implementations own path-to-slug mapping (see
/// [`slug_from_relative_path`](crate::slug_from_relative_path)), title
/// extraction, and ordering-index resolution. The returned snapshot is
/// ordered; relative order among sibling documents is the tie-break used
/// when ordering indices are equal.
pub trait CatalogSource: Send + Sync {
    /// Scan and return all documents as an ordered snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if scanning fails (e.g., permission denied,
    /// backend unavailable). Individually malformed entries are *not* errors
    /// at this level; the tree builder rejects and reports them.
    fn scan(&self) -> Result<Vec<Document>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_catalog_error_new() {
        let err = CatalogError::new(CatalogErrorKind::NotFound);

        assert_eq!(err.kind, CatalogErrorKind::NotFound);
        assert!(err.path.is_none());
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_catalog_error_not_found() {
        let err = CatalogError::not_found("/docs");

        assert_eq!(err.kind, CatalogErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(Path::new("/docs")));
    }

    #[test]
    fn test_catalog_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = CatalogError::io(io_err, None);

        assert_eq!(err.kind, CatalogErrorKind::PermissionDenied);
    }

    #[test]
    fn test_catalog_error_display_simple() {
        let err = CatalogError::new(CatalogErrorKind::NotFound);

        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_catalog_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir");
        let err = CatalogError::new(CatalogErrorKind::NotFound)
            .with_backend("Fs")
            .with_path("/docs")
            .with_source(io_err);

        assert_eq!(err.to_string(), "[Fs] Not found: no such dir (path: /docs)");
    }

    #[test]
    fn test_catalog_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogError>();
    }
}
