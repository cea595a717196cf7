//! Document catalog contract for the navtree engine.
//!
//! This crate provides a [`CatalogSource`] trait for abstracting document
//! enumeration from the underlying storage collaborator. This enables:
//!
//! - **Unit testing** without touching a real filesystem
//! - **Backend flexibility** (filesystem scanner, CMS export, fixtures)
//! - **Clean separation** between tree-building logic and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Document`] records with slug/title/index and missing-field defaults
//! - [`CatalogSource`] trait with a single `scan()` method
//! - [`slug_from_relative_path`] for collaborators deriving slugs from paths
//! - [`MockCatalog`] for testing (behind the `mock` feature flag)
//!
//! # Slug Convention
//!
//! A slug is a `/`-joined sequence of non-empty path segments, unique per
//! catalog, derived from a relative storage path with the extension stripped:
//! - `"intro"` - top-level document
//! - `"guide/setup"` - nested document
//!
//! Slug validity is *not* enforced here; the tree builder rejects malformed
//! entries with a reported issue so one bad document cannot break navigation.

mod document;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use document::{Document, slug_from_relative_path};
#[cfg(feature = "mock")]
pub use mock::MockCatalog;
pub use source::{CatalogError, CatalogErrorKind, CatalogSource};
