//! Service layer for business logic.
//!
//! Services do the filesystem work: scanning configuration trees, listing
//! firmware bundles, and writing generated manifests.

pub mod bundles;
pub mod catalog;
pub mod manifest;

// Re-export commonly used types and functions
pub use bundles::scan_bundles;
pub use catalog::{CatalogScanner, ScanError};
pub use manifest::ManifestService;
