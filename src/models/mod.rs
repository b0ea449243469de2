//! Data models for the keyboard catalog.
//!
//! Models are plain data; scanning and rendering live in `services` and `export`.

pub mod firmware_bundle;
pub mod keyboard;

// Re-export all model types
pub use firmware_bundle::FirmwareBundle;
pub use keyboard::{Catalog, KeyboardRecord, MissingConfig};
