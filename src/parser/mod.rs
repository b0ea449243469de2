//! Parsing of configuration and firmware bundle filenames.
//!
//! Keyboard metadata is never read from file contents; everything the catalog
//! knows is inferred from the names of the files on disk.

pub mod bundle_name;
pub mod config_name;

// Re-export commonly used items
pub use bundle_name::{bundle_keyboard_name, BundleRole};
pub use config_name::{
    expected_config_names, is_lpme_available, is_split, ConfigNameParser, InferredConfig,
};
