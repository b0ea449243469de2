//! Keyboard Catalog Library
//!
//! Scans a tree of per-keyboard configuration files, infers each keyboard's
//! layouts and capabilities from the filenames, and renders the manifest the
//! configurator front-end imports.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
