//! Application-wide constants.
//!
//! This module defines the config file locations and the default locations of
//! the configuration tree and the generated manifests.

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "KeyboardCatalog";

/// Project-local config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "keyboard-catalog.toml";

/// Default root of the per-keyboard configuration tree.
pub const DEFAULT_CONFIG_DIR: &str = "./static/config";

/// Default path of the generated manifest module.
pub const DEFAULT_OUTPUT: &str = "./src/keyboards.js";

/// Default directory holding prebuilt `*_config.bin` bundles.
pub const DEFAULT_BIN_DIR: &str = "./public/config";

/// Default path of the generated firmware bundle map.
pub const DEFAULT_BIN_OUTPUT: &str = "./src/keyboards.json";

/// Firmware identifier stamped on every firmware bundle record.
pub const FIRMWARE_NAME: &str = "ble_micro_pro";
