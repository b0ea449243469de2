//! Prebuilt firmware bundle records.

use serde::{Deserialize, Serialize};

use crate::constants::FIRMWARE_NAME;

/// One keyboard entry of the firmware bundle map (`keyboards.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareBundle {
    /// Keyboard identifier derived from the bundle filename
    pub name: String,
    /// Layout variants; bundles only ship the default layout
    pub layout: Vec<String>,
    /// Default keymap bundle filename, when one ships alongside the config
    pub keymap: Vec<String>,
    /// Firmware the bundle targets
    pub firmware: String,
    /// True when a master or LPME bundle exists
    pub split: bool,
    /// True when an LPME bundle exists
    pub lpme: bool,
}

impl FirmwareBundle {
    /// Creates a non-split bundle record with the default layout.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: vec![String::new()],
            keymap: Vec::new(),
            firmware: FIRMWARE_NAME.to_string(),
            split: false,
            lpme: false,
        }
    }
}
