//! Rendering of generated manifests.
//!
//! The catalog is rendered as an ES module by default, or as plain JSON for
//! consumers that do not go through a JavaScript bundler.

pub mod js_module;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Catalog, FirmwareBundle};

pub use js_module::{render_js_module, render_record};

/// Output format of the keyboard manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ES module exporting `keyboards`
    #[default]
    Js,
    /// JSON array of keyboard records
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Js => write!(f, "js"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Renders the catalog in the requested format.
pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Js => Ok(render_js_module(catalog)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&catalog.keyboards)
                .context("Failed to serialize keyboard catalog")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Renders the firmware bundle map as pretty-printed JSON.
pub fn render_bundle_map(bundles: &BTreeMap<String, FirmwareBundle>) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(bundles).context("Failed to serialize firmware bundles")?;
    json.push('\n');
    Ok(json)
}
