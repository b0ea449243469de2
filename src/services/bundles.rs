//! Firmware bundle listing.
//!
//! Scans a flat directory of prebuilt `*_config.bin` bundles and groups them
//! into one record per keyboard.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::models::FirmwareBundle;
use crate::parser::bundle_name::{bundle_keyboard_name, default_keymap_name, BundleRole};

/// Scans `bin_dir` for configuration bundles, keyed by keyboard name.
///
/// Files that are not configuration bundles only matter as default keymaps.
pub fn scan_bundles(bin_dir: &Path) -> Result<BTreeMap<String, FirmwareBundle>> {
    info!("Scanning firmware bundles in {}", bin_dir.display());

    let entries = fs::read_dir(bin_dir)
        .with_context(|| format!("Failed to read directory: {}", bin_dir.display()))?;

    let mut file_names = BTreeSet::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        file_names.insert(entry.file_name().to_string_lossy().into_owned());
    }

    let mut bundles: BTreeMap<String, FirmwareBundle> = BTreeMap::new();

    for file_name in &file_names {
        let Some(keyboard) = bundle_keyboard_name(file_name) else {
            continue;
        };

        let bundle = bundles
            .entry(keyboard.clone())
            .or_insert_with(|| FirmwareBundle::new(&keyboard));

        match BundleRole::from_file_name(file_name) {
            BundleRole::Lpme => {
                bundle.lpme = true;
                bundle.split = true;
            }
            BundleRole::Master => bundle.split = true,
            BundleRole::Other => {}
        }

        let keymap = default_keymap_name(&keyboard);
        if bundle.keymap.is_empty() && file_names.contains(&keymap) {
            bundle.keymap.push(keymap);
        }

        debug!("{file_name} -> {keyboard}");
    }

    info!("Found {} firmware bundles", bundles.len());

    Ok(bundles)
}
