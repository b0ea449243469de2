//! Firmware command: list prebuilt configuration bundles as `keyboards.json`.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::render_bundle_map;
use crate::services::{scan_bundles, ManifestService};
use clap::Args;
use std::path::PathBuf;

/// Generate the firmware bundle map from a directory of `*_config.bin` files
#[derive(Debug, Clone, Args)]
pub struct FirmwareArgs {
    /// Directory containing the prebuilt bundles
    #[arg(long, value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Path of the generated JSON map
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl FirmwareArgs {
    /// Execute the firmware command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let bin_dir = self
            .bin_dir
            .clone()
            .unwrap_or_else(|| config.paths.bin_dir.clone());
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.paths.bin_output.clone());

        let bundles = scan_bundles(&bin_dir).map_err(|e| CliError::io(format!("{e:#}")))?;

        let contents = render_bundle_map(&bundles).map_err(|e| CliError::io(format!("{e:#}")))?;
        ManifestService::write(&output, &contents).map_err(|e| CliError::io(format!("{e:#}")))?;

        println!(
            "✓ Generated {} ({} keyboards)",
            output.display(),
            bundles.len()
        );

        Ok(())
    }
}
