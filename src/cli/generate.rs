//! Generate command for the keyboard manifest.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{render_catalog, OutputFormat};
use crate::services::{CatalogScanner, ManifestService};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Scan the configuration tree and write the keyboard manifest
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Root directory with one subdirectory per keyboard
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Path of the generated manifest
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Manifest format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Treat missing config files as errors (nothing is written)
    #[arg(long)]
    pub strict: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let root = self
            .config_dir
            .clone()
            .unwrap_or_else(|| config.paths.config_dir.clone());
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.paths.output.clone());
        let format = self.format.unwrap_or(config.generate.format);
        let strict = self.strict || config.generate.strict;

        let scanner = CatalogScanner::new(&root)?;

        // Warnings go out as they are found; the manifest only after the whole tree passed
        let catalog = scanner.scan_with(|missing| println!("{missing}"))?;

        if strict && !catalog.is_complete() {
            return Err(CliError::validation(format!(
                "{} expected config files missing (strict mode)",
                catalog.missing.len()
            )));
        }

        let contents = render_catalog(&catalog, format)
            .map_err(|e| CliError::io(format!("Failed to render manifest: {e:#}")))?;

        if ManifestService::is_up_to_date(&output, &contents) {
            info!("{} unchanged", output.display());
        } else {
            ManifestService::write(&output, &contents)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
        }

        println!(
            "✓ Generated {} ({} keyboards)",
            output.display(),
            catalog.keyboards.len()
        );

        Ok(())
    }
}
