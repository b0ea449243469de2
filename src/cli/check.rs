//! Check command: scan the configuration tree without writing anything.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{KeyboardRecord, MissingConfig};
use crate::services::CatalogScanner;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate the configuration tree and report missing config files
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Root directory with one subdirectory per keyboard
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat missing config files as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON response for the check command
#[derive(Debug, Clone, Serialize)]
struct CheckResponse<'a> {
    /// Keyboard records that would be generated
    keyboards: &'a [KeyboardRecord],
    /// Missing companion config files
    missing: &'a [MissingConfig],
    /// Number of keyboards
    count: usize,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let root = self
            .config_dir
            .clone()
            .unwrap_or_else(|| config.paths.config_dir.clone());
        let strict = self.strict || config.generate.strict;

        let scanner = CatalogScanner::new(&root)?;

        let catalog = if self.json {
            scanner.scan()?
        } else {
            scanner.scan_with(|missing| println!("{missing}"))?
        };

        if self.json {
            let response = CheckResponse {
                keyboards: &catalog.keyboards,
                missing: &catalog.missing,
                count: catalog.keyboards.len(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for kb in &catalog.keyboards {
                let layouts: Vec<&str> = kb
                    .layouts
                    .iter()
                    .map(|l| if l.is_empty() { "(default)" } else { l.as_str() })
                    .collect();
                let mut flags = Vec::new();
                if kb.split {
                    flags.push("split");
                }
                if kb.lpme {
                    flags.push("lpme");
                }
                println!("  {:<24} {} [{}]", kb.name, layouts.join(", "), flags.join(", "));
            }

            if catalog.is_complete() {
                println!(
                    "✓ {} keyboards, all config files present",
                    catalog.keyboards.len()
                );
            } else {
                println!(
                    "⚠ {} keyboards, {} missing config files",
                    catalog.keyboards.len(),
                    catalog.missing.len()
                );
            }
        }

        if strict && !catalog.is_complete() {
            return Err(CliError::validation(format!(
                "{} expected config files missing (strict mode)",
                catalog.missing.len()
            )));
        }

        Ok(())
    }
}
