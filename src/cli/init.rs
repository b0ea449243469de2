//! Init command: write a default project config file.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

/// Write a default keyboard-catalog.toml
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Where to write the config file (default: ./keyboard-catalog.toml)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> CliResult<()> {
        let path = self.path.clone().unwrap_or_else(Config::local_config_path);

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Wrote {}", path.display());
        Ok(())
    }
}
