//! CLI command handlers.
//!
//! Each subcommand is a `clap::Args` struct with an `execute` method returning
//! [`CliResult`]; `main` maps errors to process exit codes.

pub mod check;
pub mod common;
pub mod firmware;
pub mod generate;
pub mod init;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use firmware::FirmwareArgs;
pub use generate::GenerateArgs;
pub use init::InitArgs;
