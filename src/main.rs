//! Keyboard Catalog - manifest generator for the keyboard configurator
//!
//! Run without arguments to regenerate `./src/keyboards.js` from
//! `./static/config`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keyboard_catalog::cli::{
    CheckArgs, CliError, CliResult, FirmwareArgs, GenerateArgs, InitArgs,
};
use keyboard_catalog::config::Config;

/// Keyboard Catalog - generates the keyboard manifest from per-keyboard config files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: ./keyboard-catalog.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan the configuration tree and write the keyboard manifest (default)
    Generate(GenerateArgs),
    /// Validate the configuration tree without writing
    Check(CheckArgs),
    /// Generate the firmware bundle map
    Firmware(FirmwareArgs),
    /// Write a default config file
    Init(InitArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> CliResult<Config> {
    Config::load(path).map_err(|e| CliError::validation(format!("Failed to load config: {e:#}")))
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or_else(|| Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => args.execute(&load_config(config_path)?),
        Command::Check(args) => args.execute(&load_config(config_path)?),
        Command::Firmware(args) => args.execute(&load_config(config_path)?),
        Command::Init(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
