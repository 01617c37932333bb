//! keepport - convert a Simplenote export into a Google Keep import archive

pub mod cli;
pub mod convert;
pub mod domain;
pub mod infra;
pub mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_convert},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Some(Command::Completions(args)) => handle_completions(args),
        Some(Command::Convert(args)) => handle_convert(args, &Config::load()?),
        None => handle_convert(&cli.convert, &Config::load()?),
    }
}
