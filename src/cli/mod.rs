//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// keepport - convert a Simplenote export into a Google Keep import archive
#[derive(Parser, Debug)]
#[command(name = "keepport", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the default `convert` command
    #[command(flatten)]
    pub convert: ConvertArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an export into Keep notes, a label manifest, and a zip (default)
    Convert(ConvertArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `convert` command
#[derive(Args, Debug, Default, Clone)]
pub struct ConvertArgs {
    /// Simplenote export file (default: simplenote_export.json)
    pub source: Option<PathBuf>,

    /// Directory for the converted notes; cleared before writing
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path of the zip archive to create
    #[arg(short, long)]
    pub archive: Option<PathBuf>,

    /// Output format for the completion summary
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
