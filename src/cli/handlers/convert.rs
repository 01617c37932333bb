//! Handler for the `convert` command.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ConvertArgs;
use crate::cli::config::Config;
use crate::cli::output::{ConvertResult, Output, OutputFormat};
use crate::convert::convert_export;
use crate::infra::{LABELS_FILENAME, read_export, write_output};

/// Handle the `convert` command.
///
/// The export is read and fully converted before the output directory is
/// touched, so a bad source never clears previous output.
pub fn handle_convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    let source = config.source(args.source.as_ref());
    let output_dir = config.output_dir(args.output_dir.as_ref());
    let archive = config.archive(args.archive.as_ref());

    info!(source = %source.display(), "reading export");
    let export = read_export(&source)?;

    let conversion = convert_export(&export)
        .with_context(|| format!("failed to convert {}", source.display()))?;

    let summary = write_output(&conversion, &output_dir, &archive)
        .with_context(|| format!("failed to write {}", output_dir.display()))?;

    print_result(
        args.format,
        ConvertResult {
            notes_exported: summary.notes_written,
            labels: summary.labels,
            skipped: conversion.skipped,
            output_dir: output_dir.display().to_string(),
            archive: archive.display().to_string(),
        },
        &archive,
    )
}

/// Print the result in the requested format.
fn print_result(format: OutputFormat, result: ConvertResult, archive: &Path) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!(
                "✅ {} notes + {} exported and zipped to: {}",
                result.notes_exported,
                LABELS_FILENAME,
                archive.display()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(result))?);
        }
        OutputFormat::Paths => {
            println!("{}", archive.display());
        }
    }
    Ok(())
}
