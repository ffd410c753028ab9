//! CLI command for data export

use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::export::{export_full_json, export_full_yaml, export_history_csv};
use crate::storage::Storage;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per calculation and product)
    Csv,
    /// JSON format (history, products, session and profile)
    Json,
    /// YAML format (same as JSON, human-readable)
    Yaml,
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
) -> HourlyBuysResult<()> {
    match format {
        ExportFormat::Csv => export_history_csv(storage, &mut *writer)?,
        ExportFormat::Json => export_full_json(storage, writer)?,
        ExportFormat::Yaml => export_full_yaml(storage, writer)?,
    }
    writer
        .flush()
        .map_err(|e| HourlyBuysError::Export(e.to_string()))
}

/// Handle `export`; writes to stdout when no output file is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> HourlyBuysResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                HourlyBuysError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer)?;

            let count = storage.history.count()?;
            eprintln!("Exported {} calculations to: {}", count, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, &mut writer)?;
        }
    }

    Ok(())
}
