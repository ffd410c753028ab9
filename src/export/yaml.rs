//! YAML Export functionality

use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export everything as YAML, with a short comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> HourlyBuysResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# HourlyBuys Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| HourlyBuysError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)
        .map_err(|e| HourlyBuysError::Export(e.to_string()))?;

    Ok(())
}
