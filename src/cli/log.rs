//! Audit log and reset commands

use crate::error::HourlyBuysResult;
use crate::services::reset_app;
use crate::storage::Storage;

/// Handle `log`: show the most recent audit entries
pub fn handle_log_command(storage: &Storage, limit: usize) -> HourlyBuysResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

/// Handle `reset`
pub fn handle_reset_command(storage: &Storage, force: bool) -> HourlyBuysResult<()> {
    if !force {
        println!("This will restore the default products and clear your wage, location and profile.");
        println!("Calculation history is kept.");
        println!("To proceed, run again with --force flag:");
        println!("  hourlybuys reset --force");
        return Ok(());
    }

    reset_app(storage)?;
    println!("HourlyBuys has been reset to its defaults.");
    Ok(())
}
