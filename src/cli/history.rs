//! History CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_history_details, format_history_list};
use crate::error::HourlyBuysResult;
use crate::services::HistoryService;
use crate::storage::Storage;

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List past calculations, newest first
    List {
        /// Number of entries to show
        #[arg(
            short,
            long,
            default_value = "20",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        limit: u64,
    },
    /// Show one calculation in full
    Show {
        /// Entry ID or position in the list (1 = newest)
        entry: String,
    },
    /// Delete one calculation
    Delete {
        /// Entry ID or position in the list (1 = newest)
        entry: String,
    },
    /// Delete all calculations
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a history command
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    cmd: HistoryCommands,
) -> HourlyBuysResult<()> {
    let service = HistoryService::new(storage);

    match cmd {
        HistoryCommands::List { limit } => {
            let entries = service.list()?;
            let limit = usize::try_from(limit).unwrap_or(usize::MAX);
            let shown = &entries[..entries.len().min(limit)];
            print!("{}", format_history_list(shown, settings));
            if !entries.is_empty() {
                println!("\nShowing {} of {} calculations", shown.len(), entries.len());
            }
        }

        HistoryCommands::Show { entry } => {
            let e = service.find(&entry)?;
            print!("{}", format_history_details(&e, settings));
        }

        HistoryCommands::Delete { entry } => {
            let e = service.find(&entry)?;
            service.delete(e.id)?;
            println!("Deleted calculation {}", e.id);
        }

        HistoryCommands::Clear { force } => {
            if !force {
                let count = storage.history.count()?;
                println!("This will delete all {} calculations.", count);
                println!("To proceed, run again with --force flag:");
                println!("  hourlybuys history clear --force");
                return Ok(());
            }

            let removed = service.clear()?;
            println!("Cleared {} calculations.", removed);
        }
    }

    Ok(())
}
