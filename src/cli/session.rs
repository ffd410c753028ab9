//! Wage and location CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::HourlyBuysResult;
use crate::services::{parse_wage, SessionService};
use crate::storage::Storage;

/// Wage subcommands
#[derive(Subcommand)]
pub enum WageCommands {
    /// Set your after-tax hourly wage
    Set {
        /// Hourly wage
        wage: String,
    },
    /// Show the current hourly wage
    Show,
    /// Clear the hourly wage
    Clear,
}

/// Location subcommands
#[derive(Subcommand)]
pub enum LocationCommands {
    /// Set your city or region
    Set {
        /// Location, e.g. "Shanghai"
        location: String,
    },
    /// Show the current location
    Show,
    /// Clear the location
    Clear,
}

/// Handle a wage command
pub fn handle_wage_command(
    storage: &Storage,
    settings: &Settings,
    cmd: WageCommands,
) -> HourlyBuysResult<()> {
    let service = SessionService::new(storage);

    match cmd {
        WageCommands::Set { wage } => {
            let wage = parse_wage(&wage)?;
            service.set_wage(wage)?;
            println!("Hourly wage set to {}", settings.format_amount(wage));
        }
        WageCommands::Show => match service.get()?.hourly_wage {
            Some(wage) => println!("Hourly wage: {}", settings.format_amount(wage)),
            None => println!("No hourly wage set. Use `hourlybuys wage set <WAGE>`."),
        },
        WageCommands::Clear => {
            service.clear_wage()?;
            println!("Hourly wage cleared.");
        }
    }

    Ok(())
}

/// Handle a location command
pub fn handle_location_command(storage: &Storage, cmd: LocationCommands) -> HourlyBuysResult<()> {
    let service = SessionService::new(storage);

    match cmd {
        LocationCommands::Set { location } => {
            match service.set_location(Some(&location))?.location {
                Some(location) => println!("Location set to {}", location),
                None => println!("Location cleared."),
            }
        }
        LocationCommands::Show => match service.get()?.location {
            Some(location) => println!("Location: {}", location),
            None => println!("No location set."),
        },
        LocationCommands::Clear => {
            service.set_location(None)?;
            println!("Location cleared.");
        }
    }

    Ok(())
}
