use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hourlybuys::cli::{
    handle_calc_command, handle_check_command, handle_export_command, handle_history_command,
    handle_location_command, handle_log_command, handle_product_command, handle_profile_command,
    handle_reset_command, handle_wage_command, CalcArgs, CheckArgs, ExportFormat, HistoryCommands,
    LocationCommands, ProductCommands, ProfileCommands, WageCommands,
};
use hourlybuys::config::{HourlyBuysPaths, Settings};
use hourlybuys::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "hourlybuys",
    version,
    about = "See what one hour of work buys you",
    long_about = "HourlyBuys turns your hourly wage into purchasing power: how many \
                  units of everyday products one hour of work can buy. An optional \
                  AI price check flags prices that look wrong before you calculate."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with the default products
    Init,

    /// Show current configuration and paths
    Config,

    /// Product management commands
    #[command(subcommand)]
    Product(ProductCommands),

    /// Hourly wage commands
    #[command(subcommand)]
    Wage(WageCommands),

    /// Location commands
    #[command(subcommand)]
    Location(LocationCommands),

    /// Ask the AI price checker whether any prices look wrong
    Check(CheckArgs),

    /// Calculate what one hour of work buys and save it to history
    #[command(alias = "calculate")]
    Calc(CalcArgs),

    /// Calculation history commands
    #[command(subcommand)]
    History(HistoryCommands),

    /// Profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Export history and data
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Restore default products and clear wage, location and profile
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = HourlyBuysPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!("Using data directory {}", paths.base_dir().display());

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing HourlyBuys at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default products have been created:");
            println!("  Rice, Flour, Cooking Oil, Pork, Eggs, Milk");
            println!();
            println!("Next: set your wage with 'hourlybuys wage set <WAGE>',");
            println!("then run 'hourlybuys calc'.");
        }
        Some(Commands::Config) => {
            println!("HourlyBuys Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  Price check:     {}",
                if settings.price_check.enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            println!("    Endpoint:      {}", settings.price_check.endpoint);
            println!("    Model:         {}", settings.price_check.model);
            println!("    Threshold:     {}%", settings.price_check.threshold_percent);
            println!(
                "    API key:       {} ({})",
                settings.price_check.api_key_env,
                if settings.price_check.api_key().is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
        }
        Some(Commands::Product(cmd)) => handle_product_command(&storage, &settings, cmd)?,
        Some(Commands::Wage(cmd)) => handle_wage_command(&storage, &settings, cmd)?,
        Some(Commands::Location(cmd)) => handle_location_command(&storage, cmd)?,
        Some(Commands::Check(args)) => handle_check_command(&storage, &settings, args).await?,
        Some(Commands::Calc(args)) => handle_calc_command(&storage, &settings, args).await?,
        Some(Commands::History(cmd)) => handle_history_command(&storage, &settings, cmd)?,
        Some(Commands::Profile(cmd)) => handle_profile_command(&storage, cmd)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?
        }
        Some(Commands::Log { limit }) => handle_log_command(&storage, limit)?,
        Some(Commands::Reset { force }) => handle_reset_command(&storage, force)?,
        None => {
            println!("HourlyBuys - see what one hour of work buys you");
            println!();
            println!("Run 'hourlybuys --help' for usage information.");
            println!("Run 'hourlybuys init' to get started.");
        }
    }

    Ok(())
}
