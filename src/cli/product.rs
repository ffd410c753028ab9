//! Product CLI commands
//!
//! Implements CLI commands for managing the product list.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_product_details, format_product_list};
use crate::error::HourlyBuysResult;
use crate::services::{parse_price, ProductService};
use crate::storage::Storage;

/// Product subcommands
#[derive(Subcommand)]
pub enum ProductCommands {
    /// List all products
    List,
    /// Show product details
    Show {
        /// Product name or ID
        product: String,
    },
    /// Add a custom product
    Add {
        /// Product name
        name: String,
        /// Price per unit
        price: String,
        /// Unit as currency/measure
        #[arg(short, long, default_value = "CNY/jin")]
        unit: String,
    },
    /// Change a product's price
    Price {
        /// Product name or ID
        product: String,
        /// New price per unit (0 means free)
        price: String,
    },
    /// Remove a custom product
    #[command(alias = "rm")]
    Remove {
        /// Product name or ID
        product: String,
    },
}

/// Handle a product command
pub fn handle_product_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProductCommands,
) -> HourlyBuysResult<()> {
    let service = ProductService::new(storage);

    match cmd {
        ProductCommands::List => {
            let products = service.list()?;
            print!("{}", format_product_list(&products, settings));
            println!("\nTotal: {} products", products.len());
        }

        ProductCommands::Show { product } => {
            let p = service.require(&product)?;
            print!("{}", format_product_details(&p, settings));
        }

        ProductCommands::Add { name, price, unit } => {
            let price = parse_price(&price)?;
            let p = service.add(&name, &unit, price)?;
            println!("Added product: {}", p);
            println!("  ID: {}", p.id);
        }

        ProductCommands::Price { product, price } => {
            let price = parse_price(&price)?;
            let p = service.require(&product)?;
            let old = p.price;
            let p = service.update_price(p.id, price)?;
            println!(
                "{}: {} -> {} per {}",
                p.name,
                settings.format_amount(old),
                settings.format_amount(p.price),
                p.unit
            );
        }

        ProductCommands::Remove { product } => {
            let p = service.require(&product)?;
            let removed = service.remove(p.id)?;
            println!("Removed product: {}", removed.name);
        }
    }

    Ok(())
}
